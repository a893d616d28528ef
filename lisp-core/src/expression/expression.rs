use std::{fmt::Display, rc::Rc};

use crate::environment::prelude::EnvId;

use super::{
    number::Number,
    procedure::{Closure, Primitive},
    symbol::Symbol,
};

pub const TRUE: Expression = Expression::Boolean { value: true };
pub const FALSE: Expression = Expression::Boolean { value: false };

/// Name of the symbol returned by `define` and `set!`.
pub const ACKNOWLEDGEMENT: &str = "ok";

/// The single value type shared by syntax and runtime data.
#[derive(Debug, Clone)]
pub enum Expression {
    Number {
        value: Number,
    },
    String {
        value: Rc<str>,
    },
    Boolean {
        value: bool,
    },
    Symbol {
        name: Symbol,
    },
    Pair(Rc<Pair>),
    /// The empty list.
    Nil,
    Quoted(Rc<Expression>),
    Closure(Rc<Closure>),
    Primitive(Primitive),
}

#[derive(Debug, Clone)]
pub struct Pair {
    pub head: Expression,
    pub tail: Expression,
}

/// Follows tails in a loop so long lists compare in constant stack depth.
impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);

        loop {
            if a.head != b.head {
                return false;
            }

            match (&a.tail, &b.tail) {
                (Expression::Pair(x), Expression::Pair(y)) => {
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }

                    a = x;
                    b = y;
                },
                (x, y) => return x == y,
            }
        }
    }
}

/// Unlinks uniquely owned tails one by one instead of dropping them
/// recursively.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut tail = std::mem::replace(&mut self.tail, Expression::Nil);

        while let Expression::Pair(pair) = tail {
            match Rc::try_unwrap(pair) {
                Ok(mut pair) => tail = std::mem::replace(&mut pair.tail, Expression::Nil),
                Err(_) => break,
            }
        }
    }
}

impl Expression {
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number { value: value.into() }
    }

    pub fn string(value: impl AsRef<str>) -> Self {
        Self::String { value: Rc::from(value.as_ref()) }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean { value }
    }

    pub fn symbol(name: impl Into<Symbol>) -> Self {
        Self::Symbol { name: name.into() }
    }

    pub fn cons(head: Expression, tail: Expression) -> Self {
        Self::Pair(Rc::new(Pair { head, tail }))
    }

    pub fn quote(datum: Expression) -> Self {
        Self::Quoted(Rc::new(datum))
    }

    pub fn acknowledgement() -> Self {
        Self::symbol(ACKNOWLEDGEMENT)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::String { .. } => "string",
            Self::Boolean { .. } => "boolean",
            Self::Symbol { .. } => "symbol",
            Self::Pair(_) => "pair",
            Self::Nil => "empty list",
            Self::Quoted(_) => "quoted datum",
            Self::Closure(_) => "procedure",
            Self::Primitive(_) => "primitive procedure",
        }
    }

    /// Only the boolean false value selects the alternative of an `if`.
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean { value: false })
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Self::Pair(pair) => Some(pair.as_ref()),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol { name } => Some(name),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value } => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Pushes every environment frame this value keeps alive.
    pub fn trace(&self, pending: &mut Vec<EnvId>) {
        let mut current = self;

        loop {
            match current {
                Self::Pair(pair) => {
                    pair.head.trace(pending);
                    current = &pair.tail;
                },
                Self::Quoted(datum) => current = datum.as_ref(),
                Self::Closure(closure) => {
                    pending.push(closure.env);
                    closure.lambda.body.trace(pending);
                    return;
                },
                Self::Number { .. }
                | Self::String { .. }
                | Self::Boolean { .. }
                | Self::Symbol { .. }
                | Self::Nil
                | Self::Primitive(_) => return,
            }
        }
    }
}

/// Structural equality, the semantics of `equal?`. Numbers compare by value,
/// procedures by identity.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a }, Self::Number { value: b }) => a == b,
            (Self::String { value: a }, Self::String { value: b }) => a == b,
            (Self::Boolean { value: a }, Self::Boolean { value: b }) => a == b,
            (Self::Symbol { name: a }, Self::Symbol { name: b }) => a == b,
            (Self::Pair(a), Self::Pair(b)) => Rc::ptr_eq(a, b) || a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Quoted(a), Self::Quoted(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::String { value } => write_string(f, value),
            Self::Boolean { value: true } => write!(f, "#t"),
            Self::Boolean { value: false } => write!(f, "#f"),
            Self::Symbol { name } => write!(f, "{name}"),
            Self::Nil => write!(f, "()"),
            Self::Quoted(datum) => write!(f, "'{datum}"),
            Self::Closure(closure) => match closure.name() {
                Some(name) => write!(f, "#<procedure {name}>"),
                None => write!(f, "#<procedure {}>", closure.parameters()),
            },
            Self::Primitive(primitive) => write!(f, "#<primitive {}>", primitive.name),
            Self::Pair(pair) => {
                write!(f, "({}", pair.head)?;

                let mut current = &pair.tail;

                loop {
                    match current {
                        Self::Nil => break,
                        Self::Pair(pair) => {
                            write!(f, " {}", pair.head)?;
                            current = &pair.tail;
                        },
                        tail => {
                            write!(f, " . {tail}")?;
                            break;
                        }
                    }
                }

                write!(f, ")")
            }
        }
    }
}

fn write_string(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
    write!(f, "\"")?;

    for ch in value.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            ch => write!(f, "{ch}")?,
        }
    }

    write!(f, "\"")
}
