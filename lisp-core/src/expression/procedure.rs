use std::{fmt::{Debug, Display}, rc::Rc};

use crate::{
    analyzer::prelude::{Lambda, Parameters},
    environment::prelude::EnvId,
    eval::prelude::EvalResult,
    interpreter::Interpreter,
};

use super::{expression::Expression, symbol::Symbol};

/// How many arguments a procedure accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(expected) => count == expected,
            Arity::AtLeast(minimum) => count >= minimum,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(count) => write!(f, "{count}"),
            Arity::AtLeast(count) => write!(f, "at least {count}"),
        }
    }
}

/// Native procedure body. Arguments arrive already evaluated and already
/// checked against the primitive's declared [`Arity`].
pub type PrimitiveFn = fn(&mut Interpreter, Vec<Expression>) -> EvalResult<Expression>;

#[derive(Clone, Copy)]
pub struct Primitive {
    pub name: &'static str,
    pub arity: Arity,
    pub func: PrimitiveFn,
}

impl Primitive {
    pub const fn new(name: &'static str, arity: Arity, func: PrimitiveFn) -> Self {
        Self { name, arity, func }
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// A user procedure: an analyzed lambda paired with the frame that was
/// current when the lambda expression was executed.
pub struct Closure {
    pub lambda: Rc<Lambda>,
    pub env: EnvId,
}

impl Closure {
    pub fn new(lambda: Rc<Lambda>, env: EnvId) -> Self {
        Self { lambda, env }
    }

    pub fn name(&self) -> Option<&Symbol> {
        self.lambda.name.as_ref()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.lambda.parameters
    }

    pub fn arity(&self) -> Arity {
        self.lambda.parameters.arity()
    }
}

impl Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name())
            .field("parameters", self.parameters())
            .field("env", &self.env)
            .finish()
    }
}
