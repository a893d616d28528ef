use std::{fmt::Display, rc::Rc};

use crate::{
    environment::prelude::EnvId,
    expression::prelude::{Arity, Expression, Symbol},
};

/// An expression with its syntactic dispatch already resolved.
///
/// Produced once by [`analyze`](super::analyzer::analyze) and executed any
/// number of times by [`execute`](crate::eval::prelude::execute).
#[derive(Debug)]
pub enum Analyzed {
    /// Self-evaluating data and the operand of `quote`.
    Constant(Expression),
    Variable(Symbol),
    Assignment {
        name: Symbol,
        value: Box<Analyzed>,
    },
    Definition {
        name: Symbol,
        value: Box<Analyzed>,
    },
    Conditional {
        test: Box<Analyzed>,
        consequent: Box<Analyzed>,
        alternative: Box<Analyzed>,
    },
    Lambda(Rc<Lambda>),
    /// Never empty.
    Sequence(Vec<Analyzed>),
    Application {
        operator: Box<Analyzed>,
        operands: Vec<Analyzed>,
    },
}

impl Analyzed {
    /// Pushes the frames kept alive by constants embedded in this tree.
    pub fn trace(&self, pending: &mut Vec<EnvId>) {
        match self {
            Analyzed::Constant(value) => value.trace(pending),
            Analyzed::Variable(_) => {},
            Analyzed::Assignment { value, .. } | Analyzed::Definition { value, .. } => {
                value.trace(pending)
            },
            Analyzed::Conditional { test, consequent, alternative } => {
                test.trace(pending);
                consequent.trace(pending);
                alternative.trace(pending);
            },
            Analyzed::Lambda(lambda) => lambda.body.trace(pending),
            Analyzed::Sequence(body) => body.iter().for_each(|unit| unit.trace(pending)),
            Analyzed::Application { operator, operands } => {
                operator.trace(pending);
                operands.iter().for_each(|unit| unit.trace(pending));
            },
        }
    }
}

#[derive(Debug)]
pub struct Lambda {
    /// Set for `(define (name ...) ...)` and `(define name (lambda ...))`.
    pub name: Option<Symbol>,
    pub parameters: Parameters,
    pub body: Analyzed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    pub required: Vec<Symbol>,
    /// Bound to the list of surplus arguments.
    pub rest: Option<Symbol>,
}

impl Parameters {
    pub fn arity(&self) -> Arity {
        match self.rest {
            Some(_) => Arity::AtLeast(self.required.len()),
            None => Arity::Exactly(self.required.len()),
        }
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (true, Some(rest)) = (self.required.is_empty(), &self.rest) {
            return write!(f, "{rest}");
        }

        let names = self.required.iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        match &self.rest {
            Some(rest) => write!(f, "({names} . {rest})"),
            None => write!(f, "({names})"),
        }
    }
}
