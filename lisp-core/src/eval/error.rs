use std::path::PathBuf;

use crate::{
    analyzer::prelude::AnalyzeError,
    expression::prelude::{Arity, Expression, Symbol},
    parser::prelude::ParseError,
    utils::prelude::ErrorKind,
};

pub type EvalResult<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Unbound variable: {name}")]
    UnboundVariable {
        name: Symbol,
    },
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
    #[error("Division by zero")]
    DivisionByZero,
    /// A handle outlived its frame. Only possible when frames are collected
    /// while something outside the interpreter still holds a closure.
    #[error("Environment frame was already reclaimed")]
    ReclaimedEnvironment,
    /// Raised by `load` for a file that does not read.
    #[error("Syntax error in `{}`: {}", .path.display(), .error.details().0)]
    Syntax {
        path: PathBuf,
        src: String,
        error: ParseError,
    },
    #[error("Could not read `{}`: {err}", .path.display())]
    Io {
        path: PathBuf,
        err: std::io::ErrorKind,
    },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            EvalError::Type(_) => ErrorKind::Type,
            EvalError::Arity(_) => ErrorKind::Arity,
            EvalError::Analyze(_) => ErrorKind::UnknownForm,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::ReclaimedEnvironment => ErrorKind::ReclaimedEnvironment,
            EvalError::Syntax { .. } => ErrorKind::Syntax,
            EvalError::Io { .. } => ErrorKind::Io,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("The object {got}, passed as an argument to `{procedure}`, is not {expected}")]
    WrongType {
        procedure: &'static str,
        expected: &'static str,
        got: Expression,
    },
    #[error("The object {got} is not applicable")]
    NotApplicable {
        got: Expression,
    },
}

impl TypeError {
    pub fn wrong_type(procedure: &'static str, expected: &'static str, got: &Expression) -> Self {
        Self::WrongType {
            procedure,
            expected,
            got: got.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArityError {
    #[error("Too many arguments: expected {expected}, got {got}")]
    TooManyArguments {
        expected: Arity,
        got: usize,
    },
    #[error("Too few arguments: expected {expected}, got {got}")]
    TooFewArguments {
        expected: Arity,
        got: usize,
    },
}

impl ArityError {
    pub fn check(expected: Arity, got: usize) -> Result<(), ArityError> {
        match expected {
            _ if expected.accepts(got) => Ok(()),
            Arity::Exactly(count) if got > count => Err(ArityError::TooManyArguments { expected, got }),
            _ => Err(ArityError::TooFewArguments { expected, got }),
        }
    }
}
