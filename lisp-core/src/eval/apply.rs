use tracing::trace;

use crate::{
    expression::prelude::{Closure, Expression, Primitive},
    interpreter::Interpreter,
};

use super::{
    error::{ArityError, EvalResult, TypeError},
    eval::execute,
};

/// Anything that can be called with a list of evaluated arguments.
pub trait Applicable {
    fn apply(&self, interpreter: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression>;
}

impl Applicable for Primitive {
    fn apply(&self, interpreter: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
        ArityError::check(self.arity, arguments.len())?;

        trace!(primitive = self.name, arguments = arguments.len(), "applying primitive");

        (self.func)(interpreter, arguments)
    }
}

impl Applicable for Closure {
    fn apply(&self, interpreter: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
        trace!(
            procedure = self.name().map(|name| name.as_str()).unwrap_or("anonymous"),
            arguments = arguments.len(),
            "applying closure"
        );

        let frame = interpreter.environments_mut().extend(self.env, self.parameters(), arguments)?;

        execute(interpreter, &self.lambda.body, frame)
    }
}

/// Calls `procedure`, failing with [`TypeError::NotApplicable`] for
/// anything that is neither a primitive nor a closure.
pub fn apply(
    interpreter: &mut Interpreter,
    procedure: &Expression,
    arguments: Vec<Expression>
) -> EvalResult<Expression> {
    match procedure {
        Expression::Primitive(primitive) => primitive.apply(interpreter, arguments),
        Expression::Closure(closure) => closure.apply(interpreter, arguments),
        other => Err(TypeError::NotApplicable { got: other.clone() }.into()),
    }
}
