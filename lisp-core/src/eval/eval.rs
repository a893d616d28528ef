use std::rc::Rc;

use crate::{
    analyzer::prelude::Analyzed,
    environment::prelude::EnvId,
    expression::prelude::{Closure, Expression},
    interpreter::Interpreter,
};

use super::{apply::apply, error::EvalResult};

/// Runs an analyzed unit against `env`.
///
/// Re-entrant: closure application calls back into it with a fresh frame.
/// Nothing already performed is undone when an error propagates out.
pub fn execute(interpreter: &mut Interpreter, unit: &Analyzed, env: EnvId) -> EvalResult<Expression> {
    match unit {
        Analyzed::Constant(value) => Ok(value.clone()),
        Analyzed::Variable(name) => interpreter.environments().lookup(env, name),
        Analyzed::Assignment { name, value } => {
            let value = execute(interpreter, value, env)?;
            interpreter.environments_mut().set_value(env, name, value)?;

            Ok(Expression::acknowledgement())
        },
        Analyzed::Definition { name, value } => {
            let value = execute(interpreter, value, env)?;
            interpreter.environments_mut().define(env, name.clone(), value)?;

            Ok(Expression::acknowledgement())
        },
        Analyzed::Conditional { test, consequent, alternative } => {
            if execute(interpreter, test, env)?.is_false() {
                execute(interpreter, alternative, env)
            } else {
                execute(interpreter, consequent, env)
            }
        },
        Analyzed::Lambda(lambda) => {
            Ok(Expression::Closure(Rc::new(Closure::new(lambda.clone(), env))))
        },
        Analyzed::Sequence(units) => {
            let mut result = Expression::Nil;

            for unit in units {
                result = execute(interpreter, unit, env)?;
            }

            Ok(result)
        },
        Analyzed::Application { operator, operands } => {
            let procedure = execute(interpreter, operator, env)?;
            let arguments = operands.iter()
                .map(|operand| execute(interpreter, operand, env))
                .collect::<EvalResult<Vec<_>>>()?;

            apply(interpreter, &procedure, arguments)
        },
    }
}
