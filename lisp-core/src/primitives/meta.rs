use std::path::PathBuf;

use crate::{
    eval::prelude::{apply as apply_procedure, EvalResult, TypeError},
    expression::prelude::Expression,
    interpreter::Interpreter,
};

/// Evaluates a datum in the root environment. A quoted datum is unwrapped
/// first, so `(eval ''x)` looks up `x`.
pub fn eval(interpreter: &mut Interpreter, mut arguments: Vec<Expression>) -> EvalResult<Expression> {
    let datum = match arguments.pop() {
        Some(Expression::Quoted(datum)) => datum.as_ref().clone(),
        Some(datum) => datum,
        None => Expression::Nil,
    };

    let global = interpreter.global();

    interpreter.eval_in(&datum, global)
}

/// `(apply f a b '(c d))` calls `(f a b c d)`. Only the final argument is
/// spread; `(apply f '(1) 2)` is a type error rather than `(f '(1) 2)`.
pub fn apply(interpreter: &mut Interpreter, mut arguments: Vec<Expression>) -> EvalResult<Expression> {
    let spread = arguments.pop().unwrap_or(Expression::Nil);
    let spread = spread.to_vec()
        .map_err(|_| TypeError::wrong_type("apply", "a list", &spread))?;

    let mut arguments = arguments.into_iter();
    let procedure = arguments.next().unwrap_or(Expression::Nil);
    let arguments = arguments.chain(spread).collect();

    apply_procedure(interpreter, &procedure, arguments)
}

pub fn load(interpreter: &mut Interpreter, mut arguments: Vec<Expression>) -> EvalResult<Expression> {
    let argument = arguments.pop().unwrap_or(Expression::Nil);
    let path = argument.as_str()
        .map(PathBuf::from)
        .ok_or_else(|| TypeError::wrong_type("load", "a string", &argument))?;

    let global = interpreter.global();
    interpreter.load_file(&path, global)?;

    Ok(Expression::acknowledgement())
}
