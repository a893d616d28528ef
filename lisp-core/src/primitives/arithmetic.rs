use std::cmp::Ordering;

use crate::{
    eval::prelude::{EvalError, EvalResult, TypeError},
    expression::prelude::{Expression, Number},
    interpreter::Interpreter,
};

fn number<'a>(procedure: &'static str, value: &'a Expression) -> EvalResult<&'a Number> {
    value.as_number()
        .ok_or_else(|| TypeError::wrong_type(procedure, "a number", value).into())
}

fn numbers<'a>(procedure: &'static str, arguments: &'a [Expression]) -> EvalResult<Vec<&'a Number>> {
    arguments.iter()
        .map(|argument| number(procedure, argument))
        .collect()
}

pub fn add(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let sum = numbers("+", &arguments)?
        .into_iter()
        .fold(Number::zero(), |sum, n| sum.add(n));

    Ok(Expression::number(sum))
}

pub fn mul(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let product = numbers("*", &arguments)?
        .into_iter()
        .fold(Number::one(), |product, n| product.mul(n));

    Ok(Expression::number(product))
}

/// `(- x)` negates, `(- x y ...)` subtracts left to right.
pub fn sub(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let result = match numbers("-", &arguments)?.as_slice() {
        [only] => only.neg(),
        [first, rest @ ..] => rest.iter().fold((*first).clone(), |acc, n| acc.sub(n)),
        [] => Number::zero(),
    };

    Ok(Expression::number(result))
}

/// `(/ x)` is the reciprocal, `(/ x y ...)` divides left to right.
pub fn div(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let result = match numbers("/", &arguments)?.as_slice() {
        [only] => Number::one().div(only),
        [first, rest @ ..] => rest.iter()
            .try_fold((*first).clone(), |acc, n| acc.div(n)),
        [] => Some(Number::one()),
    };

    result
        .map(Expression::number)
        .ok_or(EvalError::DivisionByZero)
}

/// True when every adjacent pair satisfies `holds`. NaN satisfies nothing.
fn chain(
    procedure: &'static str,
    arguments: &[Expression],
    holds: fn(Ordering) -> bool
) -> EvalResult<Expression> {
    let numbers = numbers(procedure, arguments)?;

    let result = numbers.windows(2)
        .all(|pair| pair[0].compare(pair[1]).is_some_and(holds));

    Ok(Expression::boolean(result))
}

pub fn equal(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    chain("=", &arguments, Ordering::is_eq)
}

pub fn less(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    chain("<", &arguments, Ordering::is_lt)
}

pub fn greater(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    chain(">", &arguments, Ordering::is_gt)
}

pub fn less_or_equal(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    chain("<=", &arguments, Ordering::is_le)
}

pub fn greater_or_equal(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    chain(">=", &arguments, Ordering::is_ge)
}
