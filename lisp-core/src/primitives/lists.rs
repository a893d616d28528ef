use crate::{
    eval::prelude::{EvalResult, TypeError},
    expression::prelude::{Expression, Pair},
    interpreter::Interpreter,
};

fn pair<'a>(procedure: &'static str, value: &'a Expression) -> EvalResult<&'a Pair> {
    value.as_pair()
        .ok_or_else(|| TypeError::wrong_type(procedure, "a pair", value).into())
}

/// Splits off the arguments of a primitive whose arity was already checked.
fn two(mut arguments: Vec<Expression>) -> (Expression, Expression) {
    let second = arguments.pop().unwrap_or(Expression::Nil);
    let first = arguments.pop().unwrap_or(Expression::Nil);

    (first, second)
}

fn one(mut arguments: Vec<Expression>) -> Expression {
    arguments.pop().unwrap_or(Expression::Nil)
}

pub fn car(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(pair("car", &one(arguments))?.head.clone())
}

pub fn cdr(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(pair("cdr", &one(arguments))?.tail.clone())
}

pub fn cons(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let (head, tail) = two(arguments);

    Ok(Expression::cons(head, tail))
}

pub fn list(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(Expression::list(arguments))
}

pub fn is_pair(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(Expression::boolean(one(arguments).is_pair()))
}

pub fn is_null(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(Expression::boolean(one(arguments).is_null()))
}

pub fn is_equal(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    let (a, b) = two(arguments);

    Ok(Expression::boolean(a == b))
}

pub fn not(_: &mut Interpreter, arguments: Vec<Expression>) -> EvalResult<Expression> {
    Ok(Expression::boolean(one(arguments).is_false()))
}
