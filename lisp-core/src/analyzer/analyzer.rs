use std::{collections::HashSet, rc::Rc};

use crate::expression::prelude::{Expression, Pair, Symbol};

use super::{
    analyzed::{Analyzed, Lambda, Parameters},
    error::{AnalyzeError, AnalyzeResult},
};

pub const QUOTE: &str = "quote";
pub const ASSIGNMENT: &str = "set!";
pub const DEFINITION: &str = "define";
pub const CONDITIONAL: &str = "if";
pub const LAMBDA: &str = "lambda";
pub const SEQUENCE: &str = "begin";

/// Turns an expression into an executable unit. Performs no evaluation and
/// touches no environment.
pub fn analyze(expression: &Expression) -> AnalyzeResult<Analyzed> {
    match expression {
        Expression::Number { .. }
        | Expression::String { .. }
        | Expression::Boolean { .. }
        | Expression::Closure(_)
        | Expression::Primitive(_) => Ok(Analyzed::Constant(expression.clone())),
        Expression::Symbol { name } => Ok(Analyzed::Variable(name.clone())),
        Expression::Quoted(datum) => Ok(Analyzed::Constant(datum.as_ref().clone())),
        Expression::Pair(pair) => analyze_pair(expression, pair),
        Expression::Nil => Err(AnalyzeError::UnknownForm { expression: expression.clone() }),
    }
}

fn analyze_pair(expression: &Expression, pair: &Pair) -> AnalyzeResult<Analyzed> {
    let keyword = pair.head.as_symbol().map(Symbol::as_str);

    match keyword {
        Some(QUOTE) => analyze_quote(expression, &pair.tail),
        Some(ASSIGNMENT) => analyze_assignment(expression, &pair.tail),
        Some(DEFINITION) => analyze_definition(expression, &pair.tail),
        Some(CONDITIONAL) => analyze_conditional(expression, &pair.tail),
        Some(LAMBDA) => analyze_lambda(expression, &pair.tail),
        Some(SEQUENCE) => analyze_sequence(expression, &pair.tail),
        _ => analyze_application(expression, pair),
    }
}

/// Operands of a special form as a vector, rejecting dotted forms.
fn operands(form: &'static str, expression: &Expression, tail: &Expression) -> AnalyzeResult<Vec<Expression>> {
    tail.to_vec()
        .map_err(|_| AnalyzeError::malformed(form, "operands must form a proper list", expression))
}

fn analyze_quote(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    match operands(QUOTE, expression, tail)?.as_slice() {
        [datum] => Ok(Analyzed::Constant(datum.clone())),
        _ => Err(AnalyzeError::malformed(QUOTE, "expected exactly 1 operand", expression)),
    }
}

fn analyze_assignment(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    match operands(ASSIGNMENT, expression, tail)?.as_slice() {
        [Expression::Symbol { name }, value] => Ok(Analyzed::Assignment {
            name: name.clone(),
            value: Box::new(analyze(value)?),
        }),
        [_, _] => Err(AnalyzeError::malformed(ASSIGNMENT, "expected a symbol to assign", expression)),
        _ => Err(AnalyzeError::malformed(ASSIGNMENT, "expected exactly 2 operands", expression)),
    }
}

fn analyze_definition(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    let operands = operands(DEFINITION, expression, tail)?;

    match operands.as_slice() {
        [Expression::Symbol { name }, value] => {
            let value = match analyze(value)? {
                Analyzed::Lambda(mut lambda) => {
                    if let Some(lambda) = Rc::get_mut(&mut lambda) {
                        lambda.name.get_or_insert_with(|| name.clone());
                    }

                    Analyzed::Lambda(lambda)
                },
                value => value,
            };

            Ok(Analyzed::Definition { name: name.clone(), value: Box::new(value) })
        },
        [Expression::Symbol { .. }, ..] => {
            Err(AnalyzeError::malformed(DEFINITION, "expected exactly 1 value", expression))
        },
        // (define (name . params) . body)
        [Expression::Pair(signature), body @ ..] => {
            let name = match &signature.head {
                Expression::Symbol { name } => name.clone(),
                _ => return Err(AnalyzeError::malformed(
                    DEFINITION,
                    "expected a symbol as the procedure name",
                    expression
                )),
            };

            if body.is_empty() {
                return Err(AnalyzeError::malformed(DEFINITION, "procedure body is empty", expression));
            }

            let lambda = Lambda {
                name: Some(name.clone()),
                parameters: analyze_parameters(&signature.tail)?,
                body: analyze_body(body)?,
            };

            Ok(Analyzed::Definition {
                name,
                value: Box::new(Analyzed::Lambda(Rc::new(lambda))),
            })
        },
        [_, ..] => Err(AnalyzeError::malformed(DEFINITION, "expected a symbol or a signature", expression)),
        [] => Err(AnalyzeError::malformed(DEFINITION, "expected a name and a value", expression)),
    }
}

fn analyze_conditional(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    let (test, consequent, alternative) = match operands(CONDITIONAL, expression, tail)?.as_slice() {
        [test, consequent] => (analyze(test)?, analyze(consequent)?, Analyzed::Constant(Expression::boolean(false))),
        [test, consequent, alternative] => (analyze(test)?, analyze(consequent)?, analyze(alternative)?),
        _ => return Err(AnalyzeError::malformed(CONDITIONAL, "expected 2 or 3 operands", expression)),
    };

    Ok(Analyzed::Conditional {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternative: Box::new(alternative),
    })
}

fn analyze_lambda(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    let operands = operands(LAMBDA, expression, tail)?;

    let (parameters, body) = match operands.split_first() {
        Some((parameters, body)) if !body.is_empty() => (parameters, body),
        _ => return Err(AnalyzeError::malformed(LAMBDA, "expected parameters and a non-empty body", expression)),
    };

    let lambda = Lambda {
        name: None,
        parameters: analyze_parameters(parameters)?,
        body: analyze_body(body)?,
    };

    Ok(Analyzed::Lambda(Rc::new(lambda)))
}

fn analyze_sequence(expression: &Expression, tail: &Expression) -> AnalyzeResult<Analyzed> {
    let body = operands(SEQUENCE, expression, tail)?;

    if body.is_empty() {
        return Err(AnalyzeError::malformed(SEQUENCE, "expected at least 1 expression", expression));
    }

    analyze_body(&body)
}

fn analyze_application(expression: &Expression, pair: &Pair) -> AnalyzeResult<Analyzed> {
    let operator = analyze(&pair.head)?;
    let operands = pair.tail.to_vec()
        .map_err(|_| AnalyzeError::malformed("application", "arguments must form a proper list", expression))?
        .iter()
        .map(analyze)
        .collect::<AnalyzeResult<Vec<_>>>()?;

    Ok(Analyzed::Application {
        operator: Box::new(operator),
        operands,
    })
}

/// A single form stays as is, several become a [`Analyzed::Sequence`].
fn analyze_body(body: &[Expression]) -> AnalyzeResult<Analyzed> {
    let mut units = body.iter()
        .map(analyze)
        .collect::<AnalyzeResult<Vec<_>>>()?;

    match units.len() {
        1 => Ok(units.remove(0)),
        _ => Ok(Analyzed::Sequence(units)),
    }
}

/// Accepts `(a b)`, `(a b . rest)` and a bare `rest`.
pub fn analyze_parameters(expression: &Expression) -> AnalyzeResult<Parameters> {
    let mut required = vec![];
    let mut iter = expression.iter();

    for parameter in iter.by_ref() {
        match parameter {
            Expression::Symbol { name } => required.push(name.clone()),
            got => return Err(AnalyzeError::InvalidParameter { got: got.clone() }),
        }
    }

    let rest = match iter.rest() {
        Expression::Nil => None,
        Expression::Symbol { name } => Some(name.clone()),
        got => return Err(AnalyzeError::InvalidParameter { got: got.clone() }),
    };

    let mut seen = HashSet::new();

    for name in required.iter().chain(rest.iter()) {
        if !seen.insert(name) {
            return Err(AnalyzeError::DuplicateParameter { name: name.clone() });
        }
    }

    Ok(Parameters { required, rest })
}
