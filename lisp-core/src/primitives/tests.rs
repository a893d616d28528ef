use std::io::Write;

use pretty_assertions::assert_eq;

use crate::{
    eval::prelude::{ArityError, EvalError, TypeError},
    expression::prelude::{Arity, Expression},
    interpreter::Interpreter,
    primitives::PRIMITIVES,
    utils::prelude::{Error, ErrorKind},
};

fn printed_in(interpreter: &mut Interpreter, src: &str) -> Result<String, Error> {
    let results = interpreter.read_eval(src)?;

    Ok(results.last().map(|value| value.to_string()).unwrap_or_default())
}

fn printed(src: &str) -> Result<String, Error> {
    printed_in(&mut Interpreter::new(), src)
}

fn eval_error(src: &str) -> EvalError {
    match Interpreter::new().read_eval(src) {
        Err(Error::Eval { error }) => error,
        other => panic!("Expected an evaluation error for {src} but got {other:?}"),
    }
}

#[test]
fn test_every_primitive_is_bound() -> Result<(), EvalError> {
    let interpreter = Interpreter::new();

    for primitive in PRIMITIVES {
        let value = interpreter.environments()
            .lookup(interpreter.global(), &primitive.name.into())?;

        assert_eq!(value, Expression::Primitive(*primitive));
    }

    Ok(())
}

#[test]
fn test_arithmetic() -> Result<(), Error> {
    let cases = vec![
        ("(+)", "0"),
        ("(*)", "1"),
        ("(+ 1 2 3)", "6"),
        ("(- 10)", "-10"),
        ("(- 10 1 2)", "7"),
        ("(* 2 3 4)", "24"),
        ("(/ 2)", "1/2"),
        ("(/ 12 2 3)", "2"),
        ("(/ 1 3)", "1/3"),
        ("(+ 1/2 0.25)", "0.75"),
        ("(/ 1.0 0)", "+inf.0"),
        ("(- 0.5 1/2)", "0.0"),
    ];

    for (src, expected) in cases {
        assert_eq!(printed(src)?, expected, "for {src}");
    }

    Ok(())
}

#[test]
fn test_mixed_arithmetic_with_huge_rationals() -> Result<(), Error> {
    let zeros = "0".repeat(399);
    let src = format!("(+ 0.5 3{zeros}1/1{zeros})");

    assert_eq!(printed(&src)?, "30.5");

    Ok(())
}

#[test]
fn test_comparisons() -> Result<(), Error> {
    let cases = vec![
        ("(= 1 1 1)", "#t"),
        ("(= 1 2)", "#f"),
        ("(= 1/2 0.5)", "#t"),
        ("(< 1 2 3)", "#t"),
        ("(< 1 3 2)", "#f"),
        ("(> 3 2 1)", "#t"),
        ("(<= 1 1 2)", "#t"),
        ("(>= 2 2 3)", "#f"),
        ("(< 5)", "#t"),
    ];

    for (src, expected) in cases {
        assert_eq!(printed(src)?, expected, "for {src}");
    }

    Ok(())
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval_error("(/ 1 0)"), EvalError::DivisionByZero);
    assert_eq!(eval_error("(/ 0)"), EvalError::DivisionByZero);
    assert_eq!(eval_error("(/ 4 2 0 1)").kind(), ErrorKind::DivisionByZero);
}

#[test]
fn test_arithmetic_type_errors() {
    assert_eq!(
        eval_error("(+ 1 \"2\")"),
        EvalError::Type(TypeError::WrongType {
            procedure: "+",
            expected: "a number",
            got: Expression::string("2"),
        })
    );
    assert_eq!(eval_error("(< 1 'a)").kind(), ErrorKind::Type);
}

#[test]
fn test_list_primitives() -> Result<(), Error> {
    let cases = vec![
        ("(car '(1 2))", "1"),
        ("(cdr '(1 2))", "(2)"),
        ("(cdr '(1))", "()"),
        ("(cons 1 2)", "(1 . 2)"),
        ("(cons 1 '(2))", "(1 2)"),
        ("(list)", "()"),
        ("(list 1 (+ 1 1) 'three)", "(1 2 three)"),
        ("(pair? '(1))", "#t"),
        ("(pair? '())", "#f"),
        ("(null? '())", "#t"),
        ("(null? 0)", "#f"),
        ("(not #f)", "#t"),
        ("(not 0)", "#f"),
        ("(equal? \"a\" \"a\")", "#t"),
        ("(equal? car car)", "#t"),
    ];

    for (src, expected) in cases {
        assert_eq!(printed(src)?, expected, "for {src}");
    }

    Ok(())
}

#[test]
fn test_car_requires_pair() {
    assert_eq!(
        eval_error("(car '())"),
        EvalError::Type(TypeError::WrongType {
            procedure: "car",
            expected: "a pair",
            got: Expression::Nil,
        })
    );
    assert_eq!(eval_error("(cdr 5)").kind(), ErrorKind::Type);
}

#[test]
fn test_primitive_arity() {
    assert_eq!(
        eval_error("(car 1 2)"),
        EvalError::Arity(ArityError::TooManyArguments { expected: Arity::Exactly(1), got: 2 })
    );
    assert_eq!(
        eval_error("(cons 1)"),
        EvalError::Arity(ArityError::TooFewArguments { expected: Arity::Exactly(2), got: 1 })
    );
    assert_eq!(
        eval_error("(-)"),
        EvalError::Arity(ArityError::TooFewArguments { expected: Arity::AtLeast(1), got: 0 })
    );
}

#[test]
fn test_eval() -> Result<(), Error> {
    assert_eq!(printed("(eval '(+ 1 2))")?, "3");
    assert_eq!(printed("(eval (list '* 2 3))")?, "6");
    assert_eq!(printed("(define x 7) (eval 'x)")?, "7");
    assert_eq!(printed("(eval (list car ''(1 2)))")?, "1");

    Ok(())
}

#[test]
fn test_eval_uses_root_environment() -> Result<(), Error> {
    let src = r#"
        (define x 'global)
        (define (f x) (eval 'x))
        (f 'local)
    "#;

    assert_eq!(printed(src)?, "global");

    Ok(())
}

#[test]
fn test_apply() -> Result<(), Error> {
    assert_eq!(printed("(apply + '(1 2 3))")?, "6");
    assert_eq!(printed("(apply + 1 2 '(3 4))")?, "10");
    assert_eq!(printed("(apply (lambda (a b) (cons a b)) '(1 2))")?, "(1 . 2)");
    assert_eq!(printed("(apply list '())")?, "()");
    assert_eq!(eval_error("(apply + 1)").kind(), ErrorKind::Type);
    assert_eq!(eval_error("(apply 1 '())").kind(), ErrorKind::Type);
    assert_eq!(eval_error("(apply list '(1) 2)").kind(), ErrorKind::Type);

    Ok(())
}

#[test]
fn test_load() -> Result<(), Error> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "(define (double x) (* 2 x))").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "(define loaded (double 21))").unwrap();

    let path = file.path().to_str().unwrap().replace('\\', "\\\\");
    let mut interpreter = Interpreter::new();

    assert_eq!(printed_in(&mut interpreter, &format!("(load \"{path}\")"))?, "ok");
    assert_eq!(printed_in(&mut interpreter, "loaded")?, "42");

    Ok(())
}

#[test]
fn test_load_errors() {
    assert_eq!(eval_error("(load 5)").kind(), ErrorKind::Type);
    assert_eq!(eval_error("(load \"/definitely/not/here.scm\")").kind(), ErrorKind::Io);
}
