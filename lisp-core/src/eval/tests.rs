use pretty_assertions::assert_eq;

use crate::{
    analyzer::prelude::analyze,
    eval::prelude::{execute, ArityError, EvalError, TypeError},
    expression::prelude::{Arity, Expression, Number, Symbol},
    interpreter::Interpreter,
    parser::prelude::parse_program,
    utils::prelude::{Error, ErrorKind},
};

fn run_in(interpreter: &mut Interpreter, src: &str) -> Result<Expression, Error> {
    let results = interpreter.read_eval(src)?;

    Ok(results.last().cloned().unwrap_or(Expression::Nil))
}

fn run(src: &str) -> Result<Expression, Error> {
    run_in(&mut Interpreter::new(), src)
}

fn printed(src: &str) -> Result<String, Error> {
    run(src).map(|value| value.to_string())
}

fn eval_error(src: &str) -> EvalError {
    match run(src) {
        Err(Error::Eval { error }) => error,
        other => panic!("Expected an evaluation error for {src} but got {other:?}"),
    }
}

#[test]
fn test_atoms_evaluate_to_themselves() -> Result<(), Error> {
    let mut interpreter = Interpreter::new();

    for src in ["42", "-3/4", "1.5", "\"str\"", "#t", "#f"] {
        let atom = parse_program(src).unwrap().expressions.remove(0);
        let unit = analyze(&atom)?;

        let global = interpreter.global();
        assert_eq!(execute(&mut interpreter, &unit, global)?, atom);

        let frame = interpreter.environments_mut()
            .extend(global, &Default::default(), vec![])?;
        assert_eq!(execute(&mut interpreter, &unit, frame)?, atom);
    }

    Ok(())
}

#[test]
fn test_addition() -> Result<(), Error> {
    assert_eq!(run("(+ 1 2)")?, Expression::number(3));

    Ok(())
}

#[test]
fn test_define_set_and_lookup() -> Result<(), Error> {
    let mut interpreter = Interpreter::new();

    assert_eq!(
        run_in(&mut interpreter, "x").unwrap_err().kind(),
        ErrorKind::UnboundVariable
    );
    assert_eq!(run_in(&mut interpreter, "(define x 5)")?, Expression::acknowledgement());
    assert_eq!(run_in(&mut interpreter, "(set! x 6)")?, Expression::acknowledgement());
    assert_eq!(run_in(&mut interpreter, "x")?, Expression::number(6));

    Ok(())
}

#[test]
fn test_set_requires_existing_binding() {
    assert_eq!(
        eval_error("(set! never-defined 1)"),
        EvalError::UnboundVariable { name: Symbol::from("never-defined") }
    );
}

#[test]
fn test_conditionals() -> Result<(), Error> {
    assert_eq!(printed("(if (pair? '()) 1 2)")?, "2");
    assert_eq!(printed("(if 0 'yes 'no)")?, "yes");
    assert_eq!(printed("(if '() 'yes 'no)")?, "yes");
    assert_eq!(printed("(if \"\" 'yes 'no)")?, "yes");
    assert_eq!(printed("(if #f 'yes)")?, "#f");
    assert_eq!(printed("(if #f (car '()) 'skipped)")?, "skipped");

    Ok(())
}

#[test]
fn test_lambda_application() -> Result<(), Error> {
    assert_eq!(run("((lambda (x) (* x x)) 10)")?, Expression::number(100));
    assert_eq!(printed("((lambda args args) 1 2 3)")?, "(1 2 3)");
    assert_eq!(printed("((lambda (a . rest) (cons a rest)) 1 2 3)")?, "(1 2 3)");
    assert_eq!(printed("((lambda () 1 2 3))")?, "3");

    Ok(())
}

#[test]
fn test_lexical_scoping() -> Result<(), Error> {
    let src = r#"
        (define x 'outer)
        (define (get-x) x)
        (define (shadow x) (get-x))
        (define (shadow-by-define)
          (define x 'inner)
          (get-x))
        (list (shadow 'argument) (shadow-by-define) x)
    "#;

    assert_eq!(printed(src)?, "(outer outer outer)");

    Ok(())
}

#[test]
fn test_closures_capture_their_frame() -> Result<(), Error> {
    let src = r#"
        (define (make-counter)
          (define count 0)
          (lambda ()
            (set! count (+ count 1))
            count))
        (define a (make-counter))
        (define b (make-counter))
        (a) (a) (b)
        (list (a) (b))
    "#;

    assert_eq!(printed(src)?, "(3 2)");

    Ok(())
}

#[test]
fn test_recursion() -> Result<(), Error> {
    let src = r#"
        (define (factorial n)
          (if (= n 0)
              1
              (* n (factorial (- n 1)))))
        (factorial 25)
    "#;

    assert_eq!(printed(src)?, "15511210043330985984000000");

    Ok(())
}

#[test]
fn test_arity_errors_are_distinct() {
    let too_few = eval_error("((lambda (a b) a) 1)");
    let too_many = eval_error("((lambda (a b) a) 1 2 3)");

    assert_eq!(
        too_few,
        EvalError::Arity(ArityError::TooFewArguments { expected: Arity::Exactly(2), got: 1 })
    );
    assert_eq!(
        too_many,
        EvalError::Arity(ArityError::TooManyArguments { expected: Arity::Exactly(2), got: 3 })
    );
    assert_ne!(too_few.to_string(), too_many.to_string());
    assert!(too_few.to_string().starts_with("Too few"));
    assert!(too_many.to_string().starts_with("Too many"));
}

#[test]
fn test_quote_is_not_applied() -> Result<(), Error> {
    assert_eq!(printed("(quote (a b c))")?, "(a b c)");
    assert_eq!(printed("'(a b c)")?, "(a b c)");
    assert_eq!(printed("(car '(a b c))")?, "a");

    Ok(())
}

#[test]
fn test_structural_equality() -> Result<(), Error> {
    assert_eq!(printed("(equal? (list 1 2 (list 3)) '(1 2 (3)))")?, "#t");
    assert_eq!(printed("(equal? 1/2 2/4)")?, "#t");
    assert_eq!(printed("(equal? 1/2 0.5)")?, "#t");
    assert_eq!(printed("(equal? '(1 2) '(1 3))")?, "#f");

    Ok(())
}

#[test]
fn test_equal_on_long_quoted_lists() -> Result<(), Error> {
    let items = "0 ".repeat(100_000);
    let src = format!("(define xs '({items})) (equal? xs '({items}))");

    assert_eq!(printed(&src)?, "#t");

    Ok(())
}

#[test]
fn test_not_applicable() {
    assert_eq!(
        eval_error("(1 2)"),
        EvalError::Type(TypeError::NotApplicable { got: Expression::number(1) })
    );
    assert_eq!(eval_error("(\"f\")").kind(), ErrorKind::Type);
}

#[test]
fn test_operator_evaluated_before_operands() {
    // the unbound operator is reported even though an operand would fail too
    assert_eq!(
        eval_error("(undefined-procedure (car '()))"),
        EvalError::UnboundVariable { name: Symbol::from("undefined-procedure") }
    );
}

#[test]
fn test_side_effects_survive_failure() -> Result<(), Error> {
    let mut interpreter = Interpreter::new();

    assert!(run_in(&mut interpreter, "(begin (define y 1) (car 5) (define z 2))").is_err());
    assert_eq!(run_in(&mut interpreter, "y")?, Expression::number(1));
    assert!(run_in(&mut interpreter, "z").is_err());

    Ok(())
}

#[test]
fn test_analyze_errors_surface() {
    match run("(if)") {
        Err(error @ Error::Analyze { .. }) => assert_eq!(error.kind(), ErrorKind::UnknownForm),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_closure_printing() -> Result<(), Error> {
    assert_eq!(printed("(define (square x) (* x x)) square")?, "#<procedure square>");
    assert_eq!(printed("(lambda (a . b) a)")?, "#<procedure (a . b)>");
    assert_eq!(printed("car")?, "#<primitive car>");

    Ok(())
}

#[test]
fn test_exact_arithmetic() -> Result<(), Error> {
    assert_eq!(run("(/ 1 3)")?, Expression::number(Number::rational(1, 3).unwrap()));
    assert_eq!(printed("(+ 1/3 2/3)")?, "1");
    assert_eq!(printed("(* 1.5 2)")?, "3.0");

    Ok(())
}
