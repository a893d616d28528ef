use std::path::PathBuf;

use crate::{
    analyzer::prelude::AnalyzeError,
    eval::prelude::{ArityError, EvalError},
    expression::prelude::{Arity, Expression, Symbol},
    parser::prelude::parse_program,
    utils::prelude::{Error, ErrorKind, SrcSpan},
};

fn parse_failure(src: &str) -> Error {
    let error = parse_program(src).unwrap_err();

    Error::Parse {
        path: PathBuf::from("test.scm"),
        src: src.to_string(),
        error,
    }
}

#[test]
fn test_parse_error_diagnostic() {
    let error = parse_failure("(define x\n  (+ 1 2)))");
    let pretty = error.pretty_string();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(pretty.contains("Syntax error"), "{pretty}");
    assert!(pretty.contains("Unmatched closing parenthesis"), "{pretty}");
    assert!(pretty.contains("test.scm:2:11"), "{pretty}");
}

#[test]
fn test_eof_points_at_end_of_source() {
    let src = "(a (b c)";
    let error = parse_failure(src);

    let diagnostics = error.to_diagnostics();
    let location = diagnostics[0].location.as_ref().unwrap();

    assert_eq!(location.label.span, SrcSpan::point(src.len() as u32));
}

#[test]
fn test_eval_error_conversion() {
    let unbound: Error = EvalError::UnboundVariable { name: Symbol::from("x") }.into();
    let arity: Error = EvalError::Arity(ArityError::TooFewArguments {
        expected: Arity::Exactly(2),
        got: 1,
    }).into();
    let analyze: Error = EvalError::Analyze(AnalyzeError::UnknownForm { expression: Expression::Nil }).into();

    assert_eq!(unbound.kind(), ErrorKind::UnboundVariable);
    assert_eq!(arity.kind(), ErrorKind::Arity);
    assert!(matches!(analyze, Error::Analyze { .. }));
    assert_eq!(analyze.kind(), ErrorKind::UnknownForm);

    let pretty = unbound.pretty_string();
    assert!(pretty.contains("error: Unbound variable"), "{pretty}");
    assert!(pretty.contains("Unbound variable: x"), "{pretty}");
}

#[test]
fn test_load_syntax_error_becomes_parse_error() {
    let error = parse_program("(oops").unwrap_err();
    let converted: Error = EvalError::Syntax {
        path: PathBuf::from("lib.scm"),
        src: "(oops".into(),
        error,
    }.into();

    assert!(matches!(converted, Error::Parse { .. }));
    assert_eq!(converted.kind(), ErrorKind::Syntax);
}
