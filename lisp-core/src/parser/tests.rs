use pretty_assertions::assert_eq;

use crate::{
    expression::prelude::Expression,
    lexer::prelude::{LexicalErrorType, Token},
    parser::prelude::{parse_from_stream, parse_program, ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};

fn printed(input: &str) -> Result<Vec<String>, ParseError> {
    let parsed = parse_program(input)?;

    Ok(parsed.expressions.iter().map(|e| e.to_string()).collect())
}

#[test]
fn test_top_level_forms() -> Result<(), ParseError> {
    let input = r#"
        (define (square x) (* x x)) ; comment
        (square 4)
        "done" 1/2 -3 2.5 #t
        symbol
    "#;

    assert_eq!(printed(input)?, vec![
        "(define (square x) (* x x))",
        "(square 4)",
        "\"done\"",
        "1/2",
        "-3",
        "2.5",
        "#t",
        "symbol",
    ]);

    Ok(())
}

#[test]
fn test_quote_shorthand() -> Result<(), ParseError> {
    let parsed = parse_program("'(a b c) ''x '()")?;

    assert_eq!(parsed.expressions[0], Expression::list(vec![
        Expression::symbol("quote"),
        Expression::list(vec![
            Expression::symbol("a"),
            Expression::symbol("b"),
            Expression::symbol("c"),
        ]),
    ]));

    assert_eq!(
        parsed.expressions.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        vec!["(quote (a b c))", "(quote (quote x))", "(quote ())"]
    );

    Ok(())
}

#[test]
fn test_dotted_lists() -> Result<(), ParseError> {
    assert_eq!(printed("(a . b) (lambda (x . rest) rest) (1 2 . (3))")?, vec![
        "(a . b)",
        "(lambda (x . rest) rest)",
        "(1 2 3)",
    ]);

    Ok(())
}

#[test]
fn test_comments_and_spans() -> Result<(), ParseError> {
    let parsed = parse_program("; head\n(f x) 'y")?;

    assert_eq!(parsed.comments, vec![SrcSpan::from(0, 6)]);
    assert_eq!(parsed.spans, vec![SrcSpan::from(7, 12), SrcSpan::from(13, 15)]);

    Ok(())
}

#[test]
fn test_empty_input() -> Result<(), ParseError> {
    assert!(parse_program("")?.expressions.is_empty());
    assert!(parse_program("  ; only a comment")?.expressions.is_empty());

    Ok(())
}

#[test]
fn test_stream_matches_str() -> Result<(), ParseError> {
    let input = "(display \"héllo\")\n(+ 1 2)";

    assert_eq!(parse_from_stream(input.chars())?, parse_program(input)?);

    Ok(())
}

#[test]
fn test_errors() {
    let fails = vec![
        ("(a b", ParseErrorType::UnexpectedEof),
        ("'", ParseErrorType::UnexpectedEof),
        ("(quote", ParseErrorType::UnexpectedEof),
        (")", ParseErrorType::UnmatchedRParen),
        ("(a))", ParseErrorType::UnmatchedRParen),
        ("(. a)", ParseErrorType::UnexpectedDot),
        (". a", ParseErrorType::UnexpectedDot),
        ("(a . b c)", ParseErrorType::UnexpectedToken {
            token: Token::Symbol("c".into()),
            expected: vec![")".into()],
        }),
    ];

    for (input, fail) in fails {
        let err = match parse_program(input) {
            Err(err) => err,
            Ok(value) => panic!("Expected Err for {input:?} but got Ok({value:?})"),
        };

        assert_eq!(fail, err.error, "unexpected error for {input:?}");
    }
}

#[test]
fn test_lex_errors_surface_as_parse_errors() {
    let err = parse_program("(display \"open").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::LexError { error } if error.error == LexicalErrorType::UnterminatedString
    ));
    assert!(err.is_incomplete());
    assert!(parse_program("(a").unwrap_err().is_incomplete());
    assert!(!parse_program(")").unwrap_err().is_incomplete());
}
