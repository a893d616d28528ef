use crate::{lexer::prelude::{LexicalError, LexicalErrorType, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    /// Input ended while a list or a quote was still open.
    UnexpectedEof,
    UnmatchedRParen,
    UnexpectedDot,
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    /// True when more input could complete the form. The front-end uses it
    /// to keep reading continuation lines.
    pub fn is_incomplete(&self) -> bool {
        match &self.error {
            ParseErrorType::UnexpectedEof => true,
            ParseErrorType::LexError { error } => error.error == LexicalErrorType::UnterminatedString,
            _ => false,
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedEof => (
                "Unexpected end of input",
                vec!["A list or quote is still open here.".into()]
            ),
            ParseErrorType::UnmatchedRParen => (
                "Unmatched closing parenthesis",
                vec!["There is no `(` for this `)`.".into()]
            ),
            ParseErrorType::UnexpectedDot => (
                "Unexpected `.`",
                vec!["A dot may only appear before the last element of a non-empty list.".into()]
            ),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = match token {
                    Token::Symbol(name) => format!("the symbol `{name}`"),
                    Token::Integer(_) | Token::Rational(_) | Token::Float(_) => {
                        format!("the number `{}`", token.as_literal())
                    },
                    _ => format!("`{}`", token.as_literal())
                };

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
