use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnterminatedString,
    UnknownEscape { ch: char },
    UnknownHashLiteral,
    ZeroDenominator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string literal", vec!["Add a closing `\"`.".into()])
            },
            LexicalErrorType::UnknownEscape { ch } => {
                (
                    "Unknown escape sequence",
                    vec![format!("`\\{ch}` is not one of `\\\"`, `\\\\`, `\\n`, `\\t`.")]
                )
            },
            LexicalErrorType::UnknownHashLiteral => {
                ("Unknown `#` literal", vec!["Expected one of `#t`, `#f`, `#true`, `#false`.".into()])
            },
            LexicalErrorType::ZeroDenominator => {
                ("Rational literal has a zero denominator", vec![])
            },
        }
    }
}
