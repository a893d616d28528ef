use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    analyzer::prelude::AnalyzeError,
    eval::prelude::EvalError,
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Label, Location};

/// Coarse classification of every failure the interpreter reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UnboundVariable,
    Type,
    Arity,
    UnknownForm,
    DivisionByZero,
    Io,
    ReclaimedEnvironment,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("{error}")]
    Analyze {
        error: AnalyzeError
    },
    #[error("{error}")]
    Eval {
        error: EvalError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl From<AnalyzeError> for Error {
    fn from(error: AnalyzeError) -> Self {
        Error::Analyze { error }
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        match error {
            EvalError::Syntax { path, src, error } => Error::Parse { path, src, error },
            EvalError::Analyze(error) => Error::Analyze { error },
            error => Error::Eval { error },
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Syntax,
            Error::Analyze { .. } => ErrorKind::UnknownForm,
            Error::Eval { error } => error.kind(),
            Error::StdIo { .. } => ErrorKind::Io,
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                let adjusted_location = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan::point(src.len() as u32)
                } else {
                    error.span
                };

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: adjusted_location,
                        },
                    }),
                }]
            },
            Error::Analyze { error } => {
                let title = match error {
                    AnalyzeError::UnknownForm { .. } => "Unknown expression type",
                    AnalyzeError::MalformedForm { .. } => "Ill-formed special form",
                    AnalyzeError::InvalidParameter { .. }
                    | AnalyzeError::DuplicateParameter { .. } => "Invalid parameter list",
                };

                vec![Diagnostic {
                    title: title.into(),
                    text: error.to_string(),
                    location: None,
                }]
            },
            Error::Eval { error } => {
                let title = match error.kind() {
                    ErrorKind::UnboundVariable => "Unbound variable",
                    ErrorKind::Type => "Wrong type",
                    ErrorKind::Arity => "Wrong number of arguments",
                    ErrorKind::DivisionByZero => "Division by zero",
                    ErrorKind::Io => "Could not load file",
                    ErrorKind::ReclaimedEnvironment => "Reclaimed environment",
                    ErrorKind::Syntax => "Syntax error",
                    ErrorKind::UnknownForm => "Unknown expression type",
                };

                vec![Diagnostic {
                    title: title.into(),
                    text: error.to_string(),
                    location: None,
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    location: None,
                }]
            }
        }
    }
}
