use crate::expression::prelude::{Expression, Symbol};

pub type AnalyzeResult<T> = std::result::Result<T, AnalyzeError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeError {
    /// Occurs when an expression is neither data, a variable, a special
    /// form nor an application.
    ///
    /// Example:
    /// ```text
    /// () <- Unknown expression type: ()
    /// ```
    #[error("Unknown expression type: {expression}")]
    UnknownForm {
        expression: Expression,
    },
    /// Occurs when a special form has the wrong shape.
    ///
    /// Example:
    /// ```text
    /// (if) <- Ill-formed special form `if`: expected 2 or 3 operands
    /// (set! 1 2) <- Ill-formed special form `set!`: expected a symbol to assign
    /// ```
    #[error("Ill-formed special form `{form}`: {reason}, in {expression}")]
    MalformedForm {
        form: &'static str,
        reason: &'static str,
        expression: Expression,
    },
    /// Occurs when a parameter list contains something other than symbols.
    ///
    /// Example:
    /// ```text
    /// (lambda (x 1) x) <- Invalid parameter `1`
    /// ```
    #[error("Invalid parameter `{got}`")]
    InvalidParameter {
        got: Expression,
    },
    /// Occurs when a parameter list names the same symbol twice.
    ///
    /// Example:
    /// ```text
    /// (lambda (x x) x) <- Duplicate parameter `x`
    /// ```
    #[error("Duplicate parameter `{name}`")]
    DuplicateParameter {
        name: Symbol,
    },
}

impl AnalyzeError {
    pub fn malformed(form: &'static str, reason: &'static str, expression: &Expression) -> Self {
        Self::MalformedForm {
            form,
            reason,
            expression: expression.clone(),
        }
    }
}
