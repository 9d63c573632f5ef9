//! Error types for source-text parsing and rendering.

use thiserror::Error;

/// Structured error types for the config-source dialect.
///
/// Parse failures are not recoverable and carry a human-readable reason
/// with a line number where one is known.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The source text is not a single `return [...];` statement
    #[error("invalid config source: {reason}")]
    InvalidDocument { reason: String },

    /// Raw code does not form exactly one well-formed expression
    #[error("invalid expression: {reason}")]
    InvalidExpression { reason: String },
}

impl SyntaxError {
    /// Check if this error came from loading a whole document.
    pub fn is_document_error(&self) -> bool {
        matches!(self, SyntaxError::InvalidDocument { .. })
    }

    /// Check if this error came from the expression sub-parser.
    pub fn is_expression_error(&self) -> bool {
        matches!(self, SyntaxError::InvalidExpression { .. })
    }

    /// Get the failure reason.
    pub fn reason(&self) -> &str {
        match self {
            SyntaxError::InvalidDocument { reason } | SyntaxError::InvalidExpression { reason } => {
                reason
            }
        }
    }
}

// Conversion from SyntaxError to the main Error type
impl From<SyntaxError> for crate::Error {
    fn from(err: SyntaxError) -> Self {
        crate::Error::Syntax(err)
    }
}
