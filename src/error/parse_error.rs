use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("{line}: unexpected character '{found}'")]
    UnexpectedCharacter {
        /// The offending source text.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal ran to the end of the input.
    #[error("{line}: expecting a closing '\"'")]
    UnterminatedString {
        /// The line the string started on.
        line: usize,
    },
    /// Found a token other than the one the grammar requires here.
    #[error("{line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression production matches the current token.
    #[error("{line}: expected an expression, found {found}")]
    ExpectedExpression {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function, parameter or variable name was expected.
    #[error("{line}: expected a name, found {found}")]
    ExpectedName {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A parameter or return type was expected.
    #[error("{line}: expected a {position} type, found {found}")]
    ExpectedType {
        /// Either `parameter` or `return`.
        position: &'static str,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement was not followed by `;` or a newline.
    #[error("{line}: expected ';' or a newline, found {found}")]
    ExpectedTerminator {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left side of `=` is not a plain variable.
    #[error("{line}: only variables can be assigned to")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedName { line, .. }
            | Self::ExpectedType { line, .. }
            | Self::ExpectedTerminator { line, .. }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }
}
