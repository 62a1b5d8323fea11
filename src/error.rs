/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected characters, unterminated strings and grammar violations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown names, out-of-range indices, and the two user-requested
/// aborts, `throw` and `exit`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any error that stops a program.
///
/// Both variants render as `"<line>: <message>"`.
#[derive(Debug, Error)]
pub enum Error {
    /// The program could not be lexed or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns `true` for aborts the program requested itself.
    ///
    /// `throw` has already written its report to the output stream and `exit`
    /// reports nothing, so neither gets a diagnostic line.
    ///
    /// # Example
    /// ```
    /// use ciktor::error::{Error, RuntimeError};
    ///
    /// assert!(Error::from(RuntimeError::Exit { line: 1 }).is_silent());
    /// assert!(!Error::from(RuntimeError::DivisionByZero { line: 1 }).is_silent());
    /// ```
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self,
                 Self::Runtime(RuntimeError::Thrown { .. } | RuntimeError::Exit { .. }))
    }

    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
