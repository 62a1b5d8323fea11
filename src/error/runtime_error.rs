use thiserror::Error;

use crate::ast::{BinaryOperator, Type};

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("{line}: no such variable '{name}'")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never declared.
    #[error("{line}: no such function '{name}'")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected type where only one type is accepted.
    #[error("{line}: expected {expected}, found {found}")]
    TypeError {
        /// The required type.
        expected: Type,
        /// The type of the value that was supplied.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An initializer does not match the declared variable type.
    #[error("{line}: wrong type of variable initializer for '{name}': expected {expected}, \
             found {found}")]
    DeclarationTypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The declared type.
        expected: Type,
        /// The type of the initializer.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A reassignment does not match the variable's type.
    #[error("{line}: cannot assign {found} to '{name}' of type {expected}")]
    AssignmentTypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The variable's current type.
        expected: Type,
        /// The type of the assigned value.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument does not match its parameter type.
    #[error("{line}: wrong type of argument for '{param}': expected {expected}, found {found}")]
    ArgumentTypeMismatch {
        /// The parameter name.
        param:    String,
        /// The declared parameter type.
        expected: Type,
        /// The type of the argument.
        found:    Type,
        /// The line of the argument expression.
        line:     usize,
    },
    /// A returned value does not match the function's return type.
    #[error("{line}: '{name}' must return {expected}, but returned {found}")]
    ReturnTypeMismatch {
        /// The function name.
        name:     String,
        /// The declared return type.
        expected: Type,
        /// The type of the returned value.
        found:    Type,
        /// The line of the call.
        line:     usize,
    },
    /// A non-void function finished without `return`.
    #[error("{line}: reached end of non-void function '{name}'")]
    MissingReturn {
        /// The function name.
        name: String,
        /// The line of the call.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("{line}: '{name}' takes {expected} argument(s), but {found} were given")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No rule of the operator accepts this pair of operand types.
    #[error("{line}: incompatible operand types for '{op}': {left} and {right}")]
    IncompatibleOperands {
        /// The operator.
        op:    BinaryOperator,
        /// Type of the left operand.
        left:  Type,
        /// Type of the right operand.
        right: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index is negative, fractional, or not below the container length.
    #[error("{line}: index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// The requested index.
        index: f64,
        /// Length of the indexed container.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array repetition or truncation count is not usable.
    #[error("{line}: invalid count {count} for '{op}' on an array of length {len}")]
    InvalidCount {
        /// The operator.
        op:    BinaryOperator,
        /// The requested count.
        count: f64,
        /// Length of the array operand.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A repeated string or array would not fit in memory.
    #[error("{line}: repetition result is too large")]
    RepetitionOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string used in numeric subtraction does not hold a number.
    #[error("{line}: '{text}' is not a number")]
    InvalidNumber {
        /// The string that failed to parse.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand of `%` does not fit a 64-bit integer after truncation.
    #[error("{line}: {value} cannot be used as an integer")]
    IntegerOutOfRange {
        /// The offending operand.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operand of `?` has no length.
    #[error("{line}: '?' needs a string or an array, found {found}")]
    NotSized {
        /// The type of the operand.
        found: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Integer remainder or quotient with a zero divisor.
    #[error("{line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Too many user function calls were nested.
    #[error("{line}: call depth exceeded {limit}")]
    RecursionLimit {
        /// The maximum number of nested calls.
        limit: usize,
        /// The line of the call that went past the limit.
        line:  usize,
    },
    /// An expression statement produced a value.
    #[error("{line}: statement is not void, it evaluates to {found}")]
    StatementNotVoid {
        /// The type of the discarded value.
        found: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `return` was used at the top level.
    #[error("{line}: return outside of a function")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading input or writing output failed.
    #[error("{line}: i/o error: {details}")]
    Io {
        /// The underlying error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The program executed `throw`.
    #[error("{line}: thrown: {value}")]
    Thrown {
        /// The rendered value that was thrown.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The program executed `exit()`.
    #[error("{line}: exit requested")]
    Exit {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::TypeError { line, .. }
            | Self::DeclarationTypeMismatch { line, .. }
            | Self::AssignmentTypeMismatch { line, .. }
            | Self::ArgumentTypeMismatch { line, .. }
            | Self::ReturnTypeMismatch { line, .. }
            | Self::MissingReturn { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::IncompatibleOperands { line, .. }
            | Self::IndexOutOfRange { line, .. }
            | Self::InvalidCount { line, .. }
            | Self::RepetitionOverflow { line }
            | Self::InvalidNumber { line, .. }
            | Self::IntegerOutOfRange { line, .. }
            | Self::NotSized { line, .. }
            | Self::DivisionByZero { line }
            | Self::RecursionLimit { line, .. }
            | Self::StatementNotVoid { line, .. }
            | Self::ReturnOutsideFunction { line }
            | Self::Io { line, .. }
            | Self::Thrown { line, .. }
            | Self::Exit { line } => *line,
        }
    }

    /// Wraps an I/O failure of the interpreter's input or output stream.
    pub(crate) fn io(error: &std::io::Error, line: usize) -> Self {
        Self::Io { details: error.to_string(),
                   line }
    }
}
