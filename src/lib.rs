//! # ciktor
//!
//! ciktor is an interpreter for a small, dynamically checked scripting
//! language. Programs are lexed, parsed into a tree of statements up front, and
//! then executed by a tree-walking evaluator. The language has typed variable
//! declarations, functions with typed parameters and return values, strings,
//! nested arrays, `if`/`for` control flow and `throw`/`exit` for aborting.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::Statement,
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, lexer::Lexer, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Declares the `Type` tags used by declarations and runtime checks.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used by the evaluator to turn
/// numbers into indices, counts and integers without silent data loss.
pub mod util;

/// Parses a whole program without running it.
///
/// # Examples
/// ```
/// use ciktor::{ast::Statement, parse};
///
/// let program = parse("func twice<double n> double { return n * 2 }\nprint(twice(4))").unwrap();
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Statement::Function(_)));
///
/// assert!(parse("print(1 +)").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut lexer = Lexer::new(source)?;
    let program = parse_program(&mut lexer)?;
    debug!("parsed {} top-level statements", program.len());
    Ok(program)
}

/// Parses and runs a program.
///
/// `print` and `throw` write to `output`; `input()` reads lines from `input`.
/// Nothing runs unless the whole program parses. Execution stops at the first
/// error, which is returned together with its source line. `output` is
/// flushed before returning; a failed flush is an error of the last line.
///
/// # Errors
/// Returns [`Error::Parse`] if the program is malformed and
/// [`Error::Runtime`] if it fails while running, including a `throw` or an
/// `exit()`.
///
/// # Examples
/// ```
/// use std::io;
///
/// use ciktor::run;
///
/// let mut output = Vec::new();
/// run("string s = \"ab\"\nprint(s * 2)", &mut io::empty(), &mut output).unwrap();
/// assert_eq!(output, b"abababab");
///
/// // `x` only exists while `f` runs.
/// let source = "func f<double n> void { double x = n }\nf(5)\nprint(x)";
/// let error = run(source, &mut io::empty(), &mut Vec::new()).unwrap_err();
/// assert_eq!(error.to_string(), "3: no such variable 'x'");
/// ```
pub fn run(source: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), Error> {
    let program = parse(source)?;
    let result = Context::new(input, &mut *output).eval_program(&program);
    let flushed = output.flush();
    result?;
    let last_line = source.lines().count().max(1);
    flushed.map_err(|e| RuntimeError::io(&e, last_line))?;
    Ok(())
}
