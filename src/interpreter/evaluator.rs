/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, logical operators, concatenation and indexing.
pub mod binary;

/// `if` and `for` statements.
///
/// Checks conditions and runs the selected statement lists, propagating
/// `return` out of nested blocks.
pub mod control_flow;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, statement
/// completion and error propagation.
pub mod core;

/// Function evaluation.
///
/// Handles user-defined function calls, argument checking, return value
/// checking and the built-in `print`, `throw` and `input()`.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and the `?` size query.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides variable lookup, array literals and index validation.
pub mod utils;
