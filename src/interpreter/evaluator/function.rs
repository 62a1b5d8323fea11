/// Built-in statements and expressions.
///
/// Implements `print`, `throw` and `input()` against the context's streams.
pub mod builtin;

/// User-defined functions.
///
/// Handles declaration, argument checking, scoping and return value checking.
pub mod core;
