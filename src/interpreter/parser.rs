/// Binary operator parsing.
///
/// Handles the precedence climbing for logical, comparison, additive and
/// multiplicative operators.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement lists shared by `if`, `for` and `func`.
pub mod block;
/// Core parser entry points.
///
/// Defines the parse result type, the expression entry point and the program
/// parser.
pub mod core;
/// Statement parsing.
///
/// Parses every statement form: control flow, declarations, assignments,
/// `print`, `throw`, `return` and expression statements.
pub mod statement;
/// Unary, postfix and primary expression parsing.
///
/// Handles `!`, indexing with `.`, the `?` size query, and atomic expressions
/// like literals, calls and parenthesized groups.
pub mod unary;
/// Helper parsers for names, types and comma-separated lists.
pub mod utils;
