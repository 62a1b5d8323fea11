/// Array operators: concatenation, repetition, truncation and indexing.
pub mod array;
/// Operator dispatch on the runtime types of both operands.
pub mod core;
/// Boolean operators.
pub mod logic;
/// Arithmetic and comparison of numbers.
pub mod number;
/// String operators: concatenation, comparison, numeric subtraction,
/// doubling and indexing.
pub mod string;
