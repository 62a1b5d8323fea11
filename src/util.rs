/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `f64` and
/// `usize`/`i64` without risking silent truncation. Every function that can
/// lose information returns an `Option` and leaves the error to the caller.
pub mod num;
