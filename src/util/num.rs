/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a length to `f64`.
///
/// Lengths above `2^53` cannot occur for in-memory strings and arrays, so the
/// conversion is exact in practice.
///
/// ## Example
/// ```
/// use ciktor::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(12), 12.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an `f64` to an index or count if it is a non-negative integer.
///
/// Returns `None` for negative, fractional, non-finite or unsafely large
/// values.
///
/// ## Example
/// ```
/// use ciktor::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(3.0), Some(3));
/// assert_eq!(f64_to_index(1.5), None);
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    usize::try_from(value as u64).ok()
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Returns `None` if the truncated value is not finite or does not fit.
///
/// ## Example
/// ```
/// use ciktor::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9), Some(7));
/// assert_eq!(f64_to_i64_truncated(-7.9), Some(-7));
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Converts an `i64` to `f64`.
///
/// Remainders of truncated operands are always smaller in magnitude than the
/// operands, so the result is exact whenever the inputs were.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
