/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the magnitude is too large.
///
/// ## Example
/// ```
/// use franzcode::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Non-finite values and values whose truncation falls outside the `i64`
/// range report the caller-supplied error instead of wrapping or saturating.
///
/// ## Example
/// ```
/// use franzcode::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(2.9, "bad").unwrap(), 2);
/// assert_eq!(f64_to_i64_trunc(-2.9, "bad").unwrap(), -2);
/// assert!(f64_to_i64_trunc(f64::NAN, "bad").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_trunc<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}
