/// Numeric conversion helpers.
///
/// Safe, checked conversions between the integer and floating-point types the
/// interpreter moves values through. Every conversion either succeeds without
/// silent data loss or reports the caller-supplied error.
pub mod num;
