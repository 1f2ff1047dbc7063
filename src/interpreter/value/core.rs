use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_trunc, i64_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a FranzCode expression can produce. The
/// integer/floating distinction from the source survives in here and only
/// collapses when a value is formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
    /// A text value. Interpolation has already happened by the time a string
    /// becomes a `Value`.
    Str(String),
    /// A boolean, produced by comparisons, logic operators, or the seeded
    /// `TRUE`/`FALSE` constants.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
        }
    }
}

impl Value {
    /// A short noun for the value's type, used in type-error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Real(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Zero, the empty string, and `FALSE` are falsy; everything else is
    /// truthy.
    ///
    /// ## Example
    /// ```
    /// use franzcode::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(Value::Str("hi".to_string()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Converts the value to an `f64`, or reports that a number was expected.
    ///
    /// Integers too large to be represented exactly are an error rather than
    /// a silent precision loss.
    ///
    /// # Parameters
    /// - `line`: Source line for error reporting.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to an iteration count, truncating toward zero.
    ///
    /// Used by `LOOP` and `REPEAT`. Integers pass through, reals truncate,
    /// booleans coerce to 0 or 1; strings are not counts.
    ///
    /// # Parameters
    /// - `line`: Source line for error reporting.
    ///
    /// ## Example
    /// ```
    /// use franzcode::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(2.9).as_count(1).unwrap(), 2);
    /// assert_eq!(Value::Real(-2.9).as_count(1).unwrap(), -2);
    /// assert_eq!(Value::Bool(true).as_count(1).unwrap(), 1);
    /// assert!(Value::Str("3".to_string()).as_count(1).is_err());
    /// ```
    pub fn as_count(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_trunc(*r, RuntimeError::ExpectedNumber { line }),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Str(_) => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Reads the value as a duration in seconds.
    ///
    /// `WAIT` accepts anything that can be read as numeric, which includes
    /// strings holding a number. Negative and non-finite durations are
    /// rejected.
    ///
    /// # Parameters
    /// - `line`: Source line for error reporting.
    pub fn as_seconds(&self, line: usize) -> EvalResult<f64> {
        let seconds = match self {
            Self::Integer(_) | Self::Real(_) => self.as_real(line)?,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Str(s) => s.trim().parse().map_err(|_| RuntimeError::TypeError {
                details: format!("WAIT duration '{s}' cannot be read as a number"),
                line,
            })?,
        };

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(RuntimeError::TypeError { details:
                                                     "WAIT duration must be a non-negative number"
                                                         .to_string(),
                                                 line });
        }
        Ok(seconds)
    }

    /// Formats the value the way `DUMP` shows it: strings quoted, reals
    /// keeping their decimal point, booleans as `TRUE`/`FALSE`.
    ///
    /// ## Example
    /// ```
    /// use franzcode::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Str("hi".to_string()).detail(), "\"hi\"");
    /// assert_eq!(Value::Real(5.0).detail(), "5.0");
    /// assert_eq!(Value::Integer(5).detail(), "5");
    /// ```
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Str(s) => format!("{s:?}"),
            Self::Real(r) => format!("{r:?}"),
            Self::Integer(n) => n.to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
        }
    }

    /// Returns `true` if the value is numeric (integer or real).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }
}

/// The display form every output statement and interpolation uses: a real
/// with no fractional part prints as an integer, booleans print as the fixed
/// words `TRUE`/`FALSE`, strings print bare.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.0}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_reals_display_without_a_fractional_part() {
        assert_eq!(Value::Real(7.0).to_string(), "7");
        assert_eq!(Value::Real(3.5).to_string(), "3.5");
        assert_eq!(Value::Integer(7).to_string(), "7");
    }

    #[test]
    fn booleans_display_as_fixed_words() {
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
        assert_eq!(Value::Bool(false).to_string(), "FALSE");
    }

    #[test]
    fn seconds_accept_numeric_strings() {
        assert_eq!(Value::Str("2.5".to_string()).as_seconds(1).unwrap(), 2.5);
        assert!(Value::Str("soon".to_string()).as_seconds(1).is_err());
        assert!(Value::Real(-1.0).as_seconds(1).is_err());
    }
}
