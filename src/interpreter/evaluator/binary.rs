use crate::{
    ast::{BinaryOperator, CompareOperator, Expr, LogicOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation on two values.
    ///
    /// Integer pairs stay integers (with checked arithmetic), mixed pairs
    /// promote to floating point, and `+` additionally concatenates two
    /// strings. Division is true division: it always produces a `Real`, so
    /// `7 / 2` is `3.5`. A zero right operand for `/` or `%` is a
    /// division-by-zero error, and anything else is a type error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Example
    /// ```
    /// use franzcode::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add,
    ///                                &Value::Integer(2),
    ///                                &Value::Integer(3),
    ///                                1);
    /// assert_eq!(sum.unwrap(), Value::Integer(5));
    ///
    /// let half = Context::eval_binary(BinaryOperator::Div,
    ///                                 &Value::Integer(7),
    ///                                 &Value::Integer(2),
    ///                                 1);
    /// assert_eq!(half.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => a.checked_add(*b)
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line }),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ if left.is_number() && right.is_number() => {
                    Ok(Value::Real(left.as_real(line)? + right.as_real(line)?))
                },
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Sub => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => a.checked_sub(*b)
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line }),
                _ if left.is_number() && right.is_number() => {
                    Ok(Value::Real(left.as_real(line)? - right.as_real(line)?))
                },
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Mul => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => a.checked_mul(*b)
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line }),
                _ if left.is_number() && right.is_number() => {
                    Ok(Value::Real(left.as_real(line)? * right.as_real(line)?))
                },
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Div => {
                if !left.is_number() || !right.is_number() {
                    return Err(type_mismatch(op, left, right, line));
                }
                if is_zero(right) {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Value::Real(left.as_real(line)? / right.as_real(line)?))
            },

            Mod => match (left, right) {
                (_, _) if !left.is_number() || !right.is_number() => {
                    Err(type_mismatch(op, left, right, line))
                },
                (_, _) if is_zero(right) => Err(RuntimeError::DivisionByZero { line }),
                (Value::Integer(a), Value::Integer(b)) => a.checked_rem(*b)
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line }),
                _ => Ok(Value::Real(left.as_real(line)? % right.as_real(line)?)),
            },

            Pow => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) if *b >= 0 => {
                    let exponent =
                        u32::try_from(*b).map_err(|_| RuntimeError::Overflow { line })?;
                    a.checked_pow(exponent)
                     .map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                _ if left.is_number() && right.is_number() => {
                    Ok(Value::Real(left.as_real(line)?.powf(right.as_real(line)?)))
                },
                _ => Err(type_mismatch(op, left, right, line)),
            },
        }
    }

    /// Evaluates a comparison operation on two values.
    ///
    /// Equality compares across the numeric types (`2 == 2.0` holds), within
    /// strings, and within booleans; values from different families are
    /// simply unequal. Ordering is defined for number pairs and string pairs
    /// only — anything else is a type error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A boolean `Value`.
    ///
    /// # Example
    /// ```
    /// use franzcode::{
    ///     ast::CompareOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_compare(CompareOperator::Greater,
    ///                                    &Value::Integer(5),
    ///                                    &Value::Real(4.5),
    ///                                    1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_compare(op: CompareOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use CompareOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => Ok(Value::Bool(values_equal(left, right, line)?)),
            NotEqual => Ok(Value::Bool(!values_equal(left, right, line)?)),

            Greater | Less | GreaterEqual | LessEqual => match (left, right) {
                (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(match op {
                    Greater => a > b,
                    Less => a < b,
                    GreaterEqual => a >= b,
                    LessEqual => a <= b,
                    Equal | NotEqual => unreachable!(),
                })),
                _ if left.is_number() && right.is_number() => {
                    let a = left.as_real(line)?;
                    let b = right.as_real(line)?;
                    Ok(Value::Bool(match op {
                        Greater => a > b,
                        Less => a < b,
                        GreaterEqual => a >= b,
                        LessEqual => a <= b,
                        Equal | NotEqual => unreachable!(),
                    }))
                },
                _ => Err(RuntimeError::TypeError {
                    details: format!("cannot order {} and {}",
                                     left.type_name(),
                                     right.type_name()),
                    line,
                }),
            },
        }
    }

    /// Evaluates a logic operation, short-circuiting on the left operand.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the result. Both operands coerce through truthiness, and the result is
    /// always a boolean.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: `AND` or `OR`.
    /// - `right`: Right operand expression, evaluated lazily.
    ///
    /// # Returns
    /// A boolean `Value`.
    pub fn eval_logic(&mut self, left: &Expr, op: LogicOperator, right: &Expr) -> EvalResult<Value> {
        let first = self.eval(left)?.is_truthy();

        match op {
            LogicOperator::And => {
                if first {
                    Ok(Value::Bool(self.eval(right)?.is_truthy()))
                } else {
                    Ok(Value::Bool(false))
                }
            },
            LogicOperator::Or => {
                if first {
                    Ok(Value::Bool(true))
                } else {
                    Ok(Value::Bool(self.eval(right)?.is_truthy()))
                }
            },
        }
    }
}

/// Whether a numeric value is exactly zero.
fn is_zero(value: &Value) -> bool {
    match value {
        Value::Integer(n) => *n == 0,
        Value::Real(r) => *r == 0.0,
        _ => false,
    }
}

/// Equality across the value families: numbers compare numerically, strings
/// and booleans within their own kind, everything else is unequal.
fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        _ if left.is_number() && right.is_number() => {
            Ok(left.as_real(line)? == right.as_real(line)?)
        },
        _ => Ok(false),
    }
}

/// Builds the type-error for an operator applied across incompatible types.
fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pairs_stay_integers() {
        let result = Context::eval_binary(BinaryOperator::Mul,
                                          &Value::Integer(6),
                                          &Value::Integer(7),
                                          1);
        assert_eq!(result.unwrap(), Value::Integer(42));
    }

    #[test]
    fn mixed_pairs_promote_to_real() {
        let result = Context::eval_binary(BinaryOperator::Add,
                                          &Value::Integer(1),
                                          &Value::Real(0.5),
                                          1);
        assert_eq!(result.unwrap(), Value::Real(1.5));
    }

    #[test]
    fn strings_concatenate_with_plus() {
        let result = Context::eval_binary(BinaryOperator::Add,
                                          &Value::Str("foo".to_string()),
                                          &Value::Str("bar".to_string()),
                                          1);
        assert_eq!(result.unwrap(), Value::Str("foobar".to_string()));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let result = Context::eval_binary(BinaryOperator::Div,
                                          &Value::Integer(1),
                                          &Value::Integer(0),
                                          3);
        assert_eq!(result.unwrap_err(), RuntimeError::DivisionByZero { line: 3 });

        let result = Context::eval_binary(BinaryOperator::Mod,
                                          &Value::Integer(1),
                                          &Value::Real(0.0),
                                          4);
        assert_eq!(result.unwrap_err(), RuntimeError::DivisionByZero { line: 4 });
    }

    #[test]
    fn integer_power_stays_integer_until_it_cannot() {
        let result = Context::eval_binary(BinaryOperator::Pow,
                                          &Value::Integer(2),
                                          &Value::Integer(10),
                                          1);
        assert_eq!(result.unwrap(), Value::Integer(1024));

        let result = Context::eval_binary(BinaryOperator::Pow,
                                          &Value::Integer(2),
                                          &Value::Integer(-1),
                                          1);
        assert_eq!(result.unwrap(), Value::Real(0.5));
    }

    #[test]
    fn adding_a_number_to_a_string_is_a_type_error() {
        let result = Context::eval_binary(BinaryOperator::Add,
                                          &Value::Str("a".to_string()),
                                          &Value::Integer(1),
                                          7);
        assert!(matches!(result, Err(RuntimeError::TypeError { line: 7, .. })));
    }

    #[test]
    fn equality_crosses_numeric_types_but_not_families() {
        let eq = Context::eval_compare(CompareOperator::Equal,
                                       &Value::Integer(2),
                                       &Value::Real(2.0),
                                       1);
        assert_eq!(eq.unwrap(), Value::Bool(true));

        let eq = Context::eval_compare(CompareOperator::Equal,
                                       &Value::Integer(1),
                                       &Value::Str("1".to_string()),
                                       1);
        assert_eq!(eq.unwrap(), Value::Bool(false));
    }

    #[test]
    fn ordering_strings_against_numbers_is_a_type_error() {
        let result = Context::eval_compare(CompareOperator::Less,
                                           &Value::Str("a".to_string()),
                                           &Value::Integer(1),
                                           2);
        assert!(matches!(result, Err(RuntimeError::TypeError { line: 2, .. })));
    }
}
