#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while executing a program.
pub enum RuntimeError {
    /// Tried to read or modify a variable that was never set.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division (or modulo) with a zero right operand.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to values of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be used in mixed floating-point math.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// BREAKOUT was executed with no enclosing LOOP to break out of.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::DivisionByZero { line }
            | Self::TypeError { line, .. }
            | Self::ExpectedNumber { line }
            | Self::Overflow { line }
            | Self::LiteralTooLarge { line }
            | Self::BreakOutsideLoop { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not defined. Use SET {name} TO <value> first.")
            },

            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero! Franz says no.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::ExpectedNumber { line } => {
                write!(f, "Error on line {line}: Expected a number.")
            },

            Self::Overflow { line } => {
                write!(f, "Error on line {line}: Integer overflow while trying to compute result.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Number is too large for this operation.")
            },

            Self::BreakOutsideLoop { line } => {
                write!(f, "Error on line {line}: BREAKOUT used outside of a LOOP.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
