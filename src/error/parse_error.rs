#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific keyword or symbol was required but something else was found.
    ExpectedToken {
        /// The keyword or symbol that was required.
        expected: &'static str,
        /// A description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A variable name was required but something else was found.
    ExpectedIdentifier {
        /// A description of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block statement was opened but its closing keyword never appeared.
    UnclosedBlock {
        /// The keyword that opened the block.
        opener: &'static str,
        /// The keyword that would have closed it.
        closer: &'static str,
        /// The source line where the block was opened.
        line:   usize,
    },
}

impl ParseError {
    /// Gets the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedToken { line, .. }
            | Self::ExpectedIdentifier { line, .. }
            | Self::UnclosedBlock { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}. Franz doesn't know what to do with that.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },

            Self::ExpectedIdentifier { found, line } => {
                write!(f, "Error on line {line}: Expected a variable name but found {found}.")
            },

            Self::UnclosedBlock { opener, closer, line } => {
                write!(f, "Error on line {line}: {opener} block is missing its closing {closer}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
