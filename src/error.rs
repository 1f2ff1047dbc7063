/// Lexical errors.
///
/// Defines all error types that can occur while tokenizing source text.
/// Lexical errors cover malformed literals, unterminated strings, and
/// characters the language does not recognize, each tagged with the line and
/// column where scanning failed.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream. Parse errors include unexpected tokens, missing keywords,
/// and blocks that were never closed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution. Runtime
/// errors include undefined variables, division by zero, type mismatches, and
/// arithmetic overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
