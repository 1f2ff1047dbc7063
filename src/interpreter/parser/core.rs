use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{binary::parse_logic, statement::parse_statement},
    },
};

/// Result type used by every parse routine.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into a program.
///
/// Newline tokens are stripped up front — statement boundaries are determined
/// purely by keyword structure, so several statements may share a line and a
/// single statement may span lines.
///
/// # Parameters
/// - `tokens`: The stream produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The parsed [`Program`], or the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use franzcode::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("SAY \"hello\"\nSET x TO 1").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, Pos)]) -> ParseResult<Program> {
    let mut iter = tokens.iter()
                         .filter(|entry| !matches!(entry.0, Token::NewLine))
                         .peekable();

    let mut body = Vec::new();
    while iter.peek().is_some() {
        body.push(parse_statement(&mut iter)?);
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logic, and descends through the precedence
/// hierarchy from there.
///
/// Grammar: `expression := logic`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    parse_logic(tokens)
}

/// Maps an exhausted stream to the canonical end-of-input error.
pub(crate) const fn end_of_input(line: usize) -> ParseError {
    ParseError::UnexpectedEndOfInput { line }
}
