use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::core::{ParseResult, end_of_input},
    },
};

/// Consumes the next token, asserting that it equals `expected`.
///
/// `describe` is the human-readable spelling used in the error report when
/// something else (or nothing) is found.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `expected`: The token that must come next.
/// - `describe`: How to name that token in an error message.
/// - `line`: Line of the construct being parsed, used when input ends.
pub(crate) fn expect<'a, I>(tokens: &mut Peekable<I>,
                            expected: &Token,
                            describe: &'static str,
                            line: usize)
                            -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((token, pos)) => {
            if token == expected {
                Ok(())
            } else {
                Err(ParseError::ExpectedToken { expected: describe,
                                                found: format!("{token:?}"),
                                                line: pos.line, })
            }
        },
        None => Err(end_of_input(line)),
    }
}

/// Consumes the next token, asserting that it is an identifier, and returns
/// the name with its original casing.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line of the construct being parsed, used when input ends.
pub(crate) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, pos)) => Err(ParseError::ExpectedIdentifier { found: format!("{token:?}"),
                                                                   line:  pos.line, }),
        None => Err(end_of_input(line)),
    }
}
