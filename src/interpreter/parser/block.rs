use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::expect,
        },
    },
};

/// Parses `IF condition THEN body [ELSE body] ENDIF`.
///
/// The then-body runs until `ELSE` or `ENDIF`; the else-body, when present,
/// runs until `ENDIF`. Bodies recurse into statement parsing, so conditionals
/// and loops nest arbitrarily. Reaching the end of input before `ENDIF` is an
/// unclosed-block error pointing at the opening line.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `IF` keyword.
/// - `line`: Line number of the `IF` token.
///
/// # Returns
/// A [`Statement::If`] node with both bodies (the else-body may be empty).
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, "THEN after the condition in IF", line)?;

    let mut then_body = Vec::new();
    let mut else_body = Vec::new();

    loop {
        match tokens.peek() {
            None => {
                return Err(ParseError::UnclosedBlock { opener: "IF",
                                                       closer: "ENDIF",
                                                       line });
            },
            Some(entry) if matches!(entry.0, Token::Else | Token::EndIf) => break,
            Some(_) => then_body.push(parse_statement(tokens)?),
        }
    }

    let has_else = matches!(tokens.peek(), Some(entry) if matches!(entry.0, Token::Else));
    if has_else {
        tokens.next();
        loop {
            match tokens.peek() {
                None => {
                    return Err(ParseError::UnclosedBlock { opener: "IF",
                                                           closer: "ENDIF",
                                                           line });
                },
                Some(entry) if matches!(entry.0, Token::EndIf) => break,
                Some(_) => else_body.push(parse_statement(tokens)?),
            }
        }
    }

    expect(tokens, &Token::EndIf, "ENDIF to close the IF block", line)?;

    Ok(Statement::If { condition,
                       then_body,
                       else_body,
                       line })
}

/// Parses `LOOP count TIMES body ENDLOOP`.
///
/// The body runs until `ENDLOOP`; reaching the end of input first is an
/// unclosed-block error pointing at the opening line.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `LOOP` keyword.
/// - `line`: Line number of the `LOOP` token.
///
/// # Returns
/// A [`Statement::Loop`] node.
pub fn parse_loop<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();
    let count = parse_expression(tokens)?;
    expect(tokens, &Token::Times, "TIMES after the count in LOOP", line)?;

    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            None => {
                return Err(ParseError::UnclosedBlock { opener: "LOOP",
                                                       closer: "ENDLOOP",
                                                       line });
            },
            Some(entry) if matches!(entry.0, Token::EndLoop) => break,
            Some(_) => body.push(parse_statement(tokens)?),
        }
    }

    expect(tokens, &Token::EndLoop, "ENDLOOP to close the LOOP block", line)?;

    Ok(Statement::Loop { count, body, line })
}
