use std::iter::Peekable;

use crate::{
    ast::{MutateOp, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            block::{parse_if, parse_loop},
            core::{ParseResult, end_of_input, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the statement shape:
/// - output: `SAY` / `YELL` / `WHISPER` / `CONFUSE` / `REPEAT` / `YEET`
/// - variables: `SET`, and the `ADD`/`SUB`/`MUL`/`DIV ... BY` mutations
/// - control flow: `IF`, `LOOP`, `BREAKOUT`
/// - utility: `WAIT`, `DUMP`, `STOP`
/// - novelty: `RICKROLL` / `MYSTERY` / `OOPS` / `FLIP` / `DICE` / `BRUH` /
///   `POGGERS`
///
/// Anything else in statement position is an error.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let (token, line) = match tokens.peek() {
        Some(entry) => (entry.0.clone(), entry.1.line),
        None => return Err(end_of_input(0)),
    };

    match token {
        Token::Say => {
            tokens.next();
            Ok(Statement::Say { expr: parse_expression(tokens)?,
                                line })
        },
        Token::Yell => {
            tokens.next();
            Ok(Statement::Yell { expr: parse_expression(tokens)?,
                                 line })
        },
        Token::Whisper => {
            tokens.next();
            Ok(Statement::Whisper { expr: parse_expression(tokens)?,
                                    line })
        },
        Token::Confuse => {
            tokens.next();
            Ok(Statement::Confuse { expr: parse_expression(tokens)?,
                                    line })
        },
        Token::Yeet => {
            tokens.next();
            Ok(Statement::Yeet { expr: parse_expression(tokens)?,
                                 line })
        },
        Token::Repeat => parse_repeat(tokens, line),

        Token::Set => parse_set(tokens, line),
        Token::Add | Token::Sub | Token::Mul | Token::Div => parse_modify(tokens, line),

        Token::If => parse_if(tokens, line),
        Token::Loop => parse_loop(tokens, line),
        Token::Breakout => {
            tokens.next();
            Ok(Statement::Breakout { line })
        },

        Token::Wait => parse_wait(tokens, line),
        Token::Dump => {
            tokens.next();
            Ok(Statement::Dump { line })
        },
        Token::Stop => {
            tokens.next();
            Ok(Statement::Stop { line })
        },

        Token::Rickroll => {
            tokens.next();
            Ok(Statement::Rickroll { line })
        },
        Token::Mystery => {
            tokens.next();
            Ok(Statement::Mystery { line })
        },
        Token::Oops => {
            tokens.next();
            Ok(Statement::Oops { line })
        },
        Token::Flip => {
            tokens.next();
            Ok(Statement::Flip { line })
        },
        Token::Dice => {
            tokens.next();
            Ok(Statement::Dice { line })
        },
        Token::Bruh => {
            tokens.next();
            Ok(Statement::Bruh { line })
        },
        Token::Poggers => {
            tokens.next();
            Ok(Statement::Poggers { line })
        },

        other => Err(ParseError::UnexpectedToken { token: format!("{other:?}"),
                                                   line }),
    }
}

/// Parses `REPEAT expr count TIMES`.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();
    let expr = parse_expression(tokens)?;
    let count = parse_expression(tokens)?;
    expect(tokens, &Token::Times, "TIMES after the count in REPEAT", line)?;

    Ok(Statement::Repeat { expr, count, line })
}

/// Parses `SET name TO expr`.
fn parse_set<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();
    let name = parse_identifier(tokens, line)?;
    expect(tokens, &Token::To, "TO after the variable name in SET", line)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Set { name, value, line })
}

/// Parses `ADD/SUB/MUL/DIV name BY expr`.
fn parse_modify<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let op = match tokens.next() {
        Some((Token::Add, _)) => MutateOp::Add,
        Some((Token::Sub, _)) => MutateOp::Sub,
        Some((Token::Mul, _)) => MutateOp::Mul,
        Some((Token::Div, _)) => MutateOp::Div,
        _ => return Err(end_of_input(line)),
    };

    let name = parse_identifier(tokens, line)?;
    expect(tokens, &Token::By, "BY after the variable name", line)?;
    let amount = parse_expression(tokens)?;

    Ok(Statement::Modify { op, name, amount, line })
}

/// Parses `WAIT expr SECONDS`.
fn parse_wait<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();
    let seconds = parse_expression(tokens)?;
    expect(tokens, &Token::Seconds, "SECONDS after the duration in WAIT", line)?;

    Ok(Statement::Wait { seconds, line })
}
