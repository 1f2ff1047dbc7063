use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::core::{ParseResult, end_of_input, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `NOT` (logical
/// negation). Unary operators are right-associative, so `NOT -x` parses as
/// `NOT (-x)`. Without a prefix operator, parsing falls through to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "NOT") unary
///            | primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let line = pos.line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Negate,
                         expr: Box::new(expr),
                         line })
    } else if let Some((Token::Not, pos)) = tokens.peek() {
        let line = pos.line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Not,
                         expr: Box::new(expr),
                         line })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals (integer or floating-point)
/// - string literals
/// - identifiers
/// - parenthesized sub-expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed [`Expr`], or a `ParseError` when the token cannot start an
/// expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::Integer(n), pos)) => Ok(Expr::Number { value: LiteralValue::Integer(*n),
                                                            line:  pos.line, }),
        Some((Token::Real(r), pos)) => Ok(Expr::Number { value: LiteralValue::Real(*r),
                                                         line:  pos.line, }),
        Some((Token::Str(s), pos)) => Ok(Expr::Str { value: s.clone(),
                                                     line:  pos.line, }),
        Some((Token::Identifier(name), pos)) => Ok(Expr::Variable { name: name.clone(),
                                                                    line: pos.line, }),
        Some((Token::LParen, pos)) => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(inner),
                Some((token, pos)) => {
                    Err(ParseError::ExpectedToken { expected: "')' to close the grouped expression",
                                                    found: format!("{token:?}"),
                                                    line: pos.line, })
                },
                None => Err(end_of_input(pos.line)),
            }
        },
        Some((token, pos)) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                                line:  pos.line, }),
        None => Err(end_of_input(0)),
    }
}
