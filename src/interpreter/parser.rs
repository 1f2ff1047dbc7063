/// Precedence levels for binary operators.
///
/// Parses the left-associative operator chains, lowest precedence first:
/// logic (`AND`/`OR`), comparison, additive, multiplicative.
pub mod binary;
/// Keyword-closed block statements.
///
/// Parses `IF ... THEN ... [ELSE ...] ENDIF` and `LOOP ... TIMES ... ENDLOOP`,
/// recursing into statement parsing for the bodies so blocks nest arbitrarily.
pub mod block;
/// Parser entry points.
///
/// Strips newline tokens, drives statement parsing to the end of the stream,
/// and exposes the expression-parsing entry used throughout the parser.
pub mod core;
/// Statement dispatch.
///
/// Maps the leading token of each statement to its parse routine; an
/// unrecognized leading token is a parse error.
pub mod statement;
/// Unary and primary expressions.
///
/// Parses prefix `-`/`NOT` and the atoms: numbers, strings, identifiers, and
/// parenthesized sub-expressions.
pub mod unary;
/// Small token-stream helpers shared across the parser.
pub mod utils;
