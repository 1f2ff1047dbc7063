//! # franzcode
//!
//! FranzCode is a keyword-driven toy scripting language with a tree-walking
//! interpreter. Source text flows through three stages: the lexer produces a
//! token stream, the parser builds a syntax tree, and the evaluator executes
//! that tree with side effects — printing, variable mutation, timed delays,
//! and the occasional rickroll.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent source code as a tree. The AST is built by the parser,
/// traversed by the evaluator, and can render itself back to canonical
/// source text.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to every node for error reporting.
/// - Renders trees back to parseable source for the `--ast` dump.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines the errors that can be raised while lexing, parsing,
/// or executing code — one enum per stage, each variant carrying the source
/// line (and column, for lexical errors) alongside a human-readable message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and detailed messages.
/// - Integrates with the standard error traits for driver-side reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// FranzCode programs.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, values.
/// - Provides the entry points for interpreting user code.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

use crate::{
    ast::Program,
    interpreter::{
        evaluator::core::{Context, Outcome},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Runs the lexer and parser on a source string, returning the syntax tree.
///
/// # Errors
/// Returns the stage's own error — [`error::LexError`] or
/// [`error::ParseError`] — boxed, if the source does not lex or parse.
///
/// # Examples
/// ```
/// use franzcode::compile_source;
///
/// let program = compile_source("SAY \"hello\"").unwrap();
/// assert_eq!(program.body.len(), 1);
///
/// assert!(compile_source("SET 5 TO 3").is_err());
/// ```
pub fn compile_source(source: &str) -> Result<Program, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(program)
}

/// Compiles and executes a source string against an existing context.
///
/// The context keeps its variables across calls, which is what lets an
/// interactive session accumulate state. A deliberate `STOP` is a successful
/// outcome, reported as [`Outcome::Stopped`].
///
/// # Errors
/// Returns the failing stage's error — lexical, syntactic, or runtime — and
/// leaves the context in whatever state execution had reached.
///
/// # Examples
/// ```
/// use franzcode::{interpreter::evaluator::core::Context, run_source};
///
/// let mut context = Context::new();
///
/// assert!(run_source("SET x TO 2 + 2", &mut context).is_ok());
///
/// // 'y' was never set, so modifying it is a runtime error.
/// assert!(run_source("ADD y BY 1", &mut context).is_err());
/// ```
pub fn run_source(source: &str,
                  context: &mut Context)
                  -> Result<Outcome, Box<dyn std::error::Error>> {
    let program = compile_source(source)?;
    let outcome = context.run(&program)?;
    Ok(outcome)
}
