/// The evaluator module executes AST nodes and produces the program's output.
///
/// The evaluator walks the tree, evaluates expressions, runs statement side
/// effects, and manages the scope stack. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Executes every statement kind and evaluates every expression kind.
/// - Manages variables and control flow (loops, conditionals, BREAKOUT, STOP).
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, string,
/// identifier, operator, or keyword. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input text into tokens with source positions.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Matches keywords case-insensitively.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the syntactic structure of statements and expressions.
/// Statement boundaries come from keyword structure alone; newlines carry no
/// meaning here.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with line information.
/// - Handles keyword-closed blocks and operator precedence.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution — integers,
/// reals, strings, and booleans — along with conversion, truthiness, and
/// formatting rules.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements conversions with line-tagged error reporting.
/// - Keeps the integer/floating distinction until display time.
pub mod value;
