/// Arithmetic, comparison, and short-circuit logic evaluation.
pub mod binary;
/// Conditional and loop execution, including BREAKOUT absorption.
pub mod control;
/// The evaluation context: scope stack, dispatch, and control-flow results.
pub mod core;
/// The seven fixed-or-randomized novelty statements.
pub mod novelty;
/// The output statement family and its text transforms.
pub mod output;
/// Unary operator evaluation.
pub mod unary;
/// String interpolation against the active scope chain.
pub mod utils;
/// WAIT, DUMP, and STOP.
pub mod utility;
/// SET and the arithmetic variable mutations.
pub mod variables;
