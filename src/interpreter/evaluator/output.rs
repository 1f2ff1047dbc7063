use rand::seq::SliceRandom;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

/// Upper-cases the text and adds the YELL emphasis.
///
/// ## Example
/// ```
/// use franzcode::interpreter::evaluator::output::yelled;
///
/// assert_eq!(yelled("hello"), "HELLO!!!");
/// ```
#[must_use]
pub fn yelled(text: &str) -> String {
    format!("{}!!!", text.to_uppercase())
}

/// Lower-cases the text and lets it trail off.
///
/// ## Example
/// ```
/// use franzcode::interpreter::evaluator::output::whispered;
///
/// assert_eq!(whispered("HELLO"), "hello...");
/// ```
#[must_use]
pub fn whispered(text: &str) -> String {
    format!("{}...", text.to_lowercase())
}

/// Returns the text with its characters in a uniformly random order.
#[must_use]
pub fn confused(text: &str) -> String {
    let mut characters: Vec<char> = text.chars().collect();
    characters.shuffle(&mut rand::thread_rng());
    characters.into_iter().collect()
}

/// Repeats the text, each copy followed by a single space.
///
/// A non-positive count repeats nothing.
///
/// ## Example
/// ```
/// use franzcode::interpreter::evaluator::output::repeated;
///
/// assert_eq!(repeated("ha", 3), "ha ha ha ");
/// assert_eq!(repeated("ha", 0), "");
/// assert_eq!(repeated("ha", -2), "");
/// ```
#[must_use]
pub fn repeated(text: &str, count: i64) -> String {
    let count = usize::try_from(count).unwrap_or(0);
    format!("{text} ").repeat(count)
}

/// Wraps the text in the YEET launch decoration.
///
/// ## Example
/// ```
/// use franzcode::interpreter::evaluator::output::yeeted;
///
/// assert_eq!(yeeted("it"), "YEET ➜ it 🚀");
/// ```
#[must_use]
pub fn yeeted(text: &str) -> String {
    format!("YEET ➜ {text} 🚀")
}

impl Context {
    /// `SAY expr` — prints the formatted value as-is.
    pub(crate) fn exec_say(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        println!("{text}");
        Ok(Flow::Normal)
    }

    /// `YELL expr` — prints the value loudly.
    pub(crate) fn exec_yell(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        println!("{}", yelled(&text));
        Ok(Flow::Normal)
    }

    /// `WHISPER expr` — prints the value quietly.
    pub(crate) fn exec_whisper(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        println!("{}", whispered(&text));
        Ok(Flow::Normal)
    }

    /// `CONFUSE expr` — prints the value with its characters shuffled.
    pub(crate) fn exec_confuse(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        println!("{}", confused(&text));
        Ok(Flow::Normal)
    }

    /// `REPEAT expr count TIMES` — prints the value `count` times over on one
    /// line. The count truncates toward zero.
    pub(crate) fn exec_repeat(&mut self, expr: &Expr, count: &Expr, line: usize) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        let count = self.eval(count)?.as_count(line)?;
        println!("{}", repeated(&text, count));
        Ok(Flow::Normal)
    }

    /// `YEET expr` — prints the value with launch decoration.
    pub(crate) fn exec_yeet(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let text = self.eval(expr)?.to_string();
        println!("{}", yeeted(&text));
        Ok(Flow::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confused_is_a_permutation() {
        let scrambled = confused("abcdef");

        let mut expected: Vec<char> = "abcdef".chars().collect();
        let mut actual: Vec<char> = scrambled.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();

        assert_eq!(actual, expected);
    }

    #[test]
    fn repeated_keeps_the_trailing_separator() {
        assert_eq!(repeated("x", 1), "x ");
    }
}
