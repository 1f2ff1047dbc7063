use std::{collections::BTreeMap, thread, time::Duration};

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context {
    /// `WAIT expr SECONDS` — blocks the calling thread for the evaluated
    /// duration. The duration must read as a non-negative number; once the
    /// sleep starts it runs to completion.
    pub(crate) fn exec_wait(&mut self, seconds: &Expr, line: usize) -> EvalResult<Flow> {
        let seconds = self.eval(seconds)?.as_seconds(line)?;
        thread::sleep(Duration::from_secs_f64(seconds));
        Ok(Flow::Normal)
    }

    /// `DUMP` — prints a bordered listing of every visible variable.
    ///
    /// The scope chain is flattened with inner scopes winning, the
    /// `TRUE`/`FALSE` constants are filtered out, and the rest is listed
    /// sorted by name in detailed form (strings quoted, whole reals keeping
    /// their decimal point).
    pub(crate) fn exec_dump(&self) -> EvalResult<Flow> {
        let mut merged = BTreeMap::new();
        for scope in &self.scope_stack {
            for (name, value) in scope {
                merged.insert(name.clone(), value.clone());
            }
        }
        merged.remove("TRUE");
        merged.remove("FALSE");

        println!("┌─────── FRANZCODE VARIABLE DUMP ───────┐");
        if merged.is_empty() {
            println!("│  (no variables set yet)");
        } else {
            for (name, value) in &merged {
                println!("│  {name:<20} = {}", value.detail());
            }
        }
        println!("└────────────────────────────────────────┘");

        Ok(Flow::Normal)
    }

    /// `STOP` — announces the stop and halts the whole run. This is a
    /// deliberate, successful end, not an error; the driver decides whether
    /// to exit the process or just end the current input.
    pub(crate) fn exec_stop(&self) -> EvalResult<Flow> {
        println!("[FranzCode] Stopped by STOP.");
        Ok(Flow::Halt)
    }
}
