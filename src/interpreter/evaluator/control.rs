use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context {
    /// `IF cond THEN ... [ELSE ...] ENDIF`.
    ///
    /// The condition is tested for truthiness, then exactly one fresh child
    /// scope is pushed and either the then-body or the else-body runs inside
    /// it (an empty else-body simply does nothing). Variables set in the
    /// branch never leak out. Non-normal flow from the branch passes through
    /// untouched so BREAKOUT and STOP keep working inside conditionals.
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_body: &[Statement],
                          else_body: &[Statement])
                          -> EvalResult<Flow> {
        let truthy = self.eval(condition)?.is_truthy();

        self.push_scope();
        let flow = if truthy {
            self.exec_block(then_body)
        } else {
            self.exec_block(else_body)
        };
        self.pop_scope();

        flow
    }

    /// `LOOP count TIMES ... ENDLOOP`.
    ///
    /// The count is evaluated once and truncated toward zero; a count of zero
    /// or less runs nothing. Each iteration gets a fresh child scope seeded
    /// with `LOOPCOUNT` set to the 1-based iteration index. A `Break` from
    /// the body is absorbed here — it ends this loop and nothing else — while
    /// `Halt` keeps propagating.
    pub(crate) fn exec_loop(&mut self,
                            count: &Expr,
                            body: &[Statement],
                            line: usize)
                            -> EvalResult<Flow> {
        let count = self.eval(count)?.as_count(line)?;

        for index in 1..=count.max(0) {
            self.push_scope();
            self.define_local("LOOPCOUNT", Value::Integer(index));
            let flow = self.exec_block(body);
            self.pop_scope();

            match flow? {
                Flow::Normal => {},
                Flow::Break(_) => return Ok(Flow::Normal),
                Flow::Halt => return Ok(Flow::Halt),
            }
        }

        Ok(Flow::Normal)
    }
}
