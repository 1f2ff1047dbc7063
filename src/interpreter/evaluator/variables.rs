use crate::{
    ast::{Expr, MutateOp},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context {
    /// `SET name TO expr` — evaluates the value and binds it in the current
    /// (innermost) scope, shadowing any outer binding of the same name.
    pub(crate) fn exec_set(&mut self, name: &str, value: &Expr) -> EvalResult<Flow> {
        let value = self.eval(value)?;
        self.define_local(name, value);
        Ok(Flow::Normal)
    }

    /// `ADD/SUB/MUL/DIV name BY expr` — reads the current value, applies the
    /// arithmetic, and writes the result back to the scope where the name was
    /// found. The variable must already exist somewhere in the chain; this
    /// never creates a binding.
    pub(crate) fn exec_modify(&mut self,
                              op: MutateOp,
                              name: &str,
                              amount: &Expr,
                              line: usize)
                              -> EvalResult<Flow> {
        let current = self.eval_variable(name, line)?;
        let amount = self.eval(amount)?;

        let result = Self::eval_binary(op.operator(), &current, &amount, line)?;
        self.assign_existing(name, result, line)?;
        Ok(Flow::Normal)
    }
}
