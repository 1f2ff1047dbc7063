use std::collections::HashMap;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished executing.
///
/// Control transfers are ordinary return values here, so every call site
/// visibly decides what to do with them: `LOOP` absorbs `Break`, everything
/// else passes non-normal flow upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `BREAKOUT` is looking for its enclosing loop. Carries the source
    /// line so one with no enclosing loop can be reported.
    Break(usize),
    /// A `STOP` ends the whole run.
    Halt,
}

/// How a whole run ended.
///
/// A deliberate `STOP` is a successful outcome, distinct from every error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran to the end of its statement list.
    Completed,
    /// The program ended itself with `STOP`.
    Stopped,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: a stack of lexical scopes mapping
/// variable names to values. The bottom scope is the process-wide root,
/// created once and pre-seeded with the built-in bindings; conditionals and
/// loop iterations push and pop child scopes above it.
///
/// ## Usage
///
/// `Context` is created once and reused across runs, which is what lets the
/// interactive prompt keep variables between inputs.
pub struct Context {
    /// Innermost scope last. Lookup scans from the end; declaration writes to
    /// the end; mutation writes wherever the name was found.
    pub scope_stack: Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with the seeded root scope:
    /// `LOOPCOUNT = 0`, the `TRUE`/`FALSE` constants, and `PI`/`TAU`.
    ///
    /// ## Example
    /// ```
    /// use franzcode::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.get_variable("LOOPCOUNT"), Some(&Value::Integer(0)));
    /// assert_eq!(context.get_variable("TRUE"), Some(&Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut root = HashMap::new();
        root.insert("LOOPCOUNT".to_string(), Value::Integer(0));
        root.insert("TRUE".to_string(), Value::Bool(true));
        root.insert("FALSE".to_string(), Value::Bool(false));
        root.insert("PI".to_string(), Value::Real(std::f64::consts::PI));
        root.insert("TAU".to_string(), Value::Real(std::f64::consts::TAU));

        Self { scope_stack: vec![root] }
    }

    /// Executes a whole program against the root scope.
    ///
    /// Statements run in order until the list ends, a `STOP` halts the run,
    /// or a runtime error aborts it. A `BREAKOUT` that reaches the top level
    /// is an error.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// [`Outcome::Completed`] or [`Outcome::Stopped`] on success.
    ///
    /// # Example
    /// ```
    /// use franzcode::interpreter::{
    ///     evaluator::core::{Context, Outcome},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    ///     value::core::Value,
    /// };
    ///
    /// let tokens = tokenize("SET x TO 3\nADD x BY 4").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.run(&program).unwrap(), Outcome::Completed);
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(7)));
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<Outcome> {
        match self.exec_block(&program.body)? {
            Flow::Normal => Ok(Outcome::Completed),
            Flow::Halt => Ok(Outcome::Stopped),
            Flow::Break(line) => Err(RuntimeError::BreakOutsideLoop { line }),
        }
    }

    /// Executes a sequence of statements in the current scope.
    ///
    /// The first non-normal flow stops the sequence and is returned to the
    /// caller, which decides whether to absorb it.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            match self.exec_statement(statement)? {
                Flow::Normal => {},
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// Dispatch is an exhaustive match over every statement variant, so a new
    /// statement kind cannot be added without a handler.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Say { expr, .. } => self.exec_say(expr),
            Statement::Yell { expr, .. } => self.exec_yell(expr),
            Statement::Whisper { expr, .. } => self.exec_whisper(expr),
            Statement::Confuse { expr, .. } => self.exec_confuse(expr),
            Statement::Repeat { expr, count, line } => self.exec_repeat(expr, count, *line),
            Statement::Yeet { expr, .. } => self.exec_yeet(expr),

            Statement::Set { name, value, .. } => self.exec_set(name, value),
            Statement::Modify { op, name, amount, line } => {
                self.exec_modify(*op, name, amount, *line)
            },

            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => self.exec_if(condition, then_body, else_body),
            Statement::Loop { count, body, line } => self.exec_loop(count, body, *line),
            Statement::Breakout { line } => Ok(Flow::Break(*line)),

            Statement::Wait { seconds, line } => self.exec_wait(seconds, *line),
            Statement::Dump { .. } => self.exec_dump(),
            Statement::Stop { .. } => self.exec_stop(),

            Statement::Rickroll { .. } => self.exec_rickroll(),
            Statement::Mystery { .. } => self.exec_mystery(),
            Statement::Oops { .. } => self.exec_oops(),
            Statement::Flip { .. } => self.exec_flip(),
            Statement::Dice { .. } => self.exec_dice(),
            Statement::Bruh { .. } => self.exec_bruh(),
            Statement::Poggers { .. } => self.exec_poggers(),
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// Dispatch is an exhaustive match over every expression variant. String
    /// literals resolve their `{name}` interpolation markers against the
    /// active scope chain right here, at evaluation time.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::from(value)),
            Expr::Str { value, .. } => Ok(Value::Str(self.interpolate(value))),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Unary { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left, op, right, line } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_binary(*op, &lhs, &rhs, *line)
            },
            Expr::Compare { left, op, right, line } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_compare(*op, &lhs, &rhs, *line)
            },
            Expr::Logic { left, op, right, .. } => self.eval_logic(left, *op, right),
        }
    }

    /// Looks up a variable, erroring if it is not defined anywhere in the
    /// scope chain.
    ///
    /// # Parameters
    /// - `name`: Variable name, case-sensitive.
    /// - `line`: Line number for error reporting.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Pushes a fresh child scope.
    ///
    /// Conditionals do this once per execution; loops do it once per
    /// iteration.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Removes the innermost scope. The root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Retrieves a variable from the scope stack.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// root. Returns `None` if the variable is not defined in any scope.
    ///
    /// ## Example
    /// ```
    /// use franzcode::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Integer(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        for scope in self.scope_stack.iter().rev() {
            if let Some(value) = scope.get(name) {
                return Some(value);
            }
        }
        None
    }

    /// Defines a variable in the current (innermost) scope.
    ///
    /// This is what `SET` does: it always writes innermost, shadowing any
    /// outer binding of the same name for the rest of the scope's lifetime.
    ///
    /// # Panics
    /// Panics if no scope exists, which indicates an internal error — the
    /// root scope is created in [`Context::new`] and never popped.
    pub fn define_local(&mut self, name: &str, value: Value) {
        self.scope_stack
            .last_mut()
            .expect("the root scope always exists")
            .insert(name.to_string(), value);
    }

    /// Assigns to an existing variable, writing back to the scope where the
    /// name was found.
    ///
    /// This is what the `ADD`/`SUB`/`MUL`/`DIV` mutations do. Unlike `SET`,
    /// it never creates a binding: a name absent from the whole chain is an
    /// error.
    ///
    /// # Parameters
    /// - `name`: Variable to update.
    /// - `value`: New value.
    /// - `line`: Line number for error reporting.
    pub fn assign_existing(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        for scope in self.scope_stack.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                            line })
    }
}
