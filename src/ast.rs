/// Represents a numeric literal in the language.
///
/// FranzCode keeps integers and floating-point numbers distinct from the
/// moment they are lexed until a value is formatted for display, so the AST
/// carries the distinction too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `3.14`.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Expressions are the value-producing half of the language: literals,
/// variable references, and the arithmetic, comparison, and logic operators
/// that combine them. Each variant records the source line it came from so
/// runtime errors can point back at the program text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. The raw text is kept verbatim, including any
    /// `{name}` interpolation markers, which are resolved at evaluation time.
    Str {
        /// The raw string contents, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name. Names are case-sensitive.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary prefix operation (`-` or `NOT`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the left operand.
        line:  usize,
    },
    /// A comparison operation producing a boolean.
    Compare {
        /// Left operand.
        left:  Box<Self>,
        /// The comparison operator.
        op:    CompareOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the left operand.
        line:  usize,
    },
    /// A short-circuiting logic operation (`AND` / `OR`).
    Logic {
        /// Left operand.
        left:  Box<Self>,
        /// The logic operator.
        op:    LogicOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the left operand.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use franzcode::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Compare { line, .. }
            | Self::Logic { line, .. } => *line,
        }
    }

    /// Renders the expression as canonical FranzCode source.
    ///
    /// Every non-atomic sub-expression is wrapped in parentheses, so parsing
    /// the rendering reproduces the exact tree shape.
    ///
    /// ## Example
    /// ```
    /// use franzcode::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::Binary { left:  Box::new(Expr::Number { value: 1.into(),
    ///                                                         line:  1, }),
    ///                          op:    BinaryOperator::Add,
    ///                          right: Box::new(Expr::Number { value: 2.into(),
    ///                                                         line:  1, }),
    ///                          line:  1, };
    ///
    /// assert_eq!(sum.source_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn source_string(&self) -> String {
        match self {
            Self::Number { value, .. } => match value {
                LiteralValue::Integer(n) => n.to_string(),
                LiteralValue::Real(r) => {
                    if r.fract() == 0.0 {
                        format!("{r:.1}")
                    } else {
                        format!("{r}")
                    }
                },
            },
            Self::Str { value, .. } => {
                if value.contains('"') {
                    format!("'{value}'")
                } else {
                    format!("\"{value}\"")
                }
            },
            Self::Variable { name, .. } => name.clone(),
            Self::Unary { op, expr, .. } => match op {
                UnaryOperator::Negate => format!("(-{})", expr.source_string()),
                UnaryOperator::Not => format!("(NOT {})", expr.source_string()),
            },
            Self::Binary { left, op, right, .. } => {
                format!("({} {op} {})", left.source_string(), right.source_string())
            },
            Self::Compare { left, op, right, .. } => {
                format!("({} {op} {})", left.source_string(), right.source_string())
            },
            Self::Logic { left, op, right, .. } => {
                format!("({} {op} {})", left.source_string(), right.source_string())
            },
        }
    }
}

/// Represents a top-level or block-level statement.
///
/// Statements are the side-effecting half of the language: printing,
/// variable manipulation, control flow, and the novelty commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `SAY expr` — print the value plainly.
    Say {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `YELL expr` — print upper-cased with emphasis.
    Yell {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `WHISPER expr` — print lower-cased, trailing off.
    Whisper {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `CONFUSE expr` — print with the characters shuffled at random.
    Confuse {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `REPEAT expr count TIMES` — print the value `count` times over.
    Repeat {
        /// The expression to print.
        expr:  Expr,
        /// How many repetitions to print.
        count: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `YEET expr` — print with launch decoration.
    Yeet {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `SET name TO expr` — declare or shadow a variable in the current scope.
    Set {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `ADD/SUB/MUL/DIV name BY expr` — arithmetic on an existing variable,
    /// written back to the scope where the name was found.
    Modify {
        /// The arithmetic form being applied.
        op:     MutateOp,
        /// The name of the variable.
        name:   String,
        /// The amount to combine with the current value.
        amount: Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `IF cond THEN ... [ELSE ...] ENDIF`.
    If {
        /// The condition expression, tested for truthiness.
        condition: Expr,
        /// Statements executed when the condition holds.
        then_body: Vec<Self>,
        /// Statements executed otherwise. May be empty.
        else_body: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `LOOP count TIMES ... ENDLOOP` — a counted loop.
    Loop {
        /// The iteration count expression, truncated toward zero.
        count: Expr,
        /// The loop body.
        body:  Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `BREAKOUT` — exit the innermost enclosing LOOP.
    Breakout {
        /// Line number in the source code.
        line: usize,
    },
    /// `WAIT expr SECONDS` — block for the given duration.
    Wait {
        /// The duration expression, in seconds.
        seconds: Expr,
        /// Line number in the source code.
        line:    usize,
    },
    /// `DUMP` — print every visible variable.
    Dump {
        /// Line number in the source code.
        line: usize,
    },
    /// `STOP` — end the run immediately and deliberately.
    Stop {
        /// Line number in the source code.
        line: usize,
    },
    /// `RICKROLL` — sing a line, then try to open a certain music video.
    Rickroll {
        /// Line number in the source code.
        line: usize,
    },
    /// `MYSTERY` — print a random message from a fixed pool.
    Mystery {
        /// Line number in the source code.
        line: usize,
    },
    /// `OOPS` — print a fake crash report.
    Oops {
        /// Line number in the source code.
        line: usize,
    },
    /// `FLIP` — flip a coin.
    Flip {
        /// Line number in the source code.
        line: usize,
    },
    /// `DICE` — roll a six-sided die.
    Dice {
        /// Line number in the source code.
        line: usize,
    },
    /// `BRUH` — print "bruh." and pause for effect.
    Bruh {
        /// Line number in the source code.
        line: usize,
    },
    /// `POGGERS` — print a random celebratory message.
    Poggers {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Appends the canonical rendering of this statement to `out`.
    ///
    /// Block bodies are indented by two spaces per nesting level; an empty
    /// else-body renders no `ELSE` section at all.
    pub fn write_source(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);

        match self {
            Self::Say { expr, .. } => {
                out.push_str(&format!("{pad}SAY {}\n", expr.source_string()));
            },
            Self::Yell { expr, .. } => {
                out.push_str(&format!("{pad}YELL {}\n", expr.source_string()));
            },
            Self::Whisper { expr, .. } => {
                out.push_str(&format!("{pad}WHISPER {}\n", expr.source_string()));
            },
            Self::Confuse { expr, .. } => {
                out.push_str(&format!("{pad}CONFUSE {}\n", expr.source_string()));
            },
            Self::Repeat { expr, count, .. } => {
                out.push_str(&format!("{pad}REPEAT {} {} TIMES\n",
                                      expr.source_string(),
                                      count.source_string()));
            },
            Self::Yeet { expr, .. } => {
                out.push_str(&format!("{pad}YEET {}\n", expr.source_string()));
            },
            Self::Set { name, value, .. } => {
                out.push_str(&format!("{pad}SET {name} TO {}\n", value.source_string()));
            },
            Self::Modify { op, name, amount, .. } => {
                out.push_str(&format!("{pad}{} {name} BY {}\n",
                                      op.keyword(),
                                      amount.source_string()));
            },
            Self::If { condition,
                       then_body,
                       else_body,
                       .. } => {
                out.push_str(&format!("{pad}IF {} THEN\n", condition.source_string()));
                for statement in then_body {
                    statement.write_source(out, indent + 1);
                }
                if !else_body.is_empty() {
                    out.push_str(&format!("{pad}ELSE\n"));
                    for statement in else_body {
                        statement.write_source(out, indent + 1);
                    }
                }
                out.push_str(&format!("{pad}ENDIF\n"));
            },
            Self::Loop { count, body, .. } => {
                out.push_str(&format!("{pad}LOOP {} TIMES\n", count.source_string()));
                for statement in body {
                    statement.write_source(out, indent + 1);
                }
                out.push_str(&format!("{pad}ENDLOOP\n"));
            },
            Self::Breakout { .. } => out.push_str(&format!("{pad}BREAKOUT\n")),
            Self::Wait { seconds, .. } => {
                out.push_str(&format!("{pad}WAIT {} SECONDS\n", seconds.source_string()));
            },
            Self::Dump { .. } => out.push_str(&format!("{pad}DUMP\n")),
            Self::Stop { .. } => out.push_str(&format!("{pad}STOP\n")),
            Self::Rickroll { .. } => out.push_str(&format!("{pad}RICKROLL\n")),
            Self::Mystery { .. } => out.push_str(&format!("{pad}MYSTERY\n")),
            Self::Oops { .. } => out.push_str(&format!("{pad}OOPS\n")),
            Self::Flip { .. } => out.push_str(&format!("{pad}FLIP\n")),
            Self::Dice { .. } => out.push_str(&format!("{pad}DICE\n")),
            Self::Bruh { .. } => out.push_str(&format!("{pad}BRUH\n")),
            Self::Poggers { .. } => out.push_str(&format!("{pad}POGGERS\n")),
        }
    }
}

/// The root of a parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub body: Vec<Statement>,
}

impl Program {
    /// Renders the whole program as canonical FranzCode source.
    ///
    /// The rendering parses back to a structurally identical tree, which is
    /// what the `--ast` dump prints.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for statement in &self.body {
            statement.write_source(&mut out, 0);
        }
        out
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl std::fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}

/// Represents a short-circuiting logic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicOperator {
    /// Logical conjunction (`AND`)
    And,
    /// Logical disjunction (`OR`)
    Or,
}

impl std::fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "AND",
            Self::Or => "OR",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT over truthiness (e.g. `NOT x`).
    Not,
}

/// Represents the four arithmetic variable-mutation forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MutateOp {
    /// `ADD name BY amount`
    Add,
    /// `SUB name BY amount`
    Sub,
    /// `MUL name BY amount`
    Mul,
    /// `DIV name BY amount`
    Div,
}

impl MutateOp {
    /// The keyword that introduces this mutation form.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
        }
    }

    /// The arithmetic operator this mutation applies.
    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        match self {
            Self::Add => BinaryOperator::Add,
            Self::Sub => BinaryOperator::Sub,
            Self::Mul => BinaryOperator::Mul,
            Self::Div => BinaryOperator::Div,
        }
    }
}
