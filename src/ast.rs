/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions exclusively own their sub-expressions, so a parsed tree has no
/// sharing and no cycles. Each variant records the source line it started on
/// for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `2.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. Only meaningful as a `get_stat` argument.
    Str {
        /// The decoded text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable, or to a sample when passed to `get_stat`.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic or comparison operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Built-in function call expression (e.g. `uniform(0, 1)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use probscript::ast::Expr;
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
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks do not open a scope; all variables live in one flat namespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in execution order.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expr`
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr`
    Print {
        /// The expression whose value is written out.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `collect sample expr`
    Collect {
        /// The sample collection to append to.
        sample: String,
        /// The value to append.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if condition { ... }`
    If {
        /// The body runs when this evaluates to non-zero.
        condition: Expr,
        /// The body block.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `repeat count { ... }`
    Repeat {
        /// Number of iterations, truncated toward zero.
        count: Expr,
        /// The body block.
        body:  Block,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare `{ ... }`.
    Block(Block),
}

impl Statement {
    /// Short name of the statement kind, used in trace output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Assign { .. } => "assign",
            Self::Print { .. } => "print",
            Self::Collect { .. } => "collect",
            Self::If { .. } => "if",
            Self::Repeat { .. } => "repeat",
            Self::Block(_) => "block",
        }
    }
}

/// A parsed script: its top-level statements in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Comparisons produce `1` for true and `0` for false.
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
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Greater => ">",
            Less => "<",
            Equal => "==",
            NotEqual => "!=",
            GreaterEqual => ">=",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}
