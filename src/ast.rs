use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings and booleans. Array literals are expressions of
/// their own because their elements are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number literal. Only non-negative integers are
    /// lexable, but every number is stored as `f64`.
    Number(f64),
    /// A string literal, stored verbatim without escape processing.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// The declared type of a variable, parameter or function return.
///
/// Every runtime value has exactly one of these tags, and declarations compare
/// the tag of the evaluated value against the declared one without any
/// coercion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `void`
    Void,
    /// `bool`
    Bool,
    /// `double` or `int`; both spell the same type.
    Double,
    /// `string`
    String,
    /// `array`
    Array,
    /// Reserved. No keyword produces it and no value has it.
    File,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::File => "file",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the line it started on so that runtime errors can be
/// reported against the source. Expressions always produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression, e.g. `[1, "a", [2]]`.
    ArrayLiteral {
        /// Elements of the array, evaluated left to right.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Logical negation, `!expr`.
    Not {
        /// The operand, which must evaluate to a boolean.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation, including indexing with `.`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
    /// Call of a user-defined function, e.g. `add(1, 2)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `input()`: reads one line from the interpreter's input.
    Input {
        /// Line number in the source code.
        line: usize,
    },
    /// `exit()`: aborts the program.
    Exit {
        /// Line number in the source code.
        line: usize,
    },
    /// Postfix size query, `expr?`.
    Size {
        /// The string or array whose length is taken.
        expr: Box<Self>,
        /// Line number of the `?` token.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ciktor::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::Not { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Input { line }
            | Self::Exit { line }
            | Self::Size { line, .. } => *line,
        }
    }
}

/// A single `type name` entry in a function's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The declared parameter type.
    pub ty:   Type,
    /// The parameter name.
    pub name: String,
}

/// Represents a user-defined function definition.
///
/// Created by `func name<type a, type b> returnType { ... }`. The definition is
/// owned by the AST; the evaluation context only keeps references to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// The typed parameter list.
    pub params:      Vec<Param>,
    /// The declared return type.
    pub return_type: Type,
    /// The statements executed when the function is called.
    pub body:        Vec<Statement>,
    /// Line number in the source code.
    pub line:        usize,
}

/// Represents a statement.
///
/// Statements never produce a value; they either complete normally or, for
/// `return`, hand a value back to the enclosing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print(expr)` or `print()`.
    Print {
        /// The value to print. `None` prints a bare newline.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `throw(expr)`: prints the value highlighted and aborts.
    Throw {
        /// The value to report.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if cond { ... } else { ... }`. An `else if` chain is stored as an
    /// else branch holding a single nested `If`.
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise. May be empty.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `for init cond { ... }`.
    For {
        /// Statement executed once before the loop.
        init:      Box<Self>,
        /// Condition checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A typed variable declaration, `type name = expr`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The declared type.
        ty:    Type,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reassignment of an existing variable, `name = expr`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// `return` or `return expr`.
    Return {
        /// The returned value. `None` returns void.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An expression used as a statement. It must evaluate to void.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Function(def) => def.line,
            Self::Print { line, .. }
            | Self::Throw { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Return { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Which operand types an operator accepts is decided at run time from the
/// tags of both evaluated operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction or array truncation (`-`)
    Sub,
    /// Multiplication or repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Truncating remainder (`%`)
    Mod,
    /// Truncating quotient (`//`)
    IntDiv,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// String or array indexing (`.`)
    Index,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Index, IntDiv, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            IntDiv => "//",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
            Index => ".",
        };
        write!(f, "{operator}")
    }
}
