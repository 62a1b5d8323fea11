use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use log::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef, Statement, Type},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement completed.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` was executed; the enclosing call receives `value`.
    Return {
        /// The returned value, `Value::Void` for a bare `return`.
        value: Value,
        /// Line of the `return` statement.
        line:  usize,
    },
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: every variable binding, the
/// declared functions and the streams used by `print`, `throw` and `input()`.
///
/// ## Usage
///
/// `Context` is created once per program run and borrows the program's AST
/// for `'a`; function definitions are stored as references into it.
///
/// ```
/// use std::io;
///
/// use ciktor::interpreter::evaluator::core::Context;
///
/// let program = ciktor::parse("double x = 2\nprint(x * 3)").unwrap();
/// let mut input = io::empty();
/// let mut output = Vec::new();
///
/// let mut context = Context::new(&mut input, &mut output);
/// context.eval_program(&program).unwrap();
/// assert_eq!(context.variables["x"].to_string(), "2");
///
/// drop(context);
/// assert_eq!(output, b"6");
/// ```
pub struct Context<'a> {
    /// All live variables. Calls snapshot and restore this map.
    pub variables: HashMap<String, Value>,
    /// Declared functions by name. Redeclaring a name replaces the entry.
    pub functions: HashMap<&'a str, &'a FunctionDef>,
    pub(crate) input:  &'a mut dyn BufRead,
    pub(crate) output: &'a mut dyn Write,
    /// Number of user function calls currently running.
    pub(crate) depth:  usize,
}

impl<'a> Context<'a> {
    /// Creates a new evaluation context with no variables and no functions.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               input,
               output,
               depth: 0 }
    }

    /// Runs a whole program.
    ///
    /// A `return` that reaches the top level is an error.
    pub fn eval_program(&mut self, program: &'a [Statement]) -> EvalResult<()> {
        debug!("running {} top-level statements", program.len());
        match self.eval_statements(program)? {
            Flow::Normal => Ok(()),
            Flow::Return { line, .. } => Err(RuntimeError::ReturnOutsideFunction { line }),
        }
    }

    /// Runs a statement list in order.
    ///
    /// Stops at the first error or the first `return`, which is handed back
    /// to the caller.
    pub fn eval_statements(&mut self, statements: &'a [Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let flow @ Flow::Return { .. } = self.eval_statement(statement)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right, and every expression yields a value;
    /// void function calls yield `Value::Void`.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Not { expr, line } => self.eval_not(expr, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Input { line } => self.eval_input(*line),
            Expr::Exit { line } => Err(RuntimeError::Exit { line: *line }),
            Expr::Size { expr, line } => self.eval_size(expr, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles output, control flow, declarations, assignments, function
    /// definitions, `return` and expression statements. Expression
    /// statements must evaluate to void.
    pub fn eval_statement(&mut self, statement: &'a Statement) -> EvalResult<Flow> {
        trace!("line {}: {statement:?}", statement.line_number());
        match statement {
            Statement::Print { value, line } => {
                let value = value.as_ref().map(|expr| self.eval(expr)).transpose()?;
                self.print_value(value.as_ref(), *line)?;
                Ok(Flow::Normal)
            },
            Statement::Throw { value, line } => {
                let value = self.eval(value)?;
                Err(self.throw_value(&value, *line))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch),
            Statement::For { init,
                             condition,
                             body,
                             .. } => self.eval_for(init, condition, body),
            Statement::VariableDeclaration { name,
                                             ty,
                                             value,
                                             line, } => {
                let value = self.eval(value)?;
                let found = value.type_of();
                if found != *ty {
                    return Err(RuntimeError::DeclarationTypeMismatch { name: name.clone(),
                                                                       expected: *ty,
                                                                       found,
                                                                       line: *line });
                }

                self.variables.insert(name.clone(), value);
                Ok(Flow::Normal)
            },
            Statement::Assignment { name, value, line } => {
                let expected = self.variable_type(name, *line)?;
                let value = self.eval(value)?;
                let found = value.type_of();
                if found != expected {
                    return Err(RuntimeError::AssignmentTypeMismatch { name: name.clone(),
                                                                      expected,
                                                                      found,
                                                                      line: *line });
                }

                self.variables.insert(name.clone(), value);
                Ok(Flow::Normal)
            },
            Statement::Function(def) => {
                self.declare_function(def);
                Ok(Flow::Normal)
            },
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Void,
                };
                Ok(Flow::Return { value,
                                  line: *line })
            },
            Statement::Expression { expr, line } => {
                let value = self.eval(expr)?;
                if !value.is_void() {
                    return Err(RuntimeError::StatementNotVoid { found: value.type_of(),
                                                                line:  *line, });
                }
                Ok(Flow::Normal)
            },
        }
    }

    fn variable_type(&self, name: &str, line: usize) -> EvalResult<Type> {
        self.variables
            .get(name)
            .map(Value::type_of)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
