use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::usize_to_f64,
};

impl Context<'_> {
    /// Evaluates logical negation. The operand must be a boolean.
    pub(crate) fn eval_not(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Ok(Value::Bool(!value.as_bool(line)?))
    }

    /// Evaluates the postfix size query `expr?`.
    pub(crate) fn eval_size(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::size_of(&value, line)
    }

    /// Returns the length of a string (in characters) or an array.
    ///
    /// # Example
    /// ```
    /// use ciktor::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let size = Context::size_of(&Value::from("héllo"), 1).unwrap();
    /// assert_eq!(size, Value::Number(5.0));
    ///
    /// assert!(Context::size_of(&Value::Bool(true), 1).is_err());
    /// ```
    pub fn size_of(value: &Value, line: usize) -> EvalResult<Value> {
        match value {
            Value::Str(s) => Ok(Value::Number(usize_to_f64(s.chars().count()))),
            Value::Array(a) => Ok(Value::Number(usize_to_f64(a.len()))),
            _ => Err(RuntimeError::NotSized { found: value.type_of(),
                                              line }),
        }
    }
}
