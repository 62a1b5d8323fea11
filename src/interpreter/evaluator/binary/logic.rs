use crate::{
    ast::{BinaryOperator, Type},
    interpreter::{
        evaluator::{
            binary::core::incompatible,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an operator on two booleans.
    ///
    /// Supported operators are logical AND, logical OR, equality and
    /// inequality.
    ///
    /// # Example
    /// ```
    /// use ciktor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, false, true, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator, a: bool, b: bool, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{And, Equal, NotEqual, Or};

        match op {
            And => Ok(Value::Bool(a && b)),
            Or => Ok(Value::Bool(a || b)),
            Equal => Ok(Value::Bool(a == b)),
            NotEqual => Ok(Value::Bool(a != b)),
            _ => Err(incompatible(op, Type::Bool, Type::Bool, line)),
        }
    }
}
