use crate::{
    ast::{BinaryOperator, Expr, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates both operands, left first, and applies the operator.
    ///
    /// There is no short-circuiting: `&&` and `||` evaluate their right side
    /// even when the left side already decides the result.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, left, right, line)
    }

    /// Applies a binary operator to two evaluated values.
    ///
    /// The rule is picked by the pair of runtime types:
    /// - number and number: arithmetic and comparisons,
    /// - string and string: concatenation, comparisons and numeric `-`,
    /// - string and number: appending, doubling `*` and indexing,
    /// - bool and bool: equality and the logical operators,
    /// - array and array: concatenation,
    /// - array and number: repetition, truncation and indexing.
    ///
    /// Every other combination is an `IncompatibleOperands` error.
    ///
    /// # Example
    /// ```
    /// use ciktor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, Value::from("n = "), Value::from(4.0), 1);
    /// assert_eq!(result.unwrap(), Value::from("n = 4"));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, Value::from(true), Value::from(1.0), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use Value::{Array, Bool, Number, Str};

        match (left, right) {
            (Number(a), Number(b)) => Self::eval_number_op(op, a, b, line),
            (Str(a), Str(b)) => Self::eval_string_op(op, a, &b, line),
            (Str(a), Number(b)) => Self::eval_string_number_op(op, a, b, line),
            (Bool(a), Bool(b)) => Self::eval_logic(op, a, b, line),
            (Array(a), Array(b)) => Self::eval_array_op(op, a, b, line),
            (Array(a), Number(b)) => Self::eval_array_number_op(op, a, b, line),
            (left, right) => Err(incompatible(op, left.type_of(), right.type_of(), line)),
        }
    }
}

/// Builds the error for an operator that has no rule for the operand types.
pub(crate) const fn incompatible(op: BinaryOperator,
                                 left: Type,
                                 right: Type,
                                 line: usize)
                                 -> RuntimeError {
    RuntimeError::IncompatibleOperands { op,
                                         left,
                                         right,
                                         line }
}
