use crate::{
    ast::{BinaryOperator, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::incompatible,
            core::{Context, EvalResult},
            utils::checked_index,
        },
        value::core::Value,
    },
    util::num::f64_to_index,
};

impl Context<'_> {
    /// Evaluates an operator on two arrays. Only `+` (concatenation) is
    /// defined.
    pub(crate) fn eval_array_op(op: BinaryOperator,
                                mut a: Vec<Value>,
                                b: Vec<Value>,
                                line: usize)
                                -> EvalResult<Value> {
        if op != BinaryOperator::Add {
            return Err(incompatible(op, Type::Array, Type::Array, line));
        }
        a.extend(b);
        Ok(Value::Array(a))
    }

    /// Evaluates an operator with an array on the left and a number on the
    /// right.
    ///
    /// - `*` concatenates `n` copies of the array; `n` must be a
    ///   non-negative integer.
    /// - `-` removes `n` elements from the end; `n` must be an integer
    ///   between zero and the length.
    /// - `.` yields a copy of the element at the index.
    ///
    /// # Example
    /// ```
    /// use ciktor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let array = Value::from(vec![1.0.into(), 2.0.into(), 3.0.into()]);
    /// let result = Context::eval_binary(BinaryOperator::Sub, array, 2.0.into(), 1).unwrap();
    /// assert_eq!(result.to_string(), "[1]");
    /// ```
    pub(crate) fn eval_array_number_op(op: BinaryOperator,
                                       mut a: Vec<Value>,
                                       b: f64,
                                       line: usize)
                                       -> EvalResult<Value> {
        let invalid_count = |len| RuntimeError::InvalidCount { op,
                                                               count: b,
                                                               len,
                                                               line };
        match op {
            BinaryOperator::Mul => {
                let count = f64_to_index(b).ok_or_else(|| invalid_count(a.len()))?;
                let total = a.len()
                             .checked_mul(count)
                             .ok_or(RuntimeError::RepetitionOverflow { line })?;
                let mut repeated = Vec::new();
                repeated.try_reserve_exact(total)
                        .map_err(|_| RuntimeError::RepetitionOverflow { line })?;
                repeated.extend(a.iter().cycle().take(total).cloned());
                Ok(Value::Array(repeated))
            },
            BinaryOperator::Sub => {
                let count = f64_to_index(b).filter(|count| *count <= a.len())
                                           .ok_or_else(|| invalid_count(a.len()))?;
                a.truncate(a.len() - count);
                Ok(Value::Array(a))
            },
            BinaryOperator::Index => {
                let index = checked_index(b, a.len(), line)?;
                Ok(a.swap_remove(index))
            },
            _ => Err(incompatible(op, Type::Array, Type::Double, line)),
        }
    }
}
