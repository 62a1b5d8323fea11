use crate::{
    ast::{BinaryOperator, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::incompatible,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Context<'_> {
    /// Evaluates an operator on two numbers.
    ///
    /// `/` follows IEEE 754, so dividing by zero yields an infinity or NaN.
    /// `%` truncates both operands to integers first and `//` truncates the
    /// quotient; both fail on a zero divisor.
    ///
    /// # Example
    /// ```
    /// use ciktor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let rem = Context::eval_number_op(BinaryOperator::Mod, 7.9, 2.0, 1).unwrap();
    /// assert_eq!(rem, Value::Number(1.0));
    ///
    /// let quot = Context::eval_number_op(BinaryOperator::IntDiv, -7.0, 2.0, 1).unwrap();
    /// assert_eq!(quot, Value::Number(-3.0));
    /// ```
    pub fn eval_number_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Index, IntDiv, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };

        let value = match op {
            Add => Value::Number(a + b),
            Sub => Value::Number(a - b),
            Mul => Value::Number(a * b),
            Div => Value::Number(a / b),
            Mod => Value::Number(truncated_rem(a, b, line)?),
            IntDiv => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Value::Number((a / b).trunc())
            },
            Less => Value::Bool(a < b),
            Greater => Value::Bool(a > b),
            LessEqual => Value::Bool(a <= b),
            GreaterEqual => Value::Bool(a >= b),
            #[allow(clippy::float_cmp)]
            Equal => Value::Bool(a == b),
            #[allow(clippy::float_cmp)]
            NotEqual => Value::Bool(a != b),
            And | Or | Index => return Err(incompatible(op, Type::Double, Type::Double, line)),
        };
        Ok(value)
    }
}

fn truncated_rem(a: f64, b: f64, line: usize) -> EvalResult<f64> {
    let to_integer = |value: f64| {
        f64_to_i64_truncated(value).ok_or(RuntimeError::IntegerOutOfRange { value, line })
    };
    let (a, b) = (to_integer(a)?, to_integer(b)?);
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(i64_to_f64(a.wrapping_rem(b)))
}
