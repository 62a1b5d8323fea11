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
};

impl Context<'_> {
    /// Evaluates an operator on two strings.
    ///
    /// Comparisons are lexicographic. `-` parses both strings as numbers and
    /// subtracts them.
    pub(crate) fn eval_string_op(op: BinaryOperator,
                                 a: String,
                                 b: &str,
                                 line: usize)
                                 -> EvalResult<Value> {
        use BinaryOperator::{Add, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Sub};

        let value = match op {
            Add => Value::Str(a + b),
            Sub => Value::Number(parse_number(&a, line)? - parse_number(b, line)?),
            Less => Value::Bool(a.as_str() < b),
            Greater => Value::Bool(a.as_str() > b),
            LessEqual => Value::Bool(a.as_str() <= b),
            GreaterEqual => Value::Bool(a.as_str() >= b),
            Equal => Value::Bool(a == b),
            NotEqual => Value::Bool(a != b),
            _ => return Err(incompatible(op, Type::String, Type::String, line)),
        };
        Ok(value)
    }

    /// Evaluates an operator with a string on the left and a number on the
    /// right.
    ///
    /// - `+` appends the number as `print` would render it.
    /// - `*` doubles the string `floor(n)` times, so the result is
    ///   `2^floor(n)` copies of it. A count below one leaves it unchanged.
    /// - `.` yields the character at the index as a one-character string.
    ///
    /// # Example
    /// ```
    /// use ciktor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let doubled = Context::eval_binary(BinaryOperator::Mul, "ab".into(), 3.0.into(), 1).unwrap();
    /// assert_eq!(doubled, Value::from("abababababababab"));
    ///
    /// let second = Context::eval_binary(BinaryOperator::Index, "ab".into(), 1.0.into(), 1).unwrap();
    /// assert_eq!(second, Value::from("b"));
    /// ```
    pub(crate) fn eval_string_number_op(op: BinaryOperator,
                                        a: String,
                                        b: f64,
                                        line: usize)
                                        -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::Str(format!("{a}{b}"))),
            BinaryOperator::Mul => Ok(Value::Str(double_string(a, b, line)?)),
            BinaryOperator::Index => {
                let len = a.chars().count();
                let index = checked_index(b, len, line)?;
                Ok(a.chars()
                    .nth(index)
                    .map_or_else(String::new, String::from)
                    .into())
            },
            _ => Err(incompatible(op, Type::String, Type::Double, line)),
        }
    }
}

/// Parses a string operand of numeric subtraction.
fn parse_number(text: &str, line: usize) -> EvalResult<f64> {
    text.trim()
        .parse()
        .map_err(|_| RuntimeError::InvalidNumber { text: text.to_string(),
                                                   line })
}

/// Doubles `s` `floor(times)` times.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn double_string(s: String, times: f64, line: usize) -> EvalResult<String> {
    let times = times.floor();
    if s.is_empty() || times.is_nan() || times < 1.0 {
        return Ok(s);
    }
    if times >= f64::from(usize::BITS) {
        return Err(RuntimeError::RepetitionOverflow { line });
    }

    let copies = 1_usize << (times as u32);
    let total = s.len()
                 .checked_mul(copies)
                 .ok_or(RuntimeError::RepetitionOverflow { line })?;
    let mut doubled = String::new();
    doubled.try_reserve_exact(total)
           .map_err(|_| RuntimeError::RepetitionOverflow { line })?;
    for _ in 0..copies {
        doubled.push_str(&s);
    }
    Ok(doubled)
}
