use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_index,
};

impl Context<'_> {
    /// Looks up a variable and returns a copy of its value.
    pub(crate) fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates array literal elements left to right.
    pub(crate) fn eval_array_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::Array(values))
    }
}

/// Validates an index against a container length.
///
/// The index must be a non-negative integer strictly below `len`.
///
/// # Example
/// ```
/// use ciktor::{error::RuntimeError, interpreter::evaluator::utils::checked_index};
///
/// assert_eq!(checked_index(1.0, 2, 1), Ok(1));
/// assert_eq!(checked_index(2.0, 2, 7),
///            Err(RuntimeError::IndexOutOfRange { index: 2.0,
///                                                len:   2,
///                                                line:  7, }));
/// assert!(checked_index(0.5, 2, 1).is_err());
/// ```
pub fn checked_index(index: f64, len: usize, line: usize) -> EvalResult<usize> {
    f64_to_index(index).filter(|i| *i < len)
                       .ok_or(RuntimeError::IndexOutOfRange { index, len, line })
}
