use std::fmt;

use crate::{
    ast::{LiteralValue, Type},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Values are plain data. Assigning, binding or indexing copies them, so two
/// variables never share storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The unit value of statements and void functions.
    Void,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. Used as the condition of
    /// `if` and `for`, where it is the only accepted type.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// An ordered sequence of values, possibly nested and of mixed types.
    Array(Vec<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use ciktor::{ast::Type, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::from(1.0).type_of(), Type::Double);
    /// assert_eq!(Value::from(vec![Value::Void]).type_of(), Type::Array);
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> Type {
        match self {
            Self::Void => Type::Void,
            Self::Bool(_) => Type::Bool,
            Self::Number(_) => Type::Double,
            Self::Str(_) => Type::String,
            Self::Array(_) => Type::Array,
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and the operand of `!`.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { expected: Type::Bool,
                                               found: self.type_of(),
                                               line }),
        }
    }

    /// Returns `true` if the value is [`Value::Void`].
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(-2.0).to_string(), "-2");
    }

    #[test]
    fn arrays_render_recursively() {
        let value = Value::from(vec![1.0.into(),
                                     "a".into(),
                                     vec![true.into(), Value::Void].into()]);
        assert_eq!(value.to_string(), "[1, a, [true, void]]");
        assert_eq!(Value::Array(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn strings_render_raw() {
        assert_eq!(Value::from("say \"hi\"").to_string(), "say \"hi\"");
    }

    #[test]
    fn as_bool_reports_found_type() {
        assert_eq!(Value::from(true).as_bool(1), Ok(true));
        assert_eq!(Value::from("x").as_bool(4),
                   Err(RuntimeError::TypeError { expected: Type::Bool,
                                                 found:    Type::String,
                                                 line:     4, }));
    }

    #[test]
    fn literals_convert_to_values() {
        assert_eq!(Value::from(&LiteralValue::Number(7.0)), Value::Number(7.0));
        assert_eq!(Value::from(&LiteralValue::from("s")), Value::Str("s".to_string()));
        assert_eq!(Value::from(&LiteralValue::Bool(false)), Value::Bool(false));
    }
}
