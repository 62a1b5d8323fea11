use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// ANSI sequence that starts the bold red highlight used by `throw`.
pub const THROW_STYLE: &str = "\x1b[1;31m";
/// ANSI sequence that resets the terminal style.
pub const RESET_STYLE: &str = "\x1b[0m";

impl Context<'_> {
    /// Writes a value to the output without a trailing newline.
    ///
    /// `print()` without an argument writes a single newline instead.
    pub(crate) fn print_value(&mut self, value: Option<&Value>, line: usize) -> EvalResult<()> {
        let result = match value {
            Some(value) => write!(self.output, "{value}"),
            None => writeln!(self.output),
        };
        result.map_err(|e| RuntimeError::io(&e, line))
    }

    /// Writes a highlighted value and builds the error that aborts the
    /// program.
    ///
    /// The output is flushed so the report is visible before the process
    /// exits. A failure to write is reported instead of the throw.
    pub(crate) fn throw_value(&mut self, value: &Value, line: usize) -> RuntimeError {
        if let Err(e) = writeln!(self.output, "{THROW_STYLE}{value}{RESET_STYLE}")
            .and_then(|()| self.output.flush())
        {
            return RuntimeError::io(&e, line);
        }
        RuntimeError::Thrown { value: value.to_string(),
                               line }
    }

    /// Reads one line from the input, without its line terminator.
    ///
    /// At the end of input the result is an empty string.
    pub(crate) fn eval_input(&mut self, line: usize) -> EvalResult<Value> {
        self.output.flush().map_err(|e| RuntimeError::io(&e, line))?;

        let mut text = String::new();
        self.input
            .read_line(&mut text)
            .map_err(|e| RuntimeError::io(&e, line))?;

        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(Value::Str(text))
    }
}
