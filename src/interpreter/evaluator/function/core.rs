use log::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

/// Maximum number of nested user function calls.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Remaining stack below which a call moves onto a fresh segment.
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each stack segment allocated for deep recursion.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

impl<'a> Context<'a> {
    /// Registers a function, replacing any earlier one of the same name.
    ///
    /// The body is not executed.
    pub(crate) fn declare_function(&mut self, def: &'a FunctionDef) {
        debug!("line {}: declaring function '{}' with {} parameter(s)",
               def.line,
               def.name,
               def.params.len());
        self.functions.insert(def.name.as_str(), def);
    }

    /// Evaluates a call of a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's variables and
    /// each one is checked against its parameter type. The variable map is
    /// then snapshotted, the parameters are bound over it and the body runs.
    /// The snapshot is restored however the body completes, so locals never
    /// leak out, while variables that already existed stay visible inside.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Argument or return value of the wrong type.
    /// - A non-void function that ends without `return`.
    /// - More than [`MAX_CALL_DEPTH`] nested calls.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_function_call_inner(name, arguments, line)
        })
    }

    fn eval_function_call_inner(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                line: usize)
                                -> EvalResult<Value> {
        let def = self.functions
                      .get(name)
                      .copied()
                      .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                     line })?;

        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: def.params.len(),
                                                             found:    arguments.len(),
                                                             line, });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for (param, argument) in def.params.iter().zip(arguments) {
            let value = self.eval(argument)?;
            let found = value.type_of();
            if found != param.ty {
                return Err(RuntimeError::ArgumentTypeMismatch { param: param.name.clone(),
                                                                expected: param.ty,
                                                                found,
                                                                line: argument.line_number() });
            }
            values.push(value);
        }

        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH,
                                                      line });
        }

        trace!("line {line}: calling '{name}' at depth {}", self.depth + 1);
        let saved = self.variables.clone();
        for (param, value) in def.params.iter().zip(values) {
            self.variables.insert(param.name.clone(), value);
        }
        self.depth += 1;
        let flow = self.eval_statements(&def.body);
        self.depth -= 1;
        self.variables = saved;

        let value = match flow? {
            Flow::Return { value, .. } => value,
            Flow::Normal if def.return_type == Type::Void => Value::Void,
            Flow::Normal => {
                return Err(RuntimeError::MissingReturn { name: name.to_string(),
                                                         line });
            },
        };

        let found = value.type_of();
        if found != def.return_type {
            return Err(RuntimeError::ReturnTypeMismatch { name: name.to_string(),
                                                          expected: def.return_type,
                                                          found,
                                                          line });
        }

        Ok(value)
    }
}
