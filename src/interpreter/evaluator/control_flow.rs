use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl<'a> Context<'a> {
    /// Evaluates an `if` statement.
    ///
    /// The condition must evaluate to a boolean. Exactly one of the two
    /// branches runs; a `return` inside it propagates to the caller.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          then_branch: &'a [Statement],
                          else_branch: &'a [Statement])
                          -> EvalResult<Flow> {
        if self.eval_condition(condition)? {
            self.eval_statements(then_branch)
        } else {
            self.eval_statements(else_branch)
        }
    }

    /// Evaluates a `for` loop.
    ///
    /// The init statement runs once. Then the condition is checked before
    /// every iteration and the body runs while it holds. The loop has no
    /// increment clause; the body is responsible for making progress.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use ciktor::interpreter::evaluator::core::Context;
    ///
    /// let program = ciktor::parse("for double i = 0 i < 3 { print(i); i = i + 1; }").unwrap();
    /// let mut input = io::empty();
    /// let mut output = Vec::new();
    ///
    /// Context::new(&mut input, &mut output).eval_program(&program).unwrap();
    /// assert_eq!(output, b"012");
    /// ```
    pub(crate) fn eval_for(&mut self,
                           init: &'a Statement,
                           condition: &Expr,
                           body: &'a [Statement])
                           -> EvalResult<Flow> {
        if let flow @ Flow::Return { .. } = self.eval_statement(init)? {
            return Ok(flow);
        }

        while self.eval_condition(condition)? {
            if let flow @ Flow::Return { .. } = self.eval_statements(body)? {
                return Ok(flow);
            }
        }

        Ok(Flow::Normal)
    }

    fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        self.eval(condition)?.as_bool(condition.line_number())
    }
}
