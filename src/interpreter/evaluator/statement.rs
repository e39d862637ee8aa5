use std::io::Write;

use rand::RngCore;
use tracing::{debug, trace};

use crate::{
    ast::{Block, Statement},
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::repeat_count,
};

impl<R: RngCore> Interpreter<R> {
    /// Executes a single statement.
    ///
    /// - `Assign` stores the value, creating or overwriting the variable.
    /// - `Print` writes the value and a newline to `out`.
    /// - `Collect` appends to the named sample, creating it on first use.
    /// - `If` runs its body when the condition is non-zero.
    /// - `Repeat` runs its body `N` times, where `N` is the truncated,
    ///   non-negative count.
    /// - `Block` runs its statements in the same flat namespace.
    ///
    /// # Errors
    /// Propagates any evaluation failure, a negative repeat count, or a
    /// failure to write output.
    pub fn execute_statement(&mut self,
                             statement: &Statement,
                             out: &mut dyn Write)
                             -> EvalResult<()> {
        trace!(kind = statement.kind_name(), "executing statement");

        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.environment.set_variable(name, value);
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                writeln!(out, "{value}")?;
            },
            Statement::Collect { sample, value, .. } => {
                let value = self.eval(value)?;
                self.environment.collect(sample, value);
            },
            Statement::If { condition, body, .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute_block(body, out)?;
                }
            },
            Statement::Repeat { count, body, line } => {
                let iterations = repeat_count(self.eval(count)?.as_number(), *line)?;
                debug!(iterations, line, "repeat");

                for _ in 0..iterations {
                    self.execute_block(body, out)?;
                }
            },
            Statement::Block(block) => self.execute_block(block, out)?,
        }

        Ok(())
    }

    /// Executes the statements of a block in order.
    ///
    /// Blocks open no scope; assignments inside are visible afterwards.
    pub fn execute_block(&mut self, block: &Block, out: &mut dyn Write) -> EvalResult<()> {
        for statement in &block.statements {
            self.execute_statement(statement, out)?;
        }
        Ok(())
    }
}
