// calculator.rs

use std::sync::Arc;

use crate::config::{CalculatorConfig, OverflowPolicy};
use crate::error::{CalcError, CalcResult};
use crate::history::History;
use crate::operation::Operation;

/// Integer calculator that reports every successful operation to the
/// currently bound [`History`].
///
/// The calculator only holds a shared handle; whoever created the history
/// keeps theirs and can read it at any time.
pub struct Calculator {
    history: Arc<dyn History>,
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(history: Arc<dyn History>) -> Self {
        Self::with_config(history, CalculatorConfig::default())
    }

    pub fn with_config(history: Arc<dyn History>, config: CalculatorConfig) -> Self {
        Self { history, config }
    }

    pub fn add(&self, a: i64, b: i64) -> CalcResult<i64> {
        self.run(Operation::Add, a, b)
    }

    pub fn subtract(&self, a: i64, b: i64) -> CalcResult<i64> {
        self.run(Operation::Subtract, a, b)
    }

    pub fn multiply(&self, a: i64, b: i64) -> CalcResult<i64> {
        self.run(Operation::Multiply, a, b)
    }

    /// Truncating division. `b == 0` fails and logs nothing.
    pub fn divide(&self, a: i64, b: i64) -> CalcResult<i64> {
        self.run(Operation::Divide, a, b)
    }

    /// Rebinds the calculator; later operations log to `history` only.
    pub fn set_history(&mut self, history: Arc<dyn History>) {
        log::trace!("calculator history rebound");
        self.history = history;
    }

    pub fn history(&self) -> &Arc<dyn History> {
        &self.history
    }

    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    fn run(&self, op: Operation, a: i64, b: i64) -> CalcResult<i64> {
        let result = self.compute(op, a, b)?;
        let entry = op.entry(a, b, result);
        log::debug!("{}", entry);
        self.history.add_entry(&entry);
        Ok(result)
    }

    fn compute(&self, op: Operation, a: i64, b: i64) -> CalcResult<i64> {
        if op == Operation::Divide && b == 0 {
            log::warn!("division by zero: {} / 0", a);
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        let value = match self.config.overflow {
            OverflowPolicy::Checked => {
                let checked = match op {
                    Operation::Add => a.checked_add(b),
                    Operation::Subtract => a.checked_sub(b),
                    Operation::Multiply => a.checked_mul(b),
                    Operation::Divide => a.checked_div(b),
                };
                match checked {
                    Some(v) => v,
                    None => {
                        log::warn!("overflow: {} {} {}", a, op, b);
                        return Err(CalcError::Overflow { operation: op, a, b });
                    }
                }
            }
            OverflowPolicy::Wrapping => match op {
                Operation::Add => a.wrapping_add(b),
                Operation::Subtract => a.wrapping_sub(b),
                Operation::Multiply => a.wrapping_mul(b),
                Operation::Divide => a.wrapping_div(b),
            },
            OverflowPolicy::Saturating => match op {
                Operation::Add => a.saturating_add(b),
                Operation::Subtract => a.saturating_sub(b),
                Operation::Multiply => a.saturating_mul(b),
                Operation::Divide => a.saturating_div(b),
            },
        };
        Ok(value)
    }
}
