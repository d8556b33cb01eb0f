use std::io::Write;

use tracing::{debug, info};

use crate::ast::{Binding, Item, Program, Statement};
use crate::properties::Properties;

use super::{context::EvalContext, EvalResult, EvalStats};

pub struct Evaluator {
    context: EvalContext,
}

impl Evaluator {
    pub fn new(properties: Properties) -> Self {
        Self {
            context: EvalContext::new(properties),
        }
    }

    /// Top level entry point: evaluates every item in document order.
    ///
    /// The first error aborts the walk. Lines written for earlier statements stay in
    /// `out`.
    #[tracing::instrument(level = "debug", skip_all, fields(items = program.items.len()))]
    pub fn evaluate<W: Write>(mut self, program: &Program, out: &mut W) -> EvalResult<EvalStats> {
        for item in &program.items {
            match item {
                Item::Binding(binding) => self.eval_binding(binding),
                Item::Statement(statement) => self.eval_statement(statement, out)?,
            }
        }

        let stats = self.context.stats();
        info!(
            statements = stats.statements,
            fired = stats.fired,
            "evaluation finished"
        );
        Ok(stats)
    }

    fn eval_binding(&mut self, binding: &Binding) {
        self.context.declare_binding(binding);
    }

    fn eval_statement<W: Write>(&mut self, statement: &Statement, out: &mut W) -> EvalResult<()> {
        for condition in &statement.conditions {
            self.context.set_pattern(&condition.pattern);
            self.context.collect_condition(&condition.name)?;
        }
        self.context.capture_output(&statement.output);

        let fired = self.context.complete_statement(out)?;
        debug!(fired, output = statement.output.text(), "statement evaluated");
        Ok(())
    }
}
