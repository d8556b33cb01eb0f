use std::collections::HashMap;
use std::io::Write;

use regex::Regex;
use tracing::debug;

use crate::ast::{Binding, OutputBlock, Pattern};
use crate::properties::Properties;

use super::{EvalError, EvalResult};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub statements: usize,
    pub fired: usize,
}

/// Per-run evaluation state.
///
/// Not meant to be reused across runs: the property map is consumed by the first
/// statement and bindings accumulate for the lifetime of the context.
#[derive(Debug)]
pub struct EvalContext {
    properties: Properties,
    bindings: HashMap<String, String>,
    conditions: HashMap<String, Regex>,
    pending_pattern: Option<Pattern>,
    output: Option<String>,
    stats: EvalStats,
}

impl EvalContext {
    pub fn new(properties: Properties) -> Self {
        Self {
            properties,
            bindings: HashMap::new(),
            conditions: HashMap::new(),
            pending_pattern: None,
            output: None,
            stats: EvalStats::default(),
        }
    }

    /// Records `local` as an alias of the property's text. A missing property leaves
    /// the binding undeclared.
    pub fn declare_binding(&mut self, binding: &Binding) {
        match self.properties.get(&binding.property) {
            Some(value) => {
                let value = value.to_string();
                debug!(local = %binding.local, property = %binding.property, %value, "binding declared");
                self.bindings.insert(binding.local.clone(), value);
            }
            None => {
                debug!(local = %binding.local, property = %binding.property, "property not set, binding skipped");
            }
        }
    }

    /// Holds `pattern` until the next condition claims it.
    pub fn set_pattern(&mut self, pattern: &Pattern) {
        self.pending_pattern = Some(pattern.clone());
    }

    /// Stores the pending pattern as the condition on `name`, replacing an earlier
    /// condition on the same name.
    ///
    /// The pattern is compiled here, so a malformed regex fails the run even when the
    /// statement would not have fired.
    pub fn collect_condition(&mut self, name: &str) -> EvalResult<()> {
        let pattern = self
            .pending_pattern
            .take()
            .ok_or_else(|| EvalError::MissingPattern {
                name: name.to_string(),
            })?;
        let regex = full_match(&pattern).map_err(|source| EvalError::InvalidPattern {
            name: name.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;
        self.conditions.insert(name.to_string(), regex);
        Ok(())
    }

    pub fn capture_output(&mut self, block: &OutputBlock) {
        self.output = Some(block.text().to_string());
    }

    /// Decides whether the current statement fires, writes its line if so and resets
    /// the per-statement state. Returns whether the statement fired.
    pub fn complete_statement<W: Write>(&mut self, out: &mut W) -> EvalResult<bool> {
        let fired = self.conditions_hold();
        let output = self.output.take();

        if fired {
            let text = output.as_deref().unwrap_or_default();
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")?;
            self.stats.fired += 1;
        }
        self.stats.statements += 1;

        self.conditions.clear();
        self.pending_pattern = None;
        self.properties.clear();

        Ok(fired)
    }

    fn conditions_hold(&self) -> bool {
        for (name, regex) in &self.conditions {
            let Some(value) = self.bindings.get(name) else {
                debug!(%name, "condition on unbound name");
                return false;
            };
            if !regex.is_match(value) {
                debug!(%name, %value, pattern = %regex, "condition not met");
                return false;
            }
        }
        true
    }

    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }
}

/// Anchors the pattern so the whole value has to match. Literal patterns are not
/// escaped.
fn full_match(pattern: &Pattern) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern.source()))
}
