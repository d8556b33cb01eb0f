//! # Evaluation
//!
//! Walks a parsed [`Program`](crate::ast::Program) once, in document order, and writes
//! the output of every statement whose conditions hold.
//!
//! ## Evaluator
//! [`Evaluator`](evaluator::Evaluator) owns the traversal. It is consumed by
//! [`evaluate`](evaluator::Evaluator::evaluate), so every compile run starts from a
//! fresh context.
//!
//! ## Evaluation Context
//! [`EvalContext`](context::EvalContext) holds the per-run state: the property map,
//! the binding table, the condition table of the statement under evaluation and its
//! captured output. Each statement goes through
//!
//! ```text
//! Idle → BindingsApplied → ConditionsCollected → OutputCaptured → Evaluated(fire|skip) → Reset
//! ```
//!
//! Reset clears the condition table and the whole property map. The binding table is
//! kept for the rest of the run, so only bindings declared before the first statement
//! completes can ever see a property.

pub mod context;
pub mod evaluator;

use thiserror::Error;

pub use context::{EvalContext, EvalStats};
pub use evaluator::Evaluator;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Invalid pattern `{pattern}` for condition `{name}`: {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Condition `{name}` has no pattern")]
    MissingPattern { name: String },
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type EvalResult<T> = Result<T, EvalError>;
