//! # Preprocessor
//!
//! Sits between the tokenizer and the analyzer:
//!
//! ```text
//! Source Text → Tokenizer → Preprocessor → Analyzer → Evaluator
//! ```
//!
//! The tokenizer keeps whitespace, newlines and comments so that spans stay exact. The
//! analyzer has no use for them, so [`TokenPreprocessor`] filters them out while keeping
//! the remaining [`TokenSpan`]s (and their positions) intact.

use crate::tokenizer::token::TokenSpan;

/// A trait for preprocessing different types of input
pub trait Preprocessor<T, U = T> {
    /// Process the input of type T and return the processed result
    fn process(&self, input: T) -> U;
}

/// Token-specific preprocessor implementation
#[derive(Debug, Default, Clone)]
pub struct TokenPreprocessor {}

impl TokenPreprocessor {
    pub fn new() -> Self {
        Self {}
    }
}

impl Preprocessor<Vec<TokenSpan>> for TokenPreprocessor {
    fn process(&self, input: Vec<TokenSpan>) -> Vec<TokenSpan> {
        input
            .into_iter()
            .filter(|span| {
                !span.token.is_comment() && !span.token.is_whitespace() && !span.token.is_newline()
            })
            .collect()
    }
}
