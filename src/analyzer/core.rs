//! # Core Parser Definitions

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// A parser takes an input slice and a position and returns either the position after
/// the consumed input together with the parsed value, or a [`ParseError`].
pub trait Parser<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// On success, the new position and the parsed value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Positions are token indices into the preprocessed token stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected EOF: {message} at position {position}, context: {context:?}")]
    UnexpectedEOF {
        message: String,
        position: usize,
        context: Option<String>,
    },
    #[error("Unexpected: expected {expected}, found {parsed} at position {position}, context: {context:?}")]
    Unexpected {
        expected: String,
        parsed: String,
        position: usize,
        context: Option<String>,
    },
    #[error("No alternative matched at position {position}, context: {context:?}")]
    NoAlternative {
        position: usize,
        context: Option<String>,
    },
    #[error("Failure: {message} at position {position}, context: {context:?}")]
    Failure {
        message: String,
        position: usize,
        context: Option<String>,
    },
}

fn push_context(context: Option<String>, ctx: &str) -> Option<String> {
    Some(match context {
        Some(c) => format!("{} -> {}", c, ctx),
        None => ctx.to_string(),
    })
}

impl ParseError {
    pub fn with_context(self, ctx: &str) -> Self {
        match self {
            ParseError::UnexpectedEOF {
                message,
                position,
                context,
            } => ParseError::UnexpectedEOF {
                message,
                position,
                context: push_context(context, ctx),
            },
            ParseError::Unexpected {
                expected,
                parsed,
                position,
                context,
            } => ParseError::Unexpected {
                expected,
                parsed,
                position,
                context: push_context(context, ctx),
            },
            ParseError::NoAlternative { position, context } => ParseError::NoAlternative {
                position,
                context: push_context(context, ctx),
            },
            ParseError::Failure {
                message,
                position,
                context,
            } => ParseError::Failure {
                message,
                position,
                context: push_context(context, ctx),
            },
        }
    }

    pub fn get_position(&self) -> usize {
        match self {
            ParseError::UnexpectedEOF { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
            ParseError::NoAlternative { position, .. } => *position,
            ParseError::Failure { position, .. } => *position,
        }
    }
}
