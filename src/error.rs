use thiserror::Error;

use crate::analyzer::ParseError;
use crate::eval::EvalError;
use crate::properties::PropertiesError;
use crate::tokenizer::token::{Span, TokenizerError};

#[derive(Error, Debug)]
pub enum EmpireError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizerError),
    #[error("Parse error: {source}{}", .span.as_ref().map(|s| format!(" ({})", s)).unwrap_or_default())]
    Parse {
        source: ParseError,
        span: Option<Span>,
    },
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
    #[error("Properties error: {0}")]
    Properties(#[from] PropertiesError),
}

pub type EmpireResult<T> = Result<T, EmpireError>;

impl From<ParseError> for EmpireError {
    fn from(source: ParseError) -> Self {
        EmpireError::Parse { source, span: None }
    }
}
