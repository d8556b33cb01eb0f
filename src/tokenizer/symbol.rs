//! # Symbol Token Handling
//!
//! The rule language only needs a handful of structural symbols: parentheses around the
//! condition list, commas between conditions and `=` for bindings and conditions.
//! Braces are not symbols here; an output block is lexed as a whole by
//! [`literal`](super::literal).

use strum_macros::{AsRefStr, Display, EnumString};

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    error::context,
};

use super::token::{ParserResult, Token};

/// Structural delimiters of the rule language.
#[derive(Debug, Clone, PartialEq, EnumString, Display, AsRefStr)]
pub enum Delimiter {
    /// Opens a condition list (`(`)
    #[strum(serialize = "(")]
    OpenParen,
    /// Closes a condition list (`)`)
    #[strum(serialize = ")")]
    CloseParen,
    /// Separates conditions (`,`)
    #[strum(serialize = ",")]
    Comma,
    /// Binds a name to a property, or a name to a pattern (`=`)
    #[strum(serialize = "=")]
    Equal,
}

/// Parses a delimiter token from the input string.
///
/// # Examples
///
/// ```
/// # use empire::tokenizer::symbol::{parse_delimiter, Delimiter};
/// # use empire::tokenizer::token::Token;
/// let (rest, token) = parse_delimiter("(a=b)").unwrap();
/// assert_eq!(token, Token::Delimiter(Delimiter::OpenParen));
/// assert_eq!(rest, "a=b)");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenParen, tag("(")),
                value(Delimiter::CloseParen, tag(")")),
                value(Delimiter::Comma, tag(",")),
                value(Delimiter::Equal, tag("=")),
            )),
            Token::Delimiter,
        ),
    )(input)
}
