//! # Whitespace Token Handling
//!
//! Spaces and tabs become [`Token::Whitespace`], line breaks (`\n` and `\r\n`) become
//! [`Token::Newline`]. Both are preserved so that token positions stay exact; the
//! preprocessor strips them before parsing.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::map,
    error::context,
};

use super::token::{ParserResult, Token};

/// Parses a run of spaces and tabs.
///
/// # Examples
///
/// ```
/// # use empire::tokenizer::whitespace::parse_whitespace;
/// # use empire::tokenizer::token::Token;
/// let (rest, token) = parse_whitespace("   bind").unwrap();
/// assert_eq!(token, Token::Whitespace("   ".to_string()));
/// assert_eq!(rest, "bind");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<Token> {
    context(
        "whitespace expected",
        map(take_while1(|c| c == ' ' || c == '\t'), |ws: &str| {
            Token::Whitespace(ws.to_string())
        }),
    )(input)
}

/// Parses a Unix-style (`\n`) or Windows-style (`\r\n`) line ending.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_newline(input: &str) -> ParserResult<Token> {
    context(
        "newline expected",
        map(alt((tag("\r\n"), tag("\n"))), |_| Token::Newline),
    )(input)
}
