use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    combinator::map,
    error::context,
    sequence::{delimited, preceded},
};

use super::token::{CommentType, ParserResult, Token};

#[tracing::instrument(level = "debug", skip(input))]
fn parse_line_comment(input: &str) -> ParserResult<Token> {
    context(
        "line comment",
        map(
            preceded(tag("//"), take_while(|c| c != '\n' && c != '\r')),
            |content: &str| Token::Comment {
                content: content.trim().to_string(),
                comment_type: CommentType::Line,
            },
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_block_comment(input: &str) -> ParserResult<Token> {
    context(
        "block comment",
        map(
            delimited(tag("/*"), take_until("*/"), tag("*/")),
            |content: &str| Token::Comment {
                content: content.to_string(),
                comment_type: CommentType::Block,
            },
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<Token> {
    context("comment", alt((parse_block_comment, parse_line_comment)))(input)
}
