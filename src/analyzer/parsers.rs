//! Grammar of the rule language, expressed with the analyzer combinators.

use super::{core::*, prelude::*};
use crate::ast;
use crate::tokenizer::{
    keyword::Keyword,
    literal::Literal,
    symbol::Delimiter,
    token::{Span, Token, TokenSpan},
};

fn delimiter(d: Delimiter) -> impl Parser<Token, ()> {
    as_unit(equal(Token::Delimiter(d)))
}

pub fn parse_identifier() -> impl Parser<Token, String> {
    satisfy("identifier", |token: &Token| match token {
        Token::Identifier(s) => Some(s.clone()),
        _ => None,
    })
}

/// A bare identifier is a literal pattern, `~/.../` a regex pattern.
pub fn parse_pattern() -> impl Parser<Token, ast::Pattern> {
    satisfy("identifier or regex literal", |token: &Token| match token {
        Token::Identifier(s) => Some(ast::Pattern::Literal(s.clone())),
        Token::Literal(Literal::Regex(re)) => Some(ast::Pattern::Regex(re.clone())),
        _ => None,
    })
}

pub fn parse_output_block() -> impl Parser<Token, ast::OutputBlock> {
    satisfy("output block", |token: &Token| match token {
        Token::Literal(Literal::OutputBlock(raw)) => Some(ast::OutputBlock::new(raw.clone())),
        _ => None,
    })
}

pub fn parse_binding() -> impl Parser<Token, ast::Binding> {
    with_context(
        map(
            preceded(
                equal(Token::Keyword(Keyword::Bind)),
                tuple3(
                    parse_identifier(),
                    delimiter(Delimiter::Equal),
                    parse_identifier(),
                ),
            ),
            |(local, _, property): (String, (), String)| ast::Binding { local, property },
        ),
        "binding",
    )
}

pub fn parse_condition() -> impl Parser<Token, ast::Condition> {
    with_context(
        map(
            tuple3(
                parse_identifier(),
                delimiter(Delimiter::Equal),
                parse_pattern(),
            ),
            |(name, _, pattern): (String, (), ast::Pattern)| ast::Condition { name, pattern },
        ),
        "condition",
    )
}

pub fn parse_statement() -> impl Parser<Token, ast::Statement> {
    with_context(
        map(
            tuple2(
                delimited(
                    delimiter(Delimiter::OpenParen),
                    separated_list(parse_condition(), delimiter(Delimiter::Comma)),
                    delimiter(Delimiter::CloseParen),
                ),
                parse_output_block(),
            ),
            |(conditions, output): (Vec<ast::Condition>, ast::OutputBlock)| ast::Statement {
                conditions,
                output,
            },
        ),
        "statement",
    )
}

pub fn parse_item() -> impl Parser<Token, ast::Item> {
    choice(vec![
        Box::new(map(parse_binding(), ast::Item::Binding)),
        Box::new(map(parse_statement(), ast::Item::Statement)),
    ])
}

/// Parses a whole preprocessed token stream.
///
/// Every token must belong to an item; trailing garbage is an error rather than being
/// silently ignored.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = spans.len()))]
pub fn parse_program(spans: &[TokenSpan]) -> Result<ast::Program, ParseError> {
    let tokens: Vec<Token> = spans.iter().map(|span| span.token.clone()).collect();
    let item_parser = parse_item();

    let mut items = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        let (next_pos, item) = item_parser
            .parse(&tokens, pos)
            .map_err(|e| e.with_context("program"))?;
        items.push(item);
        pos = next_pos;
    }

    Ok(ast::Program::new(items))
}

/// Source span of the token a parse error points at. `None` when the error is at the
/// end of input.
pub fn error_span(spans: &[TokenSpan], error: &ParseError) -> Option<Span> {
    spans.get(error.get_position()).map(TokenSpan::span)
}
