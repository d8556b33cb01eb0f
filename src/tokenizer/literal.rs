//! # Literal Token Handling
//!
//! Two kinds of literal text appear in a rule document:
//!
//! * Regex literals, `~/pattern/`. Inside the pattern `\/` stands for a literal `/`;
//!   any other backslash sequence is passed through untouched so regex escapes such
//!   as `\d` or `\.` keep working.
//! * Output blocks, `{ text }`. The text runs to the first unescaped `}`; `\}` stands
//!   for a literal `}` and `\\` for a single backslash. The token keeps its braces,
//!   they are removed when the block is evaluated.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{anychar, char},
    combinator::{cut, map, recognize},
    error::context,
    multi::fold_many0,
    sequence::{delimited, pair},
};

use super::token::{ParserResult, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Regex source with its `~/` `/` delimiters removed and `\/` decoded.
    Regex(String),
    /// Output block text including its surrounding braces.
    OutputBlock(String),
}

fn push_str(mut acc: String, part: &str) -> String {
    acc.push_str(part);
    acc
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_regex_body(input: &str) -> ParserResult<String> {
    context(
        "regex body",
        fold_many0(
            alt((
                map(tag("\\/"), |_| "/"),
                recognize(pair(char('\\'), anychar)),
                is_not("\\/"),
            )),
            String::new,
            push_str,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_regex_literal(input: &str) -> ParserResult<Literal> {
    context(
        "regex literal",
        map(
            delimited(tag("~/"), parse_regex_body, cut(char('/'))),
            Literal::Regex,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_output_text(input: &str) -> ParserResult<String> {
    context(
        "output text",
        fold_many0(
            alt((
                map(tag("\\\\"), |_| "\\"),
                map(tag("\\}"), |_| "}"),
                is_not("\\}"),
                tag("\\"),
            )),
            String::new,
            push_str,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_output_block(input: &str) -> ParserResult<Literal> {
    context(
        "output block",
        map(
            delimited(char('{'), parse_output_text, cut(char('}'))),
            |text| Literal::OutputBlock(format!("{{{}}}", text)),
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_literal(input: &str) -> ParserResult<Token> {
    context(
        "literal",
        map(alt((parse_regex_literal, parse_output_block)), Token::Literal),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_regex() {
        let (rest, literal) = parse_regex_literal("~/[b]/) {c}").unwrap();
        assert_eq!(literal, Literal::Regex("[b]".to_string()));
        assert_eq!(rest, ") {c}");
    }

    #[test]
    fn test_regex_escaped_delimiter() {
        let (rest, literal) = parse_regex_literal(r"~/\/b/").unwrap();
        assert_eq!(literal, Literal::Regex("/b".to_string()));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_regex_keeps_other_escapes() {
        let (_, literal) = parse_regex_literal(r"~/\d+\.\d+/").unwrap();
        assert_eq!(literal, Literal::Regex(r"\d+\.\d+".to_string()));

        // an escaped backslash does not escape the closing delimiter
        let (rest, literal) = parse_regex_literal(r"~/a\\/b").unwrap();
        assert_eq!(literal, Literal::Regex(r"a\\".to_string()));
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_unterminated_regex() {
        let result = parse_regex_literal("~/abc");
        assert!(matches!(result, Err(nom::Err::Failure(_))));
    }

    #[test]
    fn test_output_block() {
        let (rest, literal) = parse_output_block("{c\n}\n").unwrap();
        assert_eq!(literal, Literal::OutputBlock("{c\n}".to_string()));
        assert_eq!(rest, "\n");
    }

    #[test]
    fn test_output_block_escaped_brace() {
        let (_, literal) = parse_output_block(r"{ fn main() {\} }").unwrap();
        assert_eq!(literal, Literal::OutputBlock("{ fn main() {} }".to_string()));
    }

    #[test]
    fn test_output_block_trailing_backslash() {
        let (rest, literal) = parse_output_block(r"{a\\} x").unwrap();
        assert_eq!(literal, Literal::OutputBlock(r"{a\}".to_string()));
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_output_block_lone_backslash_is_kept() {
        let (_, literal) = parse_output_block(r"{C:\dir}").unwrap();
        assert_eq!(literal, Literal::OutputBlock(r"{C:\dir}".to_string()));
    }

    #[test]
    fn test_empty_output_block() {
        let (_, literal) = parse_output_block("{}").unwrap();
        assert_eq!(literal, Literal::OutputBlock("{}".to_string()));
    }

    #[test]
    fn test_unterminated_output_block() {
        assert!(matches!(
            parse_output_block("{ no end"),
            Err(nom::Err::Failure(_))
        ));
    }
}
