use nom::{
    bytes::complete::tag,
    character::complete::satisfy,
    combinator::{not, value},
    error::context,
    sequence::terminated,
};

use super::token::{is_identifier_char, ParserResult, Token};

#[derive(
    Debug, Clone, PartialEq, strum::EnumString, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Bind,
}

/// Parses a keyword. A keyword must not run on into an identifier, so `binding` is
/// left for [`parse_identifier`](super::token::parse_identifier).
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_keyword(input: &str) -> ParserResult<Token> {
    let (input, kw) = context(
        "keyword",
        terminated(
            value(Keyword::Bind, tag("bind")),
            not(satisfy(is_identifier_char)),
        ),
    )(input)?;
    Ok((input, Token::Keyword(kw)))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_all_keywords() {
        for keyword_string in Keyword::iter().map(|k| k.to_string()) {
            let (rest, token) = parse_keyword(&keyword_string).unwrap();
            let k = Keyword::from_str(&keyword_string).unwrap();
            assert_eq!(token, Token::Keyword(k));
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_keyword_followed_by_space() {
        let (rest, token) = parse_keyword("bind a=b").unwrap();
        assert_eq!(token, Token::Keyword(Keyword::Bind));
        assert_eq!(rest, " a=b");
    }

    #[test]
    fn test_keyword_prefix_is_not_keyword() {
        assert!(parse_keyword("binding").is_err());
        assert!(parse_keyword("bind_x").is_err());
    }
}
