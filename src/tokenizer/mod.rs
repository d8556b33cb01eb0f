//! # Tokenizer
//!
//! Lexical analysis of rule documents. Raw source text is turned into a stream of
//! [`TokenSpan`](token::TokenSpan)s, each carrying its line, column and byte range so that
//! later stages can point at the offending text.
//!
//! ## Component Structure
//!
//! * [`token`]: Token types and the [`Tokenizer`](token::Tokenizer) driver
//! * [`keyword`]: The `bind` keyword
//! * [`symbol`]: Delimiters (`(`, `)`, `,`, `=`)
//! * [`literal`]: Regex literals (`~/.../`) and output blocks (`{ ... }`)
//! * [`whitespace`]: Whitespace and newlines
//! * [`comment`]: `//` and `/* */` comments
//!
//! Whitespace and comments are kept as tokens; the
//! [`TokenPreprocessor`](crate::preprocessor::TokenPreprocessor) removes them before parsing.
//!
//! ## Usage Example
//!
//! ```rust
//! use empire::tokenizer::token::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize("bind os = platform").unwrap();
//! assert!(matches!(tokens[0].token, Token::Keyword(_)));
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
