//! # Analyzer (Parser)
//!
//! Turns the preprocessed token stream into a [`Program`](crate::ast::Program) using a
//! parser combinator pattern.
//!
//! * [`core`]: the [`Parser`] trait and [`ParseError`]
//! * [`combinators`]: small composable parsers
//! * [`prelude`]: constructor functions for the combinators
//! * [`parsers`]: the rule language grammar
//!
//! ```text
//! program    := item*
//! item       := binding | statement
//! binding    := 'bind' Identifier '=' Identifier
//! statement  := '(' [condition (',' condition)*] ')' OutputBlock
//! condition  := Identifier '=' (Identifier | RegexLiteral)
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use empire::analyzer::parsers::parse_program;
//! use empire::preprocessor::{Preprocessor, TokenPreprocessor};
//! use empire::tokenizer::token::Tokenizer;
//!
//! let spans = Tokenizer::new().tokenize("bind a=a\n(a=b) {c}").unwrap();
//! let spans = TokenPreprocessor::default().process(spans);
//! let program = parse_program(&spans).unwrap();
//! assert_eq!(program.items.len(), 2);
//! ```

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
