//! # Empire: rule-based text generation
//!
//! A rule document is a list of bindings and statements:
//!
//! ```text
//! bind os = platform
//! bind arch = machine
//!
//! (os=linux, arch=~/x86_64|aarch64/) {
//!     target=unix
//! }
//! ```
//!
//! A binding aliases a caller-supplied property. A statement emits its output block,
//! trimmed and followed by a newline, when every condition holds. A condition holds when
//! the bound value fully matches its pattern, a bare identifier or a `~/regex/`.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Text → Tokenizer → Preprocessor → Analyzer → Evaluator → Output
//! ```
//!
//! * [`tokenizer`]: lexical analysis with source positions
//! * [`preprocessor`]: drops whitespace and comments from the token stream
//! * [`analyzer`]: parser combinators building the [`ast`]
//! * [`eval`]: walks the tree against the [`properties`] and writes output
//! * [`compiler`]: ties the stages together behind one entry point
//!
//! ## Usage Example
//!
//! ```
//! use empire::{compile_str, Properties};
//!
//! let properties: Properties = [("platform", "linux")].into_iter().collect();
//! let output = compile_str("bind os=platform\n(os=linux) { unix }", &properties).unwrap();
//! assert_eq!(output, "unix\n");
//! ```

pub mod analyzer;
pub mod ast;
pub mod compiler;
pub mod error;
pub mod eval;
pub mod preprocessor;
pub mod properties;
pub mod tokenizer;

// Re-exports
pub use compiler::{compile_str, Compiler};
pub use error::*;
pub use eval::{EvalError, EvalStats};
pub use properties::{Properties, PropertyValue};

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
