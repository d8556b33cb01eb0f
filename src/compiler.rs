//! Compile entry point: source text in, generated text out.
//!
//! ```text
//! Source → Tokenizer → Preprocessor → Analyzer → Evaluator → Output
//! ```
//!
//! The whole source is tokenized and parsed before any rule is evaluated, so a syntax
//! error never produces partial output.

use std::io::{BufReader, BufWriter, Read, Write};

use tracing::{debug, error};

use crate::analyzer::parsers::{error_span, parse_program};
use crate::ast::Program;
use crate::error::{EmpireError, EmpireResult};
use crate::eval::{EvalStats, Evaluator};
use crate::preprocessor::{Preprocessor, TokenPreprocessor};
use crate::properties::Properties;
use crate::tokenizer::token::Tokenizer;

pub struct Compiler<R, W> {
    input: R,
    output: W,
    properties: Properties,
}

impl<R: Read, W: Write> Compiler<R, W> {
    pub fn new(input: R, output: W, properties: Properties) -> Self {
        Self {
            input,
            output,
            properties,
        }
    }

    /// Runs a full pass and flushes the output.
    pub fn compile(self) -> EmpireResult<EvalStats> {
        let mut source = Vec::new();
        BufReader::new(self.input).read_to_end(&mut source)?;
        let source = String::from_utf8(source)?;
        debug!(bytes = source.len(), "source read");

        let program = Compiler::parse(&source)?;

        let mut writer = BufWriter::new(self.output);
        let stats = Evaluator::new(self.properties).evaluate(&program, &mut writer)?;
        writer.flush()?;
        Ok(stats)
    }
}

impl Compiler<(), ()> {
    /// Tokenizes and parses `source` without evaluating it.
    pub fn parse(source: &str) -> EmpireResult<Program> {
        let spans = Tokenizer::new().tokenize(source)?;
        let spans = TokenPreprocessor::default().process(spans);

        parse_program(&spans).map_err(|source| {
            let span = error_span(&spans, &source);
            error!(error = %source, ?span, "failed to parse rules");
            EmpireError::Parse { source, span }
        })
    }
}

/// Compiles `source` into a string.
pub fn compile_str(source: &str, properties: &Properties) -> EmpireResult<String> {
    let mut output = Vec::new();
    Compiler::new(source.as_bytes(), &mut output, properties.clone()).compile()?;
    Ok(String::from_utf8(output)?)
}
