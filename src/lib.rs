//! Crate root: wires together the compilation pipeline.
//!
//! - `tokenizer` turns source text into a flat token vector (`token` holds
//!   the vocabulary).
//! - `parser` checks the fixed grammar and builds the `ast`.
//! - `codegen` lowers the tree into x86-64 AT&T assembly.
//! - `error` is the error type every stage returns.

pub mod ast;
pub mod codegen;
pub mod error;
pub mod parser;
pub mod token;
pub mod tokenizer;

use std::fs;
use std::path::Path;

use log::{debug, info};
use snafu::ResultExt;

pub use error::{CompileError, CompileResult};

use error::{OutputUnwritableSnafu, SourceUnreadableSnafu};

/// Where the assembly goes when no output path is given.
pub const DEFAULT_OUTPUT: &str = "assembly.s";

/// Compile a source string into AT&T assembly.
pub fn generate_assembly(source: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(source)?;
  let program = parser::parse(&tokens, source)?;
  codegen::generate(&program)
}

/// Compile `input` and write the assembly to `output`.
///
/// The output file is only created once the whole program has been
/// generated, so a failed compilation never leaves a file behind.
pub fn compile_file(input: &Path, output: &Path) -> CompileResult<()> {
  let source = fs::read_to_string(input).context(SourceUnreadableSnafu { path: input })?;

  let tokens = tokenizer::tokenize(&source)?;
  debug!("Found {} tokens", tokens.len());
  for token in &tokens {
    debug!("{}", token.dump(&source));
  }

  let program = parser::parse(&tokens, &source)?;
  let asm = codegen::generate(&program)?;

  fs::write(output, asm).context(OutputUnwritableSnafu { path: output })?;
  info!("Wrote {}", output.display());
  Ok(())
}
