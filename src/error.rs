//! Shared error type for the compilation pipeline.
//!
//! Every stage returns `CompileResult`; the first error stops the pipeline.
//! Diagnostics that refer to the source point at the offending byte with a
//! caret under the line it sits on.

use std::path::PathBuf;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
  #[snafu(display("could not open the file '{}': {source}", path.display()))]
  SourceUnreadable {
    path: PathBuf,
    source: std::io::Error,
  },

  #[snafu(display("could not write the file '{}': {source}", path.display()))]
  OutputUnwritable {
    path: PathBuf,
    source: std::io::Error,
  },

  #[snafu(display("{}: expected {expected}, but got {found}\n{}", at.position(), at.snippet))]
  UnexpectedToken {
    expected: String,
    found: String,
    at: SourceLocation,
  },

  #[snafu(display("{}: integer literal \"{lexeme}\" is out of range\n{}", at.position(), at.snippet))]
  LiteralOutOfRange {
    lexeme: String,
    at: SourceLocation,
  },

  #[snafu(display("immediate {value} does not fit in a 32-bit operand"))]
  ImmediateOutOfRange { value: i64 },
}

impl CompileError {
  /// Whether the message points into the source text rather than naming a
  /// file of its own.
  pub fn has_location(&self) -> bool {
    matches!(
      self,
      CompileError::UnexpectedToken { .. } | CompileError::LiteralOutOfRange { .. }
    )
  }
}

/// Line/column of a byte offset, plus the rendered source line and caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
  pub line: usize,
  pub column: usize,
  pub snippet: String,
}

impl SourceLocation {
  /// Resolve `loc` (a byte offset into `source`) to a 1-based line and column.
  pub fn locate(source: &str, loc: usize) -> Self {
    let safe_loc = loc.min(source.len());
    let line_start = source[..safe_loc].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[safe_loc..]
      .find('\n')
      .map_or(source.len(), |i| safe_loc + i);
    let line = source[..line_start].matches('\n').count() + 1;
    let column = source[line_start..safe_loc].chars().count() + 1;
    let text = source[line_start..line_end].trim_end_matches('\r');
    let marker = format!("{}^", " ".repeat(column - 1));
    Self {
      line,
      column,
      snippet: format!("{text}\n{marker}"),
    }
  }

  pub fn position(&self) -> String {
    format!("{}:{}", self.line, self.column)
  }
}
