//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! Characters accumulate into a pending lexeme until a delimiter shows up.
//! The pending lexeme is then classified as a keyword, an integer literal or
//! an identifier, and the delimiter emits its own token unless it is
//! whitespace. Anything outside this tiny alphabet is absorbed into the
//! pending lexeme, so the tokenizer itself never rejects a character.

use crate::error::{CompileError, CompileResult, SourceLocation};
use crate::token::{Token, TokenKind};

/// Lex the input into a flat vector of tokens in source order.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let mut pending: Option<usize> = None;

  for (i, c) in input.char_indices() {
    let punctuator = TokenKind::punctuator(c);
    if punctuator.is_none() && !is_whitespace(c) {
      pending.get_or_insert(i);
      continue;
    }

    if let Some(start) = pending.take() {
      tokens.push(classify(input, start, i)?);
    }
    if let Some(kind) = punctuator {
      tokens.push(Token::new(kind, i, c.len_utf8(), None));
    }
  }

  if let Some(start) = pending {
    tokens.push(classify(input, start, input.len())?);
  }

  Ok(tokens)
}

fn is_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\n' | '\t' | '\r')
}

/// Turn the lexeme `input[start..end]` into a keyword, literal or identifier.
fn classify(input: &str, start: usize, end: usize) -> CompileResult<Token> {
  let text = &input[start..end];
  let len = end - start;

  if let Some(kind) = TokenKind::keyword(text) {
    return Ok(Token::new(kind, start, len, None));
  }

  if text.bytes().all(|b| b.is_ascii_digit()) {
    let value = text
      .parse::<i64>()
      .map_err(|_| CompileError::LiteralOutOfRange {
        lexeme: text.to_string(),
        at: SourceLocation::locate(input, start),
      })?;
    return Ok(Token::new(TokenKind::IntegerLiteral, start, len, Some(value)));
  }

  Ok(Token::new(TokenKind::Identifier, start, len, None))
}
