//! Recursive-descent parser for `int <name>() { return <expr>; }`.
//!
//! The grammar is LL(1): every position accepts exactly one token kind, or
//! in the expression rule a literal or one of the three prefix operators.
//! The parser walks an immutable token slice with a cursor, so a failed
//! parse leaves the tokens untouched and never hands back a partial tree.

use crate::ast::{Expr, Function, Program, Stmt, UnaryOp};
use crate::error::{CompileError, CompileResult, SourceLocation};
use crate::token::{Token, TokenKind, describe_token};

/// Parse a whole program and require that every token is consumed.
pub fn parse(tokens: &[Token], source: &str) -> CompileResult<Program> {
  let mut stream = TokenStream::new(tokens, source);
  let function = parse_function(&mut stream)?;

  if !stream.is_eof() {
    return Err(stream.unexpected("end of input"));
  }

  Ok(Program { function })
}

fn parse_function(stream: &mut TokenStream) -> CompileResult<Function> {
  stream.skip(TokenKind::KeywordInt)?;
  let name = stream.get_ident()?;
  stream.skip(TokenKind::ParenOpen)?;
  stream.skip(TokenKind::ParenClose)?;
  stream.skip(TokenKind::BraceOpen)?;
  let body = parse_stmt(stream)?;
  stream.skip(TokenKind::BraceClose)?;

  Ok(Function { name, body })
}

fn parse_stmt(stream: &mut TokenStream) -> CompileResult<Stmt> {
  stream.skip(TokenKind::KeywordReturn)?;
  let expr = parse_expr(stream)?;
  stream.skip(TokenKind::Semicolon)?;
  Ok(Stmt::Return(expr))
}

/// `Expression := IntegerLiteral | UnaryOperator Expression`, read as a run
/// of operators ending in a literal so deep chains do not grow the stack.
fn parse_expr(stream: &mut TokenStream) -> CompileResult<Expr> {
  let mut ops = Vec::new();

  let value = loop {
    if let Some(value) = stream.get_number() {
      break value;
    }

    let op = stream
      .peek()
      .and_then(|token| UnaryOp::from_token(token.kind))
      .ok_or_else(|| stream.unexpected("an integer literal or a unary operator"))?;
    stream.advance();
    ops.push(op);
  };

  Ok(Expr::chain(&ops, value))
}

/// Lightweight cursor over the token slice.
struct TokenStream<'a> {
  tokens: &'a [Token],
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: &'a [Token], source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&'a Token> {
    self.tokens.get(self.pos)
  }

  fn advance(&mut self) {
    self.pos += 1;
  }

  /// Consume the current token if it has the given kind.
  fn equal(&mut self, kind: TokenKind) -> bool {
    if let Some(token) = self.peek()
      && token.kind == kind
    {
      self.advance();
      return true;
    }
    false
  }

  fn skip(&mut self, kind: TokenKind) -> CompileResult<()> {
    if self.equal(kind) {
      Ok(())
    } else {
      Err(self.unexpected(kind.describe()))
    }
  }

  /// Consume an integer literal, if that is what comes next.
  fn get_number(&mut self) -> Option<i64> {
    let token = self.peek()?;
    if token.kind != TokenKind::IntegerLiteral {
      return None;
    }
    let value = token.value?;
    self.advance();
    Some(value)
  }

  fn get_ident(&mut self) -> CompileResult<String> {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Identifier
    {
      self.advance();
      return Ok(token.text(self.source).to_string());
    }
    Err(self.unexpected(TokenKind::Identifier.describe()))
  }

  /// Build the error for the token under the cursor.
  fn unexpected(&self, expected: &str) -> CompileError {
    let token = self.peek();
    let loc = token.map_or(self.source.len(), |t| t.loc);
    CompileError::UnexpectedToken {
      expected: expected.to_string(),
      found: describe_token(token, self.source),
      at: SourceLocation::locate(self.source, loc),
    }
  }

  fn is_eof(&self) -> bool {
    self.pos >= self.tokens.len()
  }
}
