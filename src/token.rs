//! Token vocabulary shared by the tokenizer and the parser.

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  BraceOpen,
  BraceClose,
  ParenOpen,
  ParenClose,
  Semicolon,
  KeywordInt,
  KeywordReturn,
  Identifier,
  IntegerLiteral,
  Negation,
  BitwiseComplement,
  LogicalNegation,
}

/// Reserved words and the kinds they lex to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
  ("int", TokenKind::KeywordInt),
  ("return", TokenKind::KeywordReturn),
];

/// Single-character delimiters that are tokens in their own right.
pub const PUNCTUATORS: &[(char, TokenKind)] = &[
  ('{', TokenKind::BraceOpen),
  ('}', TokenKind::BraceClose),
  ('(', TokenKind::ParenOpen),
  (')', TokenKind::ParenClose),
  (';', TokenKind::Semicolon),
  ('-', TokenKind::Negation),
  ('~', TokenKind::BitwiseComplement),
  ('!', TokenKind::LogicalNegation),
];

impl TokenKind {
  pub fn keyword(text: &str) -> Option<Self> {
    KEYWORDS
      .iter()
      .find(|(keyword, _)| *keyword == text)
      .map(|&(_, kind)| kind)
  }

  pub fn punctuator(c: char) -> Option<Self> {
    PUNCTUATORS
      .iter()
      .find(|(symbol, _)| *symbol == c)
      .map(|&(_, kind)| kind)
  }

  /// Upper-case name used by the token dump.
  pub fn name(self) -> &'static str {
    match self {
      TokenKind::BraceOpen => "BRACES_OPEN",
      TokenKind::BraceClose => "BRACES_CLOSE",
      TokenKind::ParenOpen => "PARENTHESIS_OPEN",
      TokenKind::ParenClose => "PARENTHESIS_CLOSE",
      TokenKind::Semicolon => "SEMICOLON",
      TokenKind::KeywordInt => "KEYWORD_INT",
      TokenKind::KeywordReturn => "KEYWORD_RETURN",
      TokenKind::Identifier => "IDENTIFIER",
      TokenKind::IntegerLiteral => "LITERAL_INTEGER",
      TokenKind::Negation => "NEGATION",
      TokenKind::BitwiseComplement => "BITWISE_COMPLEMENT",
      TokenKind::LogicalNegation => "LOGICAL_NEGATION",
    }
  }

  /// Phrase used in "expected ..." diagnostics.
  pub fn describe(self) -> &'static str {
    match self {
      TokenKind::BraceOpen => "\"{\"",
      TokenKind::BraceClose => "\"}\"",
      TokenKind::ParenOpen => "\"(\"",
      TokenKind::ParenClose => "\")\"",
      TokenKind::Semicolon => "\";\"",
      TokenKind::KeywordInt => "\"int\"",
      TokenKind::KeywordReturn => "\"return\"",
      TokenKind::Identifier => "an identifier",
      TokenKind::IntegerLiteral => "an integer literal",
      TokenKind::Negation => "\"-\"",
      TokenKind::BitwiseComplement => "\"~\"",
      TokenKind::LogicalNegation => "\"!\"",
    }
  }
}

/// Thin wrapper for lexical information needed by later stages.
///
/// `value` is only set for integer literals; identifier text is recovered
/// from the source through `loc` and `len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize, value: Option<i64>) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
    }
  }

  /// Return the slice from the source that produced this token.
  pub fn text<'a>(&self, source: &'a str) -> &'a str {
    &source[self.loc..self.loc + self.len]
  }

  /// One line of the diagnostic token listing, e.g. `KEYWORD_INT             int`.
  /// Integer literals show their parsed value rather than the lexeme.
  pub fn dump(&self, source: &str) -> String {
    match (self.kind, self.value) {
      (TokenKind::IntegerLiteral, Some(value)) => format!("{:<24}{value}", self.kind.name()),
      _ => format!("{:<24}{}", self.kind.name(), self.text(source)),
    }
  }
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(t) => format!("\"{}\"", t.text(source)),
    None => "end of input".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keyword_table_is_exact_match() {
    assert_eq!(TokenKind::keyword("int"), Some(TokenKind::KeywordInt));
    assert_eq!(TokenKind::keyword("return"), Some(TokenKind::KeywordReturn));
    assert_eq!(TokenKind::keyword("Int"), None);
    assert_eq!(TokenKind::keyword("returns"), None);
  }

  #[test]
  fn punctuators_cover_unary_operators() {
    assert_eq!(TokenKind::punctuator('-'), Some(TokenKind::Negation));
    assert_eq!(TokenKind::punctuator('~'), Some(TokenKind::BitwiseComplement));
    assert_eq!(TokenKind::punctuator('!'), Some(TokenKind::LogicalNegation));
    assert_eq!(TokenKind::punctuator('+'), None);
  }

  #[test]
  fn dump_pads_kind_name() {
    let source = "int main";
    let token = Token::new(TokenKind::Identifier, 4, 4, None);
    assert_eq!(token.dump(source), "IDENTIFIER              main");
    assert_eq!(describe_token(Some(&token), source), "\"main\"");
    assert_eq!(describe_token(None, source), "end of input");
  }

  #[test]
  fn dump_shows_literal_value() {
    let source = "return 007";
    let token = Token::new(TokenKind::IntegerLiteral, 7, 3, Some(7));
    assert_eq!(token.dump(source), "LITERAL_INTEGER         7");
  }
}
