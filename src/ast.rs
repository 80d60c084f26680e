//! Syntax tree produced by the parser and consumed by the code generator.

use crate::token::TokenKind;

/// Prefix operators recognised by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
  Negate,
  Complement,
  LogicalNot,
}

impl UnaryOp {
  /// Map an operator token to its AST operator.
  pub fn from_token(kind: TokenKind) -> Option<Self> {
    match kind {
      TokenKind::Negation => Some(UnaryOp::Negate),
      TokenKind::BitwiseComplement => Some(UnaryOp::Complement),
      TokenKind::LogicalNegation => Some(UnaryOp::LogicalNot),
      _ => None,
    }
  }

  /// Apply the operator to a 32-bit `int`.
  pub fn apply(self, value: i32) -> i32 {
    match self {
      UnaryOp::Negate => value.wrapping_neg(),
      UnaryOp::Complement => !value,
      UnaryOp::LogicalNot => i32::from(value == 0),
    }
  }
}

/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Num { value: i64 },
  Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
  pub fn number(value: i64) -> Self {
    Self::Num { value }
  }

  pub fn unary(op: UnaryOp, operand: Expr) -> Self {
    Self::Unary {
      op,
      operand: Box::new(operand),
    }
  }

  /// Wrap `value` in `ops`, listed outermost first.
  pub fn chain(ops: &[UnaryOp], value: i64) -> Self {
    ops
      .iter()
      .rev()
      .fold(Expr::number(value), |operand, &op| Expr::unary(op, operand))
  }

  /// Walk down the operator chain without recursing. Returns the operators
  /// outermost first and the literal at the bottom.
  pub fn split_chain(&self) -> (Vec<UnaryOp>, i64) {
    let mut ops = Vec::new();
    let mut node = self;
    loop {
      match node {
        Expr::Num { value } => return (ops, *value),
        Expr::Unary { op, operand } => {
          ops.push(*op);
          node = operand;
        }
      }
    }
  }
}

// Operator chains can be arbitrarily deep; unlink them one node at a time so
// dropping a long chain does not recurse.
impl Drop for Expr {
  fn drop(&mut self) {
    let Expr::Unary { operand, .. } = self else {
      return;
    };
    let mut next = std::mem::replace(operand.as_mut(), Expr::number(0));
    while let Expr::Unary { operand, .. } = &mut next {
      let inner = std::mem::replace(operand.as_mut(), Expr::number(0));
      next = inner;
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
  Return(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
  pub name: String,
  pub body: Stmt,
}

/// A compilation unit: always exactly one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
  pub function: Function,
}
