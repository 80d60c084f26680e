//! Code generation: lower the parsed AST into AT&T x86-64 assembly.
//!
//! The function body is a single `return`, so the emitter folds the returned
//! expression into one immediate and moves it into `%eax` between a
//! standard prologue and epilogue. Symbols get the leading underscore used
//! by Mach-O targets.

use crate::ast::{Expr, Function, Program, Stmt};
use crate::error::{CompileError, CompileResult};

/// Emit assembly for a program.
pub fn generate(program: &Program) -> CompileResult<String> {
  let mut asm = String::new();
  emit_function(&program.function, &mut asm)?;
  Ok(asm)
}

fn emit_function(func: &Function, asm: &mut String) -> CompileResult<()> {
  let symbol = format!("_{}", func.name);
  asm.push_str(&format!(".globl {symbol}\n"));
  asm.push_str(&format!("{symbol}:\n"));
  asm.push_str("  pushq\t%rbp\n");
  asm.push_str("  movq\t%rsp, %rbp\n");

  emit_stmt(&func.body, asm)?;

  asm.push_str("  popq\t%rbp\n");
  asm.push_str("  retq\n");
  Ok(())
}

fn emit_stmt(stmt: &Stmt, asm: &mut String) -> CompileResult<()> {
  match stmt {
    Stmt::Return(expr) => {
      let value = immediate(expr)?;
      asm.push_str(&format!("  movl\t${value}, %eax\n"));
    }
  }
  Ok(())
}

/// The value an expression leaves in `%eax`.
///
/// A bare literal is emitted exactly as written; an operator chain is
/// evaluated with C `int` semantics.
fn immediate(expr: &Expr) -> CompileResult<i64> {
  match expr {
    Expr::Num { value } => {
      to_imm32(*value)?;
      Ok(*value)
    }
    Expr::Unary { .. } => fold(expr).map(i64::from),
  }
}

fn fold(expr: &Expr) -> CompileResult<i32> {
  let (ops, value) = expr.split_chain();
  let literal = to_imm32(value)?;
  Ok(ops.iter().rev().fold(literal, |acc, op| op.apply(acc)))
}

/// Reinterpret a literal as a 32-bit immediate. `movl` accepts both signed
/// and unsigned spellings, so anything in `i32::MIN..=u32::MAX` is valid.
fn to_imm32(value: i64) -> CompileResult<i32> {
  i32::try_from(value)
    .or_else(|_| u32::try_from(value).map(|bits| bits as i32))
    .map_err(|_| CompileError::ImmediateOutOfRange { value })
}
