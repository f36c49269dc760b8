//! Expression Code Generation

use std::fmt;

use wordy_ir::{BinaryExpr, BinaryOp, Expr};
use wordy_stack::ensure_sufficient_stack;

use super::Compiler;

impl Compiler {
    /// Write the C expression for `expr`.
    pub fn compile_expr(&self, expr: &Expr, out: &mut dyn fmt::Write) -> fmt::Result {
        match expr {
            Expr::Constant(constant) => emit_float(constant.value(), out),
            Expr::Variable(variable) => out.write_str(variable.name()),
            Expr::Binary(binary) => ensure_sufficient_stack(|| self.compile_binary(binary, out)),
        }
    }

    fn compile_binary(&self, binary: &BinaryExpr, out: &mut dyn fmt::Write) -> fmt::Result {
        match infix_symbol(binary.operator()) {
            Some(symbol) => {
                out.write_char('(')?;
                self.compile_expr(binary.lhs(), out)?;
                write!(out, " {symbol} ")?;
                self.compile_expr(binary.rhs(), out)?;
                out.write_char(')')
            }
            // A call is self-delimiting: no extra parentheses.
            None => {
                out.write_str("pow(")?;
                self.compile_expr(binary.lhs(), out)?;
                out.write_str(", ")?;
                self.compile_expr(binary.rhs(), out)?;
                out.write_char(')')
            }
        }
    }
}

/// C infix operator for `op`, or `None` when C has no such operator.
fn infix_symbol(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Addition => Some("+"),
        BinaryOp::Subtraction => Some("-"),
        BinaryOp::Multiplication => Some("*"),
        BinaryOp::Division => Some("/"),
        BinaryOp::Exponentiation => None,
    }
}

/// Write a double literal. Non-finite values use the `<math.h>` macros.
fn emit_float(value: f64, out: &mut dyn fmt::Write) -> fmt::Result {
    if value.is_nan() {
        out.write_str("NAN")
    } else if value.is_infinite() {
        out.write_str(if value.is_sign_positive() {
            "INFINITY"
        } else {
            "-INFINITY"
        })
    } else {
        // Debug keeps a fractional part and round-trips exactly.
        write!(out, "{value:?}")
    }
}
