//! Statement Code Generation

use std::fmt;

use wordy_ir::{Assignment, Block, ComparisonOp, Conditional, NodeRef, Stmt};
use wordy_stack::ensure_sufficient_stack;

use super::Compiler;
use crate::indent::IndentingWriter;

impl Compiler {
    /// Write the C statement for `stmt`.
    ///
    /// Blocks end at their closing brace; the caller decides what follows.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(kind = NodeRef::from(stmt).kind_name())
    )]
    pub fn compile_stmt(&self, stmt: &Stmt, out: &mut dyn fmt::Write) -> fmt::Result {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Assignment(assignment) => self.compile_assignment(assignment, out),
            Stmt::Block(block) => self.compile_block(block, out),
            Stmt::Conditional(cond) => self.compile_conditional(cond, out),
        })
    }

    fn compile_assignment(&self, assignment: &Assignment, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{} = ", assignment.variable().name())?;
        self.compile_expr(assignment.value(), out)?;
        out.write_char(';')
    }

    fn compile_block(&self, block: &Block, out: &mut dyn fmt::Write) -> fmt::Result {
        if block.statements().is_empty() {
            return out.write_str("{}");
        }
        out.write_str("{\n")?;
        let mut body = IndentingWriter::new(&mut *out, self.options.indent.as_str());
        for stmt in block.statements() {
            self.compile_stmt(stmt, &mut body)?;
            body.println("")?;
        }
        out.write_char('}')
    }

    fn compile_conditional(&self, cond: &Conditional, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("if (")?;
        self.compile_expr(cond.lhs(), out)?;
        write!(out, " {} ", self.comparison_token(cond.operator()))?;
        self.compile_expr(cond.rhs(), out)?;
        out.write_str(") ")?;
        self.compile_stmt(cond.if_true(), out)?;
        match cond.if_false() {
            Some(if_false) => {
                out.write_str(" else ")?;
                self.compile_stmt(if_false, out)
            }
            None => out.write_str(" else {}"),
        }
    }

    fn comparison_token(&self, op: ComparisonOp) -> &'static str {
        match op {
            ComparisonOp::Equals => self.options.equals_token.as_str(),
            ComparisonOp::LessThan => "<",
            ComparisonOp::GreaterThan => ">",
        }
    }
}
