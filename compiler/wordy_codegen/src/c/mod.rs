//! C-family source generation.
//!
//! [`Compiler`] carries the [`CodegenOptions`] and walks the tree, writing to
//! any `&mut dyn fmt::Write`. Recursion goes through a trait object rather
//! than a generic writer: every nested block wraps the writer in another
//! [`IndentingWriter`](crate::IndentingWriter), and a generic parameter would
//! need a new instantiation per nesting depth.

mod expr;
mod stmt;

use std::fmt;

use wordy_ir::{Expr, Stmt};

use crate::options::CodegenOptions;

/// Generates C-family source text from Wordy trees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compiler {
    options: CodegenOptions,
}

impl Compiler {
    pub fn new(options: CodegenOptions) -> Self {
        Compiler { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Compile a statement into a fresh string.
    pub fn compile_to_string(&self, stmt: &Stmt) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.compile_stmt(stmt, &mut out)?;
        Ok(out)
    }
}

/// Compile a node with the default options.
pub trait Compile {
    fn compile(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl Compile for Expr {
    fn compile(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        Compiler::default().compile_expr(self, out)
    }
}

impl Compile for Stmt {
    fn compile(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        Compiler::default().compile_stmt(self, out)
    }
}
