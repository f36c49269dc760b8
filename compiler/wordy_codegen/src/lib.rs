//! C-family Code Generation Backend for Wordy
//!
//! Renders a Wordy AST as equivalent source text in C-family infix syntax:
//!
//! - arithmetic as fully parenthesized infix, `(x + y)`
//! - exponentiation as a call, `pow(x, y)`
//! - conditionals as `if (x < y) ... else ...`
//! - blocks as `{ ... }` with one statement per indented line
//!
//! The output is a fragment. Declarations, `#include <math.h>` and any
//! function wrapper are the caller's to supply.
//!
//! # Architecture
//!
//! ```text
//!   Stmt / Expr
//!        ↓
//!    Compiler  (CodegenOptions: indent, equals token)
//!        ↓
//!   fmt::Write  (nested blocks go through IndentingWriter)
//! ```

pub mod c;
mod dump;
mod indent;
mod options;

pub use c::{Compile, Compiler};
pub use dump::{dump_tree, write_tree};
pub use indent::IndentingWriter;
pub use options::{CodegenOptions, EqualsToken};
