//! Wordy IR - Abstract syntax tree types for the Wordy language.
//!
//! Wordy is a toy language whose statements read as near-English
//! ("x plus y", "If x is less than y then ..."). This crate holds the
//! tree the parser hands to the rest of the core:
//!
//! - [`Expr`]: nodes that evaluate to an `f64`
//! - [`Stmt`]: nodes that run for effect against an evaluation context
//! - [`NodeRef`]: a borrowed view over any node, for generic traversal
//!
//! # Design Philosophy
//!
//! - **Strict tree**: every node exclusively owns its children (`Box`/`Vec`),
//!   no sharing, no parent links.
//! - **Immutable**: fields are private; nodes are built once and only read.
//! - **Closed dispatch**: node kinds and operators are enums, so every
//!   consumer matches exhaustively and an unknown operator cannot exist.
//!
//! Types that contain floats store them as u64 bits so that `Eq` and `Hash`
//! can be derived.

pub mod ast;
mod node;

pub use ast::{
    Assignment, BinaryExpr, BinaryOp, Block, ComparisonOp, Conditional, Constant, Expr, Stmt,
    Variable,
};
pub use node::{ChildRole, NodeRef};
