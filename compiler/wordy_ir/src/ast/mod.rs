//! AST Node Types
//!
//! Two families of nodes:
//! - [`Expr`]: produces a numeric value
//! - [`Stmt`]: produces side effects on an evaluation context
//!
//! # Serialization
//! With the `cache` feature every node derives `Serialize`/`Deserialize`.

mod expr;
mod operators;
mod stmt;

pub use expr::{BinaryExpr, Constant, Expr, Variable};
pub use operators::{BinaryOp, ComparisonOp};
pub use stmt::{Assignment, Block, Conditional, Stmt};
