//! Statement Types
//!
//! Statements run for effect against an evaluation context. A conditional's
//! branches are themselves statements, so control structures nest freely.

use super::expr::{Expr, Variable};
use super::operators::ComparisonOp;

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    /// `Set x to <expr>`
    Assignment(Assignment),
    /// A sequence of statements run in order
    Block(Block),
    /// `If <lhs> <operator> <rhs> then <if_true> else <if_false>`
    Conditional(Conditional),
}

impl Stmt {
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Stmt::Assignment(Assignment::new(Variable::new(name), value))
    }

    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(Block::new(statements))
    }

    pub fn conditional(
        operator: ComparisonOp,
        lhs: Expr,
        rhs: Expr,
        if_true: Stmt,
        if_false: Option<Stmt>,
    ) -> Self {
        Stmt::Conditional(Conditional::new(operator, lhs, rhs, if_true, if_false))
    }
}

/// Drops deeply nested statements without recursing once per level.
///
/// Nested branches and block bodies are moved onto a work list; each one is
/// emptied of its own nested statements before it is dropped.
impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_statements(self, &mut pending);
        while let Some(mut stmt) = pending.pop() {
            detach_statements(&mut stmt, &mut pending);
        }
    }
}

/// Move the nested statements of `stmt` onto `pending`.
///
/// A detached branch is replaced by an empty block, which has nothing left
/// to detach, so dropping the husk stays shallow.
fn detach_statements(stmt: &mut Stmt, pending: &mut Vec<Stmt>) {
    match stmt {
        Stmt::Assignment(_) => {}
        Stmt::Block(block) => pending.append(&mut block.statements),
        Stmt::Conditional(cond) => {
            if !is_empty_block(&cond.if_true) {
                pending.push(std::mem::replace(&mut *cond.if_true, Stmt::block(Vec::new())));
            }
            if let Some(if_false) = cond.if_false.take() {
                pending.push(*if_false);
            }
        }
    }
}

fn is_empty_block(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Block(block) if block.statements.is_empty())
}

impl From<Assignment> for Stmt {
    fn from(assignment: Assignment) -> Self {
        Stmt::Assignment(assignment)
    }
}

impl From<Block> for Stmt {
    fn from(block: Block) -> Self {
        Stmt::Block(block)
    }
}

impl From<Conditional> for Stmt {
    fn from(conditional: Conditional) -> Self {
        Stmt::Conditional(conditional)
    }
}

/// Stores the value of an expression in a variable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    variable: Variable,
    value: Expr,
}

impl Assignment {
    pub fn new(variable: Variable, value: Expr) -> Self {
        Assignment { variable, value }
    }

    #[inline]
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    #[inline]
    pub fn value(&self) -> &Expr {
        &self.value
    }
}

/// An ordered list of statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    #[inline]
    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }
}

/// A conditional comparing two numeric expressions.
///
/// Wordy only supports a single direct comparison; there are no boolean
/// operators or arbitrary boolean expressions. `if_false` is `None` when the
/// source has no else branch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditional {
    operator: ComparisonOp,
    lhs: Expr,
    rhs: Expr,
    if_true: Box<Stmt>,
    if_false: Option<Box<Stmt>>,
}

impl Conditional {
    pub fn new(
        operator: ComparisonOp,
        lhs: Expr,
        rhs: Expr,
        if_true: Stmt,
        if_false: Option<Stmt>,
    ) -> Self {
        Conditional {
            operator,
            lhs,
            rhs,
            if_true: Box::new(if_true),
            if_false: if_false.map(Box::new),
        }
    }

    #[inline]
    pub fn operator(&self) -> ComparisonOp {
        self.operator
    }

    #[inline]
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    #[inline]
    pub fn if_true(&self) -> &Stmt {
        &self.if_true
    }

    #[inline]
    pub fn if_false(&self) -> Option<&Stmt> {
        self.if_false.as_deref()
    }
}
