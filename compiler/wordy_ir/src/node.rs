//! Generic node access.
//!
//! [`NodeRef`] lets tooling (tree dumps, walkers, tests) inspect structure
//! without matching on every concrete node kind.

use std::fmt;

use crate::ast::{Expr, Stmt, Variable};

/// The role a child plays in its parent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChildRole {
    Lhs,
    Rhs,
    IfTrue,
    IfFalse,
    /// Position of a statement inside a block.
    Statement(usize),
}

impl fmt::Display for ChildRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRole::Lhs => f.write_str("lhs"),
            ChildRole::Rhs => f.write_str("rhs"),
            ChildRole::IfTrue => f.write_str("ifTrue"),
            ChildRole::IfFalse => f.write_str("ifFalse"),
            ChildRole::Statement(index) => write!(f, "{index}"),
        }
    }
}

/// Borrowed view over any AST node.
///
/// `Variable` gets its own case because an assignment target is a bare
/// variable, not an expression.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NodeRef<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Variable(&'a Variable),
}

impl<'a> NodeRef<'a> {
    /// Named children in declaration order (`lhs`, `rhs`, `ifTrue`, `ifFalse`).
    ///
    /// An absent else branch is left out rather than reported as empty.
    pub fn children(self) -> Vec<(ChildRole, NodeRef<'a>)> {
        match self {
            NodeRef::Expr(Expr::Constant(_) | Expr::Variable(_)) | NodeRef::Variable(_) => {
                Vec::new()
            }
            NodeRef::Expr(Expr::Binary(binary)) => vec![
                (ChildRole::Lhs, NodeRef::Expr(binary.lhs())),
                (ChildRole::Rhs, NodeRef::Expr(binary.rhs())),
            ],
            NodeRef::Stmt(Stmt::Assignment(assignment)) => vec![
                (ChildRole::Lhs, NodeRef::Variable(assignment.variable())),
                (ChildRole::Rhs, NodeRef::Expr(assignment.value())),
            ],
            NodeRef::Stmt(Stmt::Block(block)) => block
                .statements()
                .iter()
                .enumerate()
                .map(|(index, stmt)| (ChildRole::Statement(index), NodeRef::Stmt(stmt)))
                .collect(),
            NodeRef::Stmt(Stmt::Conditional(cond)) => {
                let mut children = vec![
                    (ChildRole::Lhs, NodeRef::Expr(cond.lhs())),
                    (ChildRole::Rhs, NodeRef::Expr(cond.rhs())),
                    (ChildRole::IfTrue, NodeRef::Stmt(cond.if_true())),
                ];
                if let Some(if_false) = cond.if_false() {
                    children.push((ChildRole::IfFalse, NodeRef::Stmt(if_false)));
                }
                children
            }
        }
    }

    /// Name of the concrete node kind.
    pub fn kind_name(self) -> &'static str {
        match self {
            NodeRef::Expr(Expr::Constant(_)) => "ConstantNode",
            NodeRef::Expr(Expr::Variable(_)) | NodeRef::Variable(_) => "VariableNode",
            NodeRef::Expr(Expr::Binary(_)) => "BinaryExpressionNode",
            NodeRef::Stmt(Stmt::Assignment(_)) => "AssignmentNode",
            NodeRef::Stmt(Stmt::Block(_)) => "BlockNode",
            NodeRef::Stmt(Stmt::Conditional(_)) => "ConditionalNode",
        }
    }

    /// The node's own attributes, excluding children.
    ///
    /// Empty for nodes that carry nothing but children.
    pub fn describe_attributes(self) -> String {
        match self {
            NodeRef::Expr(Expr::Constant(constant)) => format!("(value={:?})", constant.value()),
            NodeRef::Expr(Expr::Variable(variable)) | NodeRef::Variable(variable) => {
                format!("(name={})", variable.name())
            }
            NodeRef::Expr(Expr::Binary(binary)) => format!("(operator={})", binary.operator()),
            NodeRef::Stmt(Stmt::Conditional(cond)) => format!("(operator={})", cond.operator()),
            NodeRef::Stmt(Stmt::Assignment(_) | Stmt::Block(_)) => String::new(),
        }
    }

    /// Visit this node and every descendant, parents before children.
    pub fn walk(self, visit: &mut impl FnMut(NodeRef<'a>)) {
        visit(self);
        for (_, child) in self.children() {
            child.walk(visit);
        }
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        NodeRef::Expr(expr)
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        NodeRef::Stmt(stmt)
    }
}

impl<'a> From<&'a Variable> for NodeRef<'a> {
    fn from(variable: &'a Variable) -> Self {
        NodeRef::Variable(variable)
    }
}
