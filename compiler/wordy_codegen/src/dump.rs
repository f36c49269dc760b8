//! Indented tree view of an AST, for debugging and tests.
//!
//! ```text
//! ConditionalNode(operator=LESS_THAN)
//!   lhs: VariableNode(name=x)
//!   rhs: ConstantNode(value=3.0)
//!   ifTrue: AssignmentNode
//!     lhs: VariableNode(name=y)
//!     rhs: ConstantNode(value=1.0)
//! ```

use std::fmt;

use wordy_ir::{ChildRole, NodeRef};
use wordy_stack::ensure_sufficient_stack;

use crate::indent::IndentingWriter;

/// Render `node` and its descendants, one node per line.
pub fn dump_tree<'a>(node: impl Into<NodeRef<'a>>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_tree(node.into(), &mut out);
    out
}

/// Write the tree view of `node` to `out`.
pub fn write_tree(node: NodeRef<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
    write_node(None, node, out)
}

fn write_node(role: Option<ChildRole>, node: NodeRef<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
    ensure_sufficient_stack(|| {
        if let Some(role) = role {
            write!(out, "{role}: ")?;
        }
        writeln!(out, "{}{}", node.kind_name(), node.describe_attributes())?;

        let mut nested = IndentingWriter::new(&mut *out, "  ");
        for (role, child) in node.children() {
            write_node(Some(role), child, &mut nested)?;
        }
        Ok(())
    })
}
