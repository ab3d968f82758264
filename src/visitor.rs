//! Whole-tree walks.
//!
//! [`RbTree::walk`](crate::RbTree::walk) hands the root position to a
//! [`Visitor`], which decides how to descend. Empty positions are visited
//! too (as `None`) so a visitor can record the shape of the tree.

use std::fmt::{self, Display, Write};

use crate::index::{DefaultIx, IndexType};
use crate::node::NodeRef;

/// A walk over the positions of a tree.
pub trait Visitor<K, V, Ix = DefaultIx> {
    /// Visit a position; `None` is an empty child slot.
    fn visit(&mut self, node: Option<NodeRef<'_, K, V, Ix>>);
}

/// Counts the nodes of a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingVisitor {
    count: usize,
}

impl CountingVisitor {
    /// Nodes counted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<K, V, Ix: IndexType> Visitor<K, V, Ix> for CountingVisitor {
    fn visit(&mut self, node: Option<NodeRef<'_, K, V, Ix>>) {
        let Some(node) = node else {
            return;
        };
        self.visit(node.left());
        self.count += 1;
        self.visit(node.right());
    }
}

/// Renders a tree in order as `(left key right)`, with `.` for an empty
/// position.
///
/// Two trees with the same keys and the same shape render identically,
/// which makes the output handy for comparing trees in tests. Colors are
/// not rendered. Do not reuse a visitor for a second walk.
///
/// ```rust
/// use rb_tree_map::{InorderVisitor, RbTree};
///
/// let mut tree = RbTree::new();
/// for k in [2, 1, 3] {
///     tree.put(k, ()).unwrap();
/// }
/// let mut visitor = InorderVisitor::default();
/// tree.walk(&mut visitor);
/// assert_eq!(visitor.as_str(), "((.1.)2(.3.))");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InorderVisitor {
    buffer: String,
}

impl InorderVisitor {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Display for InorderVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl<K: Display, V, Ix: IndexType> Visitor<K, V, Ix> for InorderVisitor {
    fn visit(&mut self, node: Option<NodeRef<'_, K, V, Ix>>) {
        let Some(node) = node else {
            self.buffer.push('.');
            return;
        };
        self.buffer.push('(');
        self.visit(node.left());
        let _ignore = write!(self.buffer, "{}", node.key());
        self.visit(node.right());
        self.buffer.push(')');
    }
}
