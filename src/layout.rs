//! Trees with an explicit shape.
//!
//! A [`Layout`] spells out every node of a tree and where it hangs. Building
//! a tree from it performs no comparisons and no rebalancing, so the result
//! need not be ordered nor balanced; keys may even repeat. This is how the
//! range query fixtures are built, where internal nodes copy the key of a
//! marked leaf below them.

use crate::compare::Natural;
use crate::index::{IndexType, NodeIndex};
use crate::node::{Color, Node};
use crate::tree::RbTree;

/// Explicit description of a subtree.
///
/// ```rust
/// use rb_tree_map::{Layout, RbTree};
///
/// let layout = Layout::node(2, ())
///     .with_left(Layout::leaf(1, ()))
///     .with_right(Layout::leaf(3, ()));
/// let tree = RbTree::from_layout(layout);
/// assert_eq!(tree.len(), 3);
/// assert!(tree.root().unwrap().left().unwrap().is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<K, V> {
    key: K,
    value: V,
    leaf: bool,
    left: Option<Box<Layout<K, V>>>,
    right: Option<Box<Layout<K, V>>>,
}

impl<K, V> Layout<K, V> {
    /// A node without the leaf marker.
    pub fn node(key: K, value: V) -> Self {
        Layout {
            key,
            value,
            leaf: false,
            left: None,
            right: None,
        }
    }

    /// A node carrying the leaf marker.
    pub fn leaf(key: K, value: V) -> Self {
        Layout {
            leaf: true,
            ..Self::node(key, value)
        }
    }

    #[must_use]
    pub fn with_left(mut self, child: Layout<K, V>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    #[must_use]
    pub fn with_right(mut self, child: Layout<K, V>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Build a tree with exactly the shape of `layout`, ordered by `Ord`.
    pub fn from_layout(layout: Layout<K, V>) -> Self {
        Self::from_layout_with(layout, Natural)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Build a tree with exactly the shape of `layout`, ordered by `cmp`.
    ///
    /// Every node is black. Lookups and updates on the result only behave
    /// as a map if the layout happens to be ordered by `cmp`.
    ///
    /// # Panics
    ///
    /// This method panics when the layout has more nodes than the index type
    /// can address.
    pub fn from_layout_with(layout: Layout<K, V>, cmp: C) -> Self {
        let mut tree = Self::with_comparator(cmp);
        let root = tree.attach_layout(layout, None);
        tree.root = Some(root);
        tree
    }
}

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    fn attach_layout(
        &mut self,
        layout: Layout<K, V>,
        parent: Option<NodeIndex<Ix>>,
    ) -> NodeIndex<Ix> {
        let Layout {
            key,
            value,
            leaf,
            left,
            right,
        } = layout;
        let idx = NodeIndex::new(self.nodes.len());
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != idx,
            "Reached maximum number of nodes"
        );
        let mut node = Node::new(key, value, Color::Black);
        node.leaf = leaf;
        node.parent = parent;
        self.nodes.push(node);
        self.len += 1;
        if let Some(left) = left {
            let l = self.attach_layout(*left, Some(idx));
            self.node_mut(idx, Node::set_left(Some(l)));
        }
        if let Some(right) = right {
            let r = self.attach_layout(*right, Some(idx));
            self.node_mut(idx, Node::set_right(Some(r)));
        }
        idx
    }
}
