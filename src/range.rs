//! Range query over integer keys, in the style of a one dimensional range
//! tree query.
//!
//! The query first looks for a split node, then walks one path down the
//! left of it and one down the right, collecting the roots of the subtrees
//! hanging inside the range.
//!
//! This is only exact on trees laid out as range trees. The split node is
//! the first node met whose key lies in `[lo, hi]` while descending left
//! whenever possible, not the node where the paths to `lo` and `hi`
//! diverge, and each collected subtree contributes only its own root key.
//! On an arbitrary red-black tree the result can both miss keys in range
//! and include keys outside it.
//!
//! Every step of the search and of the walks moves down one level, so a
//! query visits at most as many nodes as the tree holds.

use std::fmt::Debug;

use crate::index::{IndexType, NodeIndex};
use crate::node::{Node, NodeRef};
use crate::observer::Event;
use crate::tree::RbTree;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer keys supported by the range query.
pub trait IntegerKey: Copy + Ord + Debug + sealed::Sealed {}

macro_rules! integer_key {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl IntegerKey for $ty {}
        )*
    };
}

integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    K: IntegerKey,
    Ix: IndexType,
{
    /// The split node of the range `[lo, hi]`, if any.
    pub fn split_node(&self, lo: K, hi: K) -> Option<NodeRef<'_, K, V, Ix>> {
        self.find_split(lo, hi)
            .map(|idx| NodeRef::new(&self.nodes, idx))
    }

    /// Keys collected by the range query over `[lo, hi]`, in collection
    /// order: the left path first, top-down, then the right path.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::{Layout, RbTree};
    ///
    /// let tree = RbTree::from_layout(
    ///     Layout::node(5, ())
    ///         .with_left(Layout::node(2, ()).with_left(Layout::leaf(1, ())).with_right(Layout::leaf(3, ())))
    ///         .with_right(Layout::leaf(8, ())),
    /// );
    /// assert_eq!(tree.values_in_range(2, 6), [3]);
    /// assert!(tree.values_in_range(10, 20).is_empty());
    /// ```
    pub fn values_in_range(&self, lo: K, hi: K) -> Vec<K> {
        let in_range = |key: K| lo <= key && key <= hi;
        let Some(split) = self.find_split(lo, hi) else {
            self.emit(Event::RangeQueried {
                split: None,
                collected: 0,
            });
            return Vec::new();
        };

        let mut keys = Vec::new();
        if self.is_terminal(split) {
            keys.push(self.key_of(split));
        } else {
            // Going left
            let mut cur = self.node_ref(split, Node::left);
            while let Some(x) = cur {
                let key = self.key_of(x);
                if self.is_terminal(x) {
                    if in_range(key) {
                        keys.push(key);
                    }
                    break;
                }
                if lo <= key {
                    keys.extend(self.node_ref(x, Node::right).map(|r| self.key_of(r)));
                    cur = self.node_ref(x, Node::left);
                } else {
                    cur = self.node_ref(x, Node::right);
                }
            }

            // Going right
            let mut cur = self.node_ref(split, Node::right);
            while let Some(x) = cur {
                let key = self.key_of(x);
                if self.is_terminal(x) {
                    if in_range(key) {
                        keys.push(key);
                    }
                    break;
                }
                if key <= hi {
                    keys.extend(self.node_ref(x, Node::left).map(|l| self.key_of(l)));
                    cur = self.node_ref(x, Node::right);
                } else {
                    cur = self.node_ref(x, Node::left);
                }
            }
        }

        self.emit(Event::RangeQueried {
            split: Some(split.index()),
            collected: keys.len(),
        });
        keys
    }

    /// First node in `[lo, hi]` met while descending, left child first.
    fn find_split(&self, lo: K, hi: K) -> Option<NodeIndex<Ix>> {
        let mut x = self.root?;
        loop {
            let key = self.key_of(x);
            if lo <= key && key <= hi {
                return Some(x);
            }
            x = self
                .node_ref(x, Node::left)
                .or_else(|| self.node_ref(x, Node::right))?;
        }
    }

    /// Where a path walk stops: marked leaves and childless nodes.
    fn is_terminal(&self, x: NodeIndex<Ix>) -> bool {
        self.node_ref(x, |n| n.leaf || !n.has_children())
    }

    fn key_of(&self, x: NodeIndex<Ix>) -> K {
        *self.node_ref(x, Node::key)
    }
}
