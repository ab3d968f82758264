//! Serializable view of the tree shape.
//!
//! Layout of the output:
//!
//! ```json
//! {"root": {"key": 2, "leftNode": null, "rightNode": null, "isLeaf": false}}
//! ```
//!
//! Values, colors and parent links are not part of the snapshot.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::index::IndexType;
use crate::node::NodeRef;
use crate::tree::RbTree;

/// Borrowed snapshot of a tree, see [`RbTree::snapshot`].
#[derive(Debug)]
pub struct Snapshot<'a, K, V, Ix> {
    root: Option<NodeRef<'a, K, V, Ix>>,
}

struct SnapshotNode<'a, K, V, Ix>(NodeRef<'a, K, V, Ix>);

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    /// Borrow the shape of the tree for serialization.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.put(1, ()).unwrap();
    /// let json = serde_json::to_string(&tree.snapshot()).unwrap();
    /// assert_eq!(
    ///     json,
    ///     r#"{"root":{"key":1,"leftNode":null,"rightNode":null,"isLeaf":false}}"#
    /// );
    /// ```
    pub fn snapshot(&self) -> Snapshot<'_, K, V, Ix> {
        Snapshot { root: self.root() }
    }
}

impl<K, V, Ix> Serialize for Snapshot<'_, K, V, Ix>
where
    K: Serialize,
    Ix: IndexType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tree", 1)?;
        state.serialize_field("root", &self.root.map(SnapshotNode))?;
        state.end()
    }
}

impl<K, V, Ix> Serialize for SnapshotNode<'_, K, V, Ix>
where
    K: Serialize,
    Ix: IndexType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("Node", 4)?;
        state.serialize_field("key", node.key())?;
        state.serialize_field("leftNode", &node.left().map(SnapshotNode))?;
        state.serialize_field("rightNode", &node.right().map(SnapshotNode))?;
        state.serialize_field("isLeaf", &node.is_leaf())?;
        state.end()
    }
}
