use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree
#[derive(Debug)]
pub struct Node<K, V, Ix> {
    /// Left child
    pub left: Option<NodeIndex<Ix>>,
    /// Right child
    pub right: Option<NodeIndex<Ix>>,
    /// Parent, only used to navigate during fix-ups
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,
    /// Set only on nodes built from a `Layout` leaf
    pub leaf: bool,

    /// Key of the node
    pub key: K,
    /// Value of the node
    pub value: V,
}

// Convenient getter/setter methods
impl<K, V, Ix> Node<K, V, Ix>
where
    Ix: IndexType,
{
    pub fn new(key: K, value: V, color: Color) -> Self {
        Node {
            left: None,
            right: None,
            parent: None,
            color,
            leaf: false,
            key,
            value,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn left(&self) -> Option<NodeIndex<Ix>> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex<Ix>> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeIndex<Ix>> {
        self.parent
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn has_children(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    pub fn set_value(value: V) -> impl FnOnce(&mut Node<K, V, Ix>) -> V {
        move |node: &mut Node<K, V, Ix>| std::mem::replace(&mut node.value, value)
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.right = right;
        }
    }

    pub fn set_parent(parent: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}

/// Read-only view of a node inside a tree.
#[derive(Debug)]
pub struct NodeRef<'a, K, V, Ix> {
    nodes: &'a [Node<K, V, Ix>],
    idx: NodeIndex<Ix>,
}

impl<K, V, Ix: Copy> Clone for NodeRef<'_, K, V, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, Ix: Copy> Copy for NodeRef<'_, K, V, Ix> {}

impl<'a, K, V, Ix> NodeRef<'a, K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(nodes: &'a [Node<K, V, Ix>], idx: NodeIndex<Ix>) -> Self {
        NodeRef { nodes, idx }
    }

    fn get(&self) -> &'a Node<K, V, Ix> {
        &self.nodes[self.idx.index()]
    }

    fn at(&self, idx: Option<NodeIndex<Ix>>) -> Option<Self> {
        idx.map(|idx| NodeRef::new(self.nodes, idx))
    }

    /// Handle of this node.
    pub fn index(&self) -> NodeIndex<Ix> {
        self.idx
    }

    pub fn key(&self) -> &'a K {
        &self.get().key
    }

    pub fn value(&self) -> &'a V {
        &self.get().value
    }

    pub fn color(&self) -> Color {
        self.get().color
    }

    pub fn is_red(&self) -> bool {
        self.get().is_red()
    }

    pub fn is_black(&self) -> bool {
        self.get().is_black()
    }

    /// Whether the node was built as a leaf of a `Layout`.
    pub fn is_leaf(&self) -> bool {
        self.get().leaf
    }

    pub fn has_children(&self) -> bool {
        self.get().has_children()
    }

    pub fn left(&self) -> Option<Self> {
        self.at(self.get().left)
    }

    pub fn right(&self) -> Option<Self> {
        self.at(self.get().right)
    }

    pub fn parent(&self) -> Option<Self> {
        self.at(self.get().parent)
    }
}
