use std::cmp::Ordering;

use crate::compare::{Comparator, Natural};
use crate::error::Result;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::key::Key;
use crate::node::{Color, Node, NodeRef};
use crate::observer::{Direction, Event, LogObserver, Observer, SkipReason};
use crate::visitor::{CountingVisitor, Visitor};

/// An ordered key-value map backed by a red-black tree.
///
/// Nodes live in an arena and refer to each other by [`NodeIndex`], so
/// parent links never own anything and rotations only reassign indices.
#[derive(Debug)]
pub struct RbTree<K, V, C = Natural, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<K, V, Ix>>,
    /// Root of the tree
    pub(crate) root: Option<NodeIndex<Ix>>,
    /// Number of elements in the map
    pub(crate) len: usize,
    /// Order of the keys
    pub(crate) cmp: C,
    /// Sink for structural events
    pub(crate) observer: Box<dyn Observer>,
}

/// Result of [`RbTree::get_parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<Ix = DefaultIx> {
    /// Whether the key is present
    pub found: bool,
    /// Parent of the matching node, or of the position the key would take
    pub parent: Option<NodeIndex<Ix>>,
    /// Side of `parent` the key sits on; `None` for the root position
    pub dir: Option<Direction>,
}

/// Where a descent for some key ended.
struct Position<Ix> {
    node: Option<NodeIndex<Ix>>,
    parent: Option<NodeIndex<Ix>>,
    dir: Option<Direction>,
}

impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Create an empty `RbTree` ordered by `Ord`.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.put(3, "c").unwrap();
    /// assert_eq!(tree.get(&3), Some(&"c"));
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Create an empty `RbTree` with estimated capacity, ordered by `Ord`.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Create an empty `RbTree` ordered by `cmp`.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// for k in [1, 2, 3] {
    ///     tree.put(k, ()).unwrap();
    /// }
    /// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(cmp: C) -> Self {
        Self::empty(0, cmp)
    }

    /// Create an empty `RbTree` with estimated capacity, ordered by `cmp`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self::empty(capacity, cmp)
    }
}

/// Trees with a non default index type are created through `Default`:
///
/// ```rust
/// use rb_tree_map::{Natural, RbTree};
///
/// let mut tree = RbTree::<i32, (), Natural, u16>::default();
/// tree.put(1, ()).unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
impl<K, V, C, Ix> Default for RbTree<K, V, C, Ix>
where
    C: Default,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::empty(0, C::default())
    }
}

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn empty(capacity: usize, cmp: C) -> Self {
        RbTree {
            nodes: Vec::with_capacity(capacity),
            root: None,
            len: 0,
            cmp,
            observer: Box::new(LogObserver),
        }
    }

    /// Replace the sink receiving structural events, returning the tree.
    #[inline]
    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// Replace the sink receiving structural events.
    #[inline]
    pub fn set_observer(&mut self, observer: impl Observer + 'static) {
        self.observer = Box::new(observer);
    }

    /// The comparator ordering this tree.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Return the number of elements in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the map contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count the nodes by walking the whole tree.
    ///
    /// Always equal to [`len`](Self::len), but takes linear time.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut visitor = CountingVisitor::default();
        self.walk(&mut visitor);
        visitor.count()
    }

    /// Remove all elements from the map
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// The root node, if any.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, K, V, Ix>> {
        self.root.map(|idx| NodeRef::new(&self.nodes, idx))
    }

    /// The node behind a handle, if the handle is in bounds.
    #[inline]
    pub fn node(&self, idx: NodeIndex<Ix>) -> Option<NodeRef<'_, K, V, Ix>> {
        (idx.index() < self.nodes.len()).then(|| NodeRef::new(&self.nodes, idx))
    }

    /// Apply `visitor` to the root position. The visitor descends on its own.
    #[inline]
    pub fn walk<Vis>(&self, visitor: &mut Vis)
    where
        Vis: Visitor<K, V, Ix> + ?Sized,
    {
        visitor.visit(self.root());
    }

    /// The entry with the smallest key.
    pub fn minimum(&self) -> Option<(&K, &V)> {
        self.root
            .map(|r| self.node_ref(self.tree_minimum(r), |n| (n.key(), n.value())))
    }

    /// The entry with the largest key.
    pub fn maximum(&self) -> Option<(&K, &V)> {
        let mut x = self.root?;
        while let Some(r) = self.node_ref(x, Node::right) {
            x = r;
        }
        Some(self.node_ref(x, |n| (n.key(), n.value())))
    }

    /// Binary tree left rotate at `x`: its right child takes its place.
    ///
    /// Returns `false`, leaving the tree untouched, when `x` is not a node of
    /// this tree or has no right child. Rotating a balanced tree by hand may
    /// break the red-black properties; later inserts and deletes assume they
    /// hold.
    pub fn rotate_left(&mut self, x: NodeIndex<Ix>) -> bool {
        let Some(y) = self.rotation_child(x, Direction::Left) else {
            return false;
        };
        let b = self.node_ref(y, Node::left);
        self.node_mut(x, Node::set_right(b));
        if let Some(b) = b {
            self.node_mut(b, Node::set_parent(Some(x)));
        }
        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(Some(x)));
        true
    }

    /// Binary tree right rotate at `x`: its left child takes its place.
    ///
    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(&mut self, x: NodeIndex<Ix>) -> bool {
        let Some(y) = self.rotation_child(x, Direction::Right) else {
            return false;
        };
        let b = self.node_ref(y, Node::right);
        self.node_mut(x, Node::set_left(b));
        if let Some(b) = b {
            self.node_mut(b, Node::set_parent(Some(x)));
        }
        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(Some(x)));
        true
    }

    /// Child promoted by a rotation in `dir` at `x`, reporting the outcome.
    fn rotation_child(&self, x: NodeIndex<Ix>, dir: Direction) -> Option<NodeIndex<Ix>> {
        let node = x.index();
        let Some(xn) = self.nodes.get(node) else {
            self.emit(Event::RotationSkipped {
                node,
                dir,
                reason: SkipReason::MissingNode,
            });
            return None;
        };
        let child = match dir {
            Direction::Left => xn.right(),
            Direction::Right => xn.left(),
        };
        match child {
            Some(_) => self.emit(Event::Rotated { node, dir }),
            None => self.emit(Event::RotationSkipped {
                node,
                dir,
                reason: SkipReason::MissingChild,
            }),
        }
        child
    }

    #[inline]
    pub(crate) fn emit(&self, event: Event) {
        self.observer.on_event(&event);
    }
}

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    K: Key,
    C: Comparator<K>,
    Ix: IndexType,
{
    /// Insert a key-value pair into the map.
    /// If the key exists, overwrite and return the previous value.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the tree, when the key fails
    /// [`Key::validate`].
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::{Error, RbTree};
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.put(Some(1), 1), Ok(None));
    /// assert_eq!(tree.put(Some(1), 2), Ok(Some(1)));
    /// assert_eq!(tree.put(None, 3), Err(Error::NilKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.accept("put", &key)?;
        let pos = self.locate(&key);
        if let Some(node) = pos.node {
            self.emit(Event::Overwritten { node: node.index() });
            return Ok(Some(self.node_mut(node, Node::set_value(value))));
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != node_idx,
            "Reached maximum number of nodes"
        );
        match (pos.parent, pos.dir) {
            (Some(parent), Some(dir)) => {
                let mut node = Node::new(key, value, Color::Red);
                node.parent = Some(parent);
                self.nodes.push(node);
                match dir {
                    Direction::Left => self.node_mut(parent, Node::set_left(Some(node_idx))),
                    Direction::Right => self.node_mut(parent, Node::set_right(Some(node_idx))),
                }
                self.emit(Event::Attached {
                    node: node_idx.index(),
                    parent: parent.index(),
                    dir,
                });
                self.insert_fixup(node_idx);
            }
            _ => {
                self.nodes.push(Node::new(key, value, Color::Black));
                self.root = Some(node_idx);
                self.emit(Event::RootCreated {
                    node: node_idx.index(),
                });
            }
        }
        self.len = self.len.wrapping_add(1);
        Ok(None)
    }

    /// Remove a key from the map, returning its value if the key was present.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.put(1, "a").unwrap();
    /// tree.put(2, "b").unwrap();
    /// assert_eq!(tree.delete(&3), None);
    /// assert_eq!(tree.delete(&2), Some("b"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let node_idx = self.search("delete", key)?;
        self.remove_inner(node_idx);
        // Swap the node with the last node stored in the vector and update indices
        let node = self.nodes.swap_remove(node_idx.index());
        let old = NodeIndex::<Ix>::new(self.nodes.len());
        self.update_idx(old, node_idx);
        Some(node.value)
    }

    /// Return reference to the value corresponding to the key.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.put(1, 10).unwrap();
    /// assert_eq!(tree.get(&1), Some(&10));
    /// assert_eq!(tree.get(&5), None);
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search("get", key)
            .map(|idx| self.node_ref(idx, Node::value))
    }

    /// Return a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.search("get_mut", key)
            .map(|idx| self.node_mut(idx, Node::value_mut))
    }

    /// Return `true` if the key is present.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.search("has", key).is_some()
    }

    /// Locate the parent of `key`, or of the position `key` would be inserted at.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::{Direction, RbTree};
    ///
    /// let mut tree = RbTree::new();
    /// tree.put(2, ()).unwrap();
    /// tree.put(1, ()).unwrap();
    /// let lookup = tree.get_parent(&1);
    /// assert!(lookup.found);
    /// assert_eq!(lookup.dir, Some(Direction::Left));
    /// assert_eq!(tree.node(lookup.parent.unwrap()).map(|n| *n.key()), Some(2));
    ///
    /// let lookup = tree.get_parent(&3);
    /// assert!(!lookup.found);
    /// assert_eq!(lookup.dir, Some(Direction::Right));
    /// ```
    pub fn get_parent(&self, key: &K) -> Lookup<Ix> {
        if self.accept("get_parent", key).is_err() {
            return Lookup {
                found: false,
                parent: None,
                dir: None,
            };
        }
        let pos = self.locate(key);
        Lookup {
            found: pos.node.is_some(),
            parent: pos.parent,
            dir: pos.dir,
        }
    }

    /// Validate a key, reporting a rejection to the observer.
    fn accept(&self, op: &'static str, key: &K) -> Result<()> {
        key.validate().map_err(|error| {
            self.emit(Event::KeyRejected { op, error });
            error
        })
    }

    /// Search for the node holding exactly `key`.
    fn search(&self, op: &'static str, key: &K) -> Option<NodeIndex<Ix>> {
        self.accept(op, key).ok()?;
        self.locate(key).node
    }

    /// Descend from the root comparing against `key`.
    fn locate(&self, key: &K) -> Position<Ix> {
        let mut parent = None;
        let mut dir = None;
        let mut x = self.root;
        while let Some(idx) = x {
            match self.cmp.compare(key, self.node_ref(idx, Node::key)) {
                Ordering::Equal => {
                    return Position {
                        node: Some(idx),
                        parent,
                        dir,
                    }
                }
                Ordering::Less => {
                    dir = Some(Direction::Left);
                    x = self.node_ref(idx, Node::left);
                }
                Ordering::Greater => {
                    dir = Some(Direction::Right);
                    x = self.node_ref(idx, Node::right);
                }
            }
            parent = Some(idx);
        }
        Position {
            node: None,
            parent,
            dir,
        }
    }
}

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    /// Remove a node from the tree.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        let x_parent;
        match (self.node_ref(z, Node::left), self.node_ref(z, Node::right)) {
            (None, child) | (child, None) => {
                x = child;
                x_parent = self.node_ref(z, Node::parent);
                self.transplant(z, x);
            }
            (Some(z_left), Some(z_right)) => {
                let y = self.tree_minimum(z_right);
                y_orig_color = self.node_ref(y, Node::color);
                x = self.node_ref(y, Node::right);
                if y == z_right {
                    x_parent = Some(y);
                } else {
                    x_parent = self.node_ref(y, Node::parent);
                    self.transplant(y, x);
                    self.node_mut(y, Node::set_right(Some(z_right)));
                    self.node_mut(z_right, Node::set_parent(Some(y)));
                }
                self.transplant(z, Some(y));
                self.node_mut(y, Node::set_left(Some(z_left)));
                self.node_mut(z_left, Node::set_parent(Some(y)));
                self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
            }
        }
        self.emit(Event::Removed { node: z.index() });

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x, x_parent);
        }

        self.len = self.len.wrapping_sub(1);
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while let Some(p) = self
            .node_ref(z, Node::parent)
            .filter(|&p| self.node_ref(p, Node::is_red))
        {
            let Some(g) = self.node_ref(p, Node::parent) else {
                break;
            };
            if self.node_ref(g, Node::left) == Some(p) {
                let y = self.node_ref(g, Node::right);
                if self.is_red(y) {
                    self.emit(Event::InsertCase {
                        case: 1,
                        side: Direction::Left,
                    });
                    self.paint(Some(p), Color::Black);
                    self.paint(y, Color::Black);
                    self.paint(Some(g), Color::Red);
                    z = g;
                } else {
                    if self.node_ref(p, Node::right) == Some(z) {
                        self.emit(Event::InsertCase {
                            case: 2,
                            side: Direction::Left,
                        });
                        z = p;
                        let _ignore = self.rotate_left(z);
                    }
                    self.emit(Event::InsertCase {
                        case: 3,
                        side: Direction::Left,
                    });
                    self.paint(self.node_ref(z, Node::parent), Color::Black);
                    self.paint(Some(g), Color::Red);
                    let _ignore = self.rotate_right(g);
                }
            } else {
                let y = self.node_ref(g, Node::left);
                if self.is_red(y) {
                    self.emit(Event::InsertCase {
                        case: 1,
                        side: Direction::Right,
                    });
                    self.paint(Some(p), Color::Black);
                    self.paint(y, Color::Black);
                    self.paint(Some(g), Color::Red);
                    z = g;
                } else {
                    if self.node_ref(p, Node::left) == Some(z) {
                        self.emit(Event::InsertCase {
                            case: 2,
                            side: Direction::Right,
                        });
                        z = p;
                        let _ignore = self.rotate_right(z);
                    }
                    self.emit(Event::InsertCase {
                        case: 3,
                        side: Direction::Right,
                    });
                    self.paint(self.node_ref(z, Node::parent), Color::Black);
                    self.paint(Some(g), Color::Red);
                    let _ignore = self.rotate_left(g);
                }
            }
        }
        self.paint(self.root, Color::Black);
    }

    /// Restore red-black tree properties after a remove.
    ///
    /// `x` may be an empty position, in which case `parent` tells where it is.
    fn remove_fixup(&mut self, mut x: Option<NodeIndex<Ix>>, mut parent: Option<NodeIndex<Ix>>) {
        while x != self.root && self.is_black(x) {
            let Some(p) = parent else {
                break;
            };
            if self.node_ref(p, Node::left) == x {
                let mut w = self.node_ref(p, Node::right);
                if self.is_red(w) {
                    self.emit(Event::DeleteCase {
                        case: 1,
                        side: Direction::Left,
                    });
                    self.paint(w, Color::Black);
                    self.paint(Some(p), Color::Red);
                    let _ignore = self.rotate_left(p);
                    w = self.node_ref(p, Node::right);
                }
                let Some(wi) = w else {
                    break;
                };
                if self.is_black(self.node_ref(wi, Node::left))
                    && self.is_black(self.node_ref(wi, Node::right))
                {
                    self.emit(Event::DeleteCase {
                        case: 2,
                        side: Direction::Left,
                    });
                    self.paint(w, Color::Red);
                    x = Some(p);
                    parent = self.node_ref(p, Node::parent);
                } else {
                    if self.is_black(self.node_ref(wi, Node::right)) {
                        self.emit(Event::DeleteCase {
                            case: 3,
                            side: Direction::Left,
                        });
                        self.paint(self.node_ref(wi, Node::left), Color::Black);
                        self.paint(w, Color::Red);
                        let _ignore = self.rotate_right(wi);
                        w = self.node_ref(p, Node::right);
                    }
                    self.emit(Event::DeleteCase {
                        case: 4,
                        side: Direction::Left,
                    });
                    self.paint(w, self.node_ref(p, Node::color));
                    self.paint(Some(p), Color::Black);
                    if let Some(wi) = w {
                        self.paint(self.node_ref(wi, Node::right), Color::Black);
                    }
                    let _ignore = self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut w = self.node_ref(p, Node::left);
                if self.is_red(w) {
                    self.emit(Event::DeleteCase {
                        case: 1,
                        side: Direction::Right,
                    });
                    self.paint(w, Color::Black);
                    self.paint(Some(p), Color::Red);
                    let _ignore = self.rotate_right(p);
                    w = self.node_ref(p, Node::left);
                }
                let Some(wi) = w else {
                    break;
                };
                if self.is_black(self.node_ref(wi, Node::right))
                    && self.is_black(self.node_ref(wi, Node::left))
                {
                    self.emit(Event::DeleteCase {
                        case: 2,
                        side: Direction::Right,
                    });
                    self.paint(w, Color::Red);
                    x = Some(p);
                    parent = self.node_ref(p, Node::parent);
                } else {
                    if self.is_black(self.node_ref(wi, Node::left)) {
                        self.emit(Event::DeleteCase {
                            case: 3,
                            side: Direction::Right,
                        });
                        self.paint(self.node_ref(wi, Node::right), Color::Black);
                        self.paint(w, Color::Red);
                        let _ignore = self.rotate_left(wi);
                        w = self.node_ref(p, Node::left);
                    }
                    self.emit(Event::DeleteCase {
                        case: 4,
                        side: Direction::Right,
                    });
                    self.paint(w, self.node_ref(p, Node::color));
                    self.paint(Some(p), Color::Black);
                    if let Some(wi) = w {
                        self.paint(self.node_ref(wi, Node::left), Color::Black);
                    }
                    let _ignore = self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }
        self.paint(x, Color::Black);
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        let xp = self.node_ref(x, Node::parent);
        self.node_mut(y, Node::set_parent(xp));
        match xp {
            None => self.root = Some(y),
            Some(p) if self.node_ref(p, Node::left) == Some(x) => {
                self.node_mut(p, Node::set_left(Some(y)));
            }
            Some(p) => self.node_mut(p, Node::set_right(Some(y))),
        }
        self.node_mut(x, Node::set_parent(Some(y)));
    }

    /// Find the node with the minimum key.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while let Some(l) = self.node_ref(x, Node::left) {
            x = l;
        }
        x
    }

    /// Replace one subtree as a child of its parent with another subtree.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: Option<NodeIndex<Ix>>) {
        let up = self.node_ref(u, Node::parent);
        match up {
            None => self.root = v,
            Some(p) if self.node_ref(p, Node::left) == Some(u) => {
                self.node_mut(p, Node::set_left(v));
            }
            Some(p) => self.node_mut(p, Node::set_right(v)),
        }
        if let Some(v) = v {
            self.node_mut(v, Node::set_parent(up));
        }
    }

    /// Update links to the node moved from `old` to `new` after a removal.
    fn update_idx(&mut self, old: NodeIndex<Ix>, new: NodeIndex<Ix>) {
        if self.nodes.get(new.index()).is_none() {
            return;
        }
        if self.root == Some(old) {
            self.root = Some(new);
        }
        if let Some(p) = self.node_ref(new, Node::parent) {
            if self.node_ref(p, Node::left) == Some(old) {
                self.node_mut(p, Node::set_left(Some(new)));
            } else {
                self.node_mut(p, Node::set_right(Some(new)));
            }
        }
        if let Some(l) = self.node_ref(new, Node::left) {
            self.node_mut(l, Node::set_parent(Some(new)));
        }
        if let Some(r) = self.node_ref(new, Node::right) {
            self.node_mut(r, Node::set_parent(Some(new)));
        }
    }

    /// Color of a position, empty positions being black.
    fn color_of(&self, x: Option<NodeIndex<Ix>>) -> Color {
        x.map_or(Color::Black, |x| self.node_ref(x, Node::color))
    }

    fn is_red(&self, x: Option<NodeIndex<Ix>>) -> bool {
        matches!(self.color_of(x), Color::Red)
    }

    fn is_black(&self, x: Option<NodeIndex<Ix>>) -> bool {
        matches!(self.color_of(x), Color::Black)
    }

    /// Recolor a position; empty positions stay black.
    fn paint(&mut self, x: Option<NodeIndex<Ix>>, color: Color) {
        if let Some(x) = x {
            self.node_mut(x, Node::set_color(color));
        }
    }
}

// Convenient methods for reference or mutate a node
impl<'a, K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }
}
