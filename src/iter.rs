use crate::compare::{Comparator, Natural};
use crate::index::{IndexType, NodeIndex};
use crate::key::Key;
use crate::node::Node;
use crate::tree::RbTree;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, V, Ix>(
    nodes: &[Node<K, V, Ix>],
    mut x: Option<NodeIndex<Ix>>,
    stack: &mut Vec<NodeIndex<Ix>>,
) where
    Ix: IndexType,
{
    while let Some(idx) = x {
        stack.push(idx);
        x = nodes[idx.index()].left();
    }
}

/// An iterator over the entries of a `RbTree`, sorted by key.
#[derive(Debug)]
pub struct Iter<'a, K, V, Ix> {
    /// Nodes of the tree
    nodes: &'a [Node<K, V, Ix>],
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
    /// Entries not yielded yet
    remaining: usize,
}

impl<'a, K, V, Ix> Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    fn new(nodes: &'a [Node<K, V, Ix>], root: Option<NodeIndex<Ix>>, len: usize) -> Self {
        let mut stack = Vec::new();
        left_link(nodes, root, &mut stack);
        Iter {
            nodes,
            stack,
            remaining: len,
        }
    }
}

impl<'a, K, V, Ix> Iterator for Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        let node = &self.nodes[x.index()];
        left_link(self.nodes, node.right(), &mut self.stack);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key(), node.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.remaining))
    }
}

/// An iterator over the keys of a `RbTree`, sorted.
#[derive(Debug)]
pub struct Keys<'a, K, V, Ix>(Iter<'a, K, V, Ix>);

impl<'a, K, V, Ix: IndexType> Iterator for Keys<'a, K, V, Ix> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `RbTree`, sorted by key.
#[derive(Debug)]
pub struct Values<'a, K, V, Ix>(Iter<'a, K, V, Ix>);

impl<'a, K, V, Ix: IndexType> Iterator for Values<'a, K, V, Ix> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }
}

/// An owning iterator over the entries of a `RbTree`, sorted by key.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    /// Get an iterator over the entries of the map, sorted by key.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree_map::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// for k in [5, 1, 3] {
    ///     tree.put(k, k * 10).unwrap();
    /// }
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(&1, &10), (&3, &30), (&5, &50)]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, Ix> {
        Iter::new(&self.nodes, self.root, self.len)
    }

    /// Get an iterator over the keys of the map, sorted.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V, Ix> {
        Keys(self.iter())
    }

    /// Get an iterator over the values of the map, sorted by key.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V, Ix> {
        Values(self.iter())
    }
}

impl<K, V, C, Ix> IntoIterator for RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        left_link(&self.nodes, self.root, &mut stack);
        while let Some(x) = stack.pop() {
            order.push(x.index());
            left_link(&self.nodes, self.nodes[x.index()].right(), &mut stack);
        }
        let mut slots: Vec<_> = self.nodes.into_iter().map(Some).collect();
        let entries: Vec<_> = order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .map(|node| (node.key, node.value))
            .collect();
        IntoIter {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V, C, Ix> IntoIterator for &'a RbTree<K, V, C, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C, Ix> Extend<(K, V)> for RbTree<K, V, C, Ix>
where
    K: Key,
    C: Comparator<K>,
    Ix: IndexType,
{
    /// Insert every pair; pairs with a rejected key are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ignore = self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V>
where
    K: Key + Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RbTree::with_comparator(Natural);
        tree.extend(iter);
        tree
    }
}
