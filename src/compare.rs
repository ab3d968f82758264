//! Key ordering used by `RbTree`.
//!
//! A comparator must describe a strict total order. A comparator that is not
//! total, or that panics on some pair of keys, leaves the tree in an
//! unspecified (but memory safe) shape.

use std::cmp::Ordering;

/// Total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Returns how `a` is ordered relative to `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by their raw bytes, lexicographically.
///
/// ```rust
/// use rb_tree_map::{ByteOrder, RbTree};
///
/// let mut tree = RbTree::with_comparator(ByteOrder);
/// tree.put("b".to_string(), 2).unwrap();
/// tree.put("B".to_string(), 1).unwrap();
/// assert_eq!(tree.keys().collect::<Vec<_>>(), ["B", "b"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteOrder;

impl<K: AsRef<[u8]> + ?Sized> Comparator<K> for ByteOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.as_ref().cmp(b.as_ref())
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
