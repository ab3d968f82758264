//! `rb_tree_map` is an ordered map based on a red-black tree.
//!
//! It fully implements the insertion and deletion functionality of a red-black tree,
//! ensuring that each modification operation requires at most O(logN) time complexity,
//! and iterates its entries in key order.
//!
//! Nodes are kept in a vector and refer to their children and parent by index, so the parent back-links needed by the fix-up routines never form
//! ownership cycles. Keys are ordered by a [`Comparator`] supplied when the tree is
//! created ([`Natural`] by default) and checked by [`Key::validate`] before use.
//!
//! Structural events (attachments, rotations, fix-up cases, rejected keys) are sent to
//! an [`Observer`] owned by each tree. The default [`LogObserver`] forwards them to the
//! `log` facade, so tracing is switched on and off through the installed logger.
//!
//! The tree is not synchronized; share it behind a lock to mutate it from several
//! threads.
//!
//! # Example
//!
//! ```rust
//! use rb_tree_map::RbTree;
//!
//! let mut tree = RbTree::new();
//! tree.put(2, "two").unwrap();
//! tree.put(1, "one").unwrap();
//! assert_eq!(tree.get(&2), Some(&"two"));
//! assert!(tree.has(&1));
//! assert_eq!(tree.delete(&1), Some("one"));
//! assert_eq!(tree.size(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: [`RbTree::snapshot`] exposes the tree shape for serialization.
//! - `graphviz`: `RbTree::draw` writes the tree as a `dot` file.

mod compare;
mod error;
#[cfg(feature = "graphviz")]
mod graphviz;
mod index;
mod iter;
mod key;
mod layout;
mod node;
mod observer;
mod range;
#[cfg(feature = "serde")]
mod snapshot;
mod tree;
mod visitor;

#[cfg(test)]
mod tests;

pub use compare::{ByteOrder, Comparator, Natural};
pub use error::{Error, KeyKind, Result};
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use key::Key;
pub use layout::Layout;
pub use node::{Color, NodeRef};
pub use observer::{Direction, Event, LogObserver, Observer, Silent, SkipReason};
pub use range::IntegerKey;
#[cfg(feature = "serde")]
pub use snapshot::Snapshot;
pub use tree::{Lookup, RbTree};
pub use visitor::{CountingVisitor, InorderVisitor, Visitor};
