//! Structural events emitted by a tree and the sinks that receive them.
//!
//! Each tree owns its own sink. The default sink forwards events to the
//! [`log`] facade at `trace` level (rejections and skipped rotations at
//! `warn`), so turning tracing on or off is a matter of configuring the
//! installed logger.

use std::fmt;

use crate::error::Error;

/// Side of a parent a node hangs from, or a rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left child / left rotation
    Left,
    /// Right child / right rotation
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Why a rotation was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The handle does not refer to a node of the tree.
    MissingNode,
    /// The child that would be promoted is absent.
    MissingChild,
}

/// A structural event. Node fields are arena slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// The first node became the black root.
    RootCreated { node: usize },
    /// A new red node was attached below `parent`.
    Attached {
        node: usize,
        parent: usize,
        dir: Direction,
    },
    /// An existing key had its value replaced.
    Overwritten { node: usize },
    /// A node was unlinked from the tree.
    Removed { node: usize },
    /// A rotation at `node` was applied.
    Rotated { node: usize, dir: Direction },
    /// A rotation request was ignored.
    RotationSkipped {
        node: usize,
        dir: Direction,
        reason: SkipReason,
    },
    /// An insert fix-up case was applied. `side` is the side of the parent
    /// relative to the grandparent.
    InsertCase { case: u8, side: Direction },
    /// A delete fix-up case was applied. `side` is the side of the deficient
    /// position relative to its parent.
    DeleteCase { case: u8, side: Direction },
    /// An operation was aborted because its key failed validation.
    KeyRejected { op: &'static str, error: Error },
    /// A range query finished.
    RangeQueried {
        split: Option<usize>,
        collected: usize,
    },
}

/// Receiver of structural events.
pub trait Observer: fmt::Debug + Send + Sync {
    /// Called synchronously for every event.
    fn on_event(&self, event: &Event);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_event(&self, event: &Event) {
        match *event {
            Event::RootCreated { node } => log::trace!("added node {node} as root"),
            Event::Attached { node, parent, dir } => {
                log::trace!("added node {node} as {dir} child of node {parent}")
            }
            Event::Overwritten { node } => log::trace!("overwrote value of node {node}"),
            Event::Removed { node } => log::trace!("removed node {node}"),
            Event::Rotated { node, dir } => log::trace!("rotate {dir} at node {node}"),
            Event::RotationSkipped { node, dir, reason } => {
                log::warn!("rotate {dir} at node {node} skipped: {reason:?}")
            }
            Event::InsertCase { case, side } => {
                log::trace!("insert fix-up case {case}, parent on the {side}")
            }
            Event::DeleteCase { case, side } => {
                log::trace!("delete fix-up case {case}, deficiency on the {side}")
            }
            Event::KeyRejected { op, error } => log::warn!("{op} was aborted: {error}"),
            Event::RangeQueried {
                split: Some(split),
                collected,
            } => log::debug!("range query split at node {split}, collected {collected} keys"),
            Event::RangeQueried { split: None, .. } => log::debug!("range query found no split node"),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn on_event(&self, _event: &Event) {}
}
