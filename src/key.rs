//! Validation of keys before they reach the tree.
//!
//! Every key type stored in an `RbTree` implements [`Key`]. Scalars and
//! strings are always accepted, `None` is rejected as [`Error::NilKey`],
//! and composite values are rejected as [`Error::DisallowedKeyKind`].
//! Custom key types accept themselves with an empty impl:
//!
//! ```rust
//! use rb_tree_map::Key;
//!
//! #[derive(PartialEq, Eq, PartialOrd, Ord)]
//! struct Ticket(u64);
//!
//! impl Key for Ticket {}
//! ```

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use crate::error::{Error, KeyKind, Result};

/// A value that can be checked for use as a tree key.
pub trait Key {
    /// Check that the value is usable as a key.
    #[inline]
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

macro_rules! accept {
    ($($ty:ty),*) => {
        $(impl Key for $ty {})*
    };
}

accept!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    ()
);

impl Key for &str {}

macro_rules! reject {
    ($kind:expr => $($ty:ty),*) => {
        $(
            impl<T> Key for $ty {
                #[inline]
                fn validate(&self) -> Result<()> {
                    Err(Error::DisallowedKeyKind($kind))
                }
            }
        )*
    };
}

reject!(KeyKind::Sequence => Vec<T>, &[T]);
reject!(KeyKind::Channel => Sender<T>, Receiver<T>);

impl<T: ?Sized> Key for Box<T> {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Pointer))
    }
}

impl<T: ?Sized> Key for Rc<T> {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Pointer))
    }
}

impl<T: ?Sized> Key for Arc<T> {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Pointer))
    }
}

impl<T, const N: usize> Key for [T; N] {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Sequence))
    }
}

impl<A, B, S> Key for HashMap<A, B, S> {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Map))
    }
}

impl<A, B> Key for BTreeMap<A, B> {
    #[inline]
    fn validate(&self) -> Result<()> {
        Err(Error::DisallowedKeyKind(KeyKind::Map))
    }
}

macro_rules! reject_fn {
    ($(($($arg:ident),*)),*) => {
        $(
            impl<R, $($arg),*> Key for fn($($arg),*) -> R {
                #[inline]
                fn validate(&self) -> Result<()> {
                    Err(Error::DisallowedKeyKind(KeyKind::Function))
                }
            }
        )*
    };
}

reject_fn!((), (A), (A, B), (A, B, C));

impl<K: Key> Key for Option<K> {
    #[inline]
    fn validate(&self) -> Result<()> {
        match self {
            Some(key) => key.validate(),
            None => Err(Error::NilKey),
        }
    }
}

impl<A: Key, B: Key> Key for (A, B) {
    #[inline]
    fn validate(&self) -> Result<()> {
        self.0.validate()?;
        self.1.validate()
    }
}

impl<A: Key, B: Key, C: Key> Key for (A, B, C) {
    #[inline]
    fn validate(&self) -> Result<()> {
        self.0.validate()?;
        self.1.validate()?;
        self.2.validate()
    }
}
