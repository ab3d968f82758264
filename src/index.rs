use std::fmt;
use std::hash::Hash;

/// Default index type of the node arena.
pub type DefaultIx = u32;

/// Integer types usable as arena slot numbers.
///
/// # Safety
///
/// `new` and `index` must round-trip for every value in `0..=max().index()`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

macro_rules! impl_index_type {
    ($($ty:ty),*) => {
        $(
            unsafe impl IndexType for $ty {
                #[inline(always)]
                fn new(x: usize) -> Self {
                    x as $ty
                }
                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }
                #[inline(always)]
                fn max() -> Self {
                    <$ty>::MAX
                }
            }
        )*
    };
}

impl_index_type!(u16, u32, usize);

/// Handle of a node stored in a tree.
///
/// Handles are invalidated by `delete` and `clear`.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    #[inline]
    pub(crate) fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    /// Arena slot of this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The first slot that can never be allocated.
    #[inline]
    pub(crate) fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
