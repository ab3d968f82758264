use thiserror::Error;

/// Broad category of a key that cannot be stored in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Function pointers
    Function,
    /// Channel endpoints
    Channel,
    /// Hash or ordered maps
    Map,
    /// Owning or shared pointers
    Pointer,
    /// Vectors, slices and arrays
    Sequence,
}

/// Errors reported when a key is rejected.
///
/// Validation runs before the tree is touched, so a rejected key never
/// changes the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key is the empty value (`None`).
    #[error("the empty value is not allowed as a key")]
    NilKey,
    /// The key is a composite value that can not be used as a key.
    #[error("disallowed key kind: {0:?}")]
    DisallowedKeyKind(KeyKind),
}

/// A Result type alias using the tree's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
