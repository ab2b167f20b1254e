//! Error taxonomy for the auction solver and its I/O boundary.

/// Errors returned by the allocating/loading entry points of this crate.
///
/// There is no `Ok` variant: success is represented by `Result::Ok`, not
/// by a member of this enum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameters: an empty graph, `N != M`, or a negative ε.
    #[error("bad input: {0}")]
    BadInput(String),
    /// A required buffer could not be acquired.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),
    /// Attempted to pop from an empty [`crate::deque::BoundedDeque`].
    ///
    /// Should never occur during normal operation; it indicates an
    /// internal invariant breach, not a caller mistake.
    #[error("attempted to pop from an empty deque")]
    EmptyDeque,
    /// A file could not be read, written, or was malformed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
