//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors reported while building a cipher or transforming a block.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The parameter combination cannot drive the key schedule recurrence.
    #[error("invalid cipher parameters: {reason}")]
    InvalidParameters {
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// The raw key does not have the configured length.
    #[error("invalid key length: expected {expected}, got {actual}")]
    KeyLength {
        /// Expected length (words for word keys, bytes for byte keys).
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A block does not match the block size of the cipher it was passed to.
    #[error("invalid block length: expected {expected}, got {actual}")]
    BlockLength {
        /// Expected length (words or bytes, depending on the call).
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A byte buffer cannot be split into whole words.
    #[error("byte length {actual} is not a multiple of 4")]
    ByteLength {
        /// Length that was supplied.
        actual: usize,
    },

    /// The key schedule could not be allocated.
    #[error("failed to allocate a key schedule of {words} words")]
    Allocation {
        /// Requested schedule size in words.
        words: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
