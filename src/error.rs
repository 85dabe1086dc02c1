use thiserror::Error;

/// Errors reported by [`LinkedTree`](crate::LinkedTree) and its cursors.
///
/// A missing key is never an error: lookups and removals return `Option`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `next_key` was called on a cursor that has already produced every key.
    #[error("iterator is exhausted")]
    Exhausted,

    /// Bulk construction was given a different number of keys and payloads.
    /// No tree is built.
    #[error("cannot build tree: {keys} keys but {values} payloads")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of payloads supplied.
        values: usize,
    },
}

/// A `Result` using this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
