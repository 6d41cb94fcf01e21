//! Error types for queue construction and record validation.

use thiserror::Error;

/// Result type alias for fallible `procq` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for `procq` operations.
///
/// An empty queue is not an error: [`Queue::dequeue`](crate::Queue::dequeue) and
/// [`Queue::peek_front`](crate::Queue::peek_front) report it with `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument given to a constructor
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// The argument name
        parameter: &'static str,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Record attribute outside its valid domain
    #[error("Malformed record '{name}': {reason}")]
    MalformedRecord {
        /// Name of the offending record
        name: String,
        /// Explanation of the problem
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidArgument {
            parameter: "initial_capacity",
            reason: format!("must be at least 1, got {capacity}"),
        }
    }
}
