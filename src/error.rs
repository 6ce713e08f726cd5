//! Error handling for trie operations.

use thiserror::Error;

/// Errors that can occur in trie operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The key, prefix or pattern handed to an operation is unusable
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },
}

impl TrieError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for trie operations
pub type Result<T> = std::result::Result<T, TrieError>;
