//! Domain errors
//!
//! All failure states are user-facing and locally recoverable: an empty
//! query result is a message, not a crash.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by quote operations
#[derive(Error, Debug)]
pub enum QuipError {
    /// A topic lookup matched nothing
    #[error("No quotes found for this topic: '{topic}'")]
    NoQuotesFound { topic: String },

    /// Random selection over an empty candidate list
    #[error("No quotes to choose from")]
    EmptyCandidates,

    /// Persistence failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for quote operations
pub type QuipResult<T> = Result<T, QuipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_quotes_found_display() {
        let err = QuipError::NoQuotesFound {
            topic: "cooking".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("No quotes found"));
        assert!(msg.contains("cooking"));
    }
}
