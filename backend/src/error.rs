//! Store error handling
//!
//! Failures surface synchronously to the immediate caller; nothing in the
//! core retries or rolls back.

use thiserror::Error;

/// Errors produced by the client store and record mutators
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence collaborator rejected a load or save. The in-memory
    /// collection may now differ from the persisted snapshot.
    #[error("Persistence error")]
    Persistence(#[from] anyhow::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = StoreError::Validation("Weight must be positive".to_string());
        assert_eq!(err.to_string(), "Validation error: Weight must be positive");
    }

    #[test]
    fn test_persistence_error_keeps_context_chain() {
        let inner = anyhow::anyhow!("disk full").context("saving snapshot");
        let err = StoreError::Persistence(inner);
        let chain = format!("{:?}", err);
        assert!(chain.contains("disk full"));
    }
}
