//! Error types for point ledger storage.

use point_ledger_core::PointError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for PointError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Backend(msg) => Self::Storage(msg),
        }
    }
}
