//! Partition store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading, saving or validating a partition store.
///
/// The planner and executor never produce these; they only surface at the
/// data-source boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate user id {user_id} (node {node})")]
    DuplicateUser { user_id: u64, node: usize },

    #[error("Duplicate order id {order_id} (node {node})")]
    DuplicateOrder { order_id: u64, node: usize },

    #[error("Order {order_id} has non-positive quantity")]
    InvalidQuantity { order_id: u64 },
}

impl StoreError {
    /// Whether the error comes from the snapshot contents rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateUser { .. }
                | StoreError::DuplicateOrder { .. }
                | StoreError::InvalidQuantity { .. }
        )
    }
}
