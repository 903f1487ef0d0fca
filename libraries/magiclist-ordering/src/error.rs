//! Error types for the ordering engine

use thiserror::Error;

/// Ordering errors
///
/// Out-of-range indices and unknown containers are programming errors in the
/// caller (typically a stale index from the UI layer) and fail fast here
/// rather than being clamped, so they surface during testing instead of
/// silently corrupting order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Index out of bounds for the list it was applied to
    #[error("Index {index} out of bounds for list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Referenced container id is absent from the container map
    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    /// An item appeared more than once in a list (or across containers)
    #[error("Duplicate item in ordered list: {0}")]
    DuplicateItem(String),
}

/// Result type for ordering operations
pub type Result<T> = std::result::Result<T, OrderError>;
