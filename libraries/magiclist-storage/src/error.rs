//! Storage-specific errors
use thiserror::Error;

/// Errors from opening the database or bringing its schema up to date.
///
/// Query-level failures inside the vertical slices surface directly as
/// [`magiclist_core::MagicError`]; this type covers the setup phase, where
/// callers may want to distinguish a bad connection string from a failed
/// migration.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for magiclist_core::MagicError {
    fn from(err: StorageError) -> Self {
        magiclist_core::MagicError::storage(err.to_string())
    }
}
