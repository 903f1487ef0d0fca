//! MagicList Storage
//!
//! `SQLite` database layer for MagicList: bands, songs, setlist blocks,
//! kanban boards, and events, with positional ordering for every
//! user-draggable list.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Order as Positions**: A list's order is stored as a contiguous
//!   0-based `position` column and replaced wholesale on reorder
//! - **OrderStore Implementations**: `BlockOrderStore` / `ColumnOrderStore`
//!   plug the ordering engine's write queue into this database
//!
//! # Example
//!
//! ```rust,no_run
//! use magiclist_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://magiclist.db").await?;
//! run_migrations(&pool).await?;
//!
//! let bands = magiclist_storage::bands::list(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod bands;
pub mod blocks;
pub mod boards;
pub mod events;
pub mod songs;

// OrderStore implementations for the ordering engine
pub mod store;

pub use error::StorageError;
pub use store::{BlockOrderStore, ColumnOrderStore};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns [`StorageError::Migration`] if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://magiclist.db>`)
///
/// # Errors
///
/// Returns [`StorageError::Connection`] if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = %database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .foreign_keys(true) // Needed for the ON DELETE CASCADE constraints
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
