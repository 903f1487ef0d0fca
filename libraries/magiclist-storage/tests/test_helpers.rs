//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

#![allow(dead_code)]

use magiclist_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = magiclist_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        magiclist_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test band
pub async fn create_test_band(pool: &SqlitePool, name: &str) -> BandId {
    magiclist_storage::bands::create(pool, CreateBand { name: name.to_string() })
        .await
        .expect("Failed to create test band")
        .id
}

/// Test fixture: Create a test song
pub async fn create_test_song(
    pool: &SqlitePool,
    band_id: &BandId,
    title: &str,
    artist: Option<&str>,
) -> SongId {
    magiclist_storage::songs::create(
        pool,
        CreateSong {
            band_id: band_id.clone(),
            title: title.to_string(),
            artist: artist.map(String::from),
            key: None,
            duration_secs: Some(200),
        },
    )
    .await
    .expect("Failed to create test song")
    .id
}

/// Test fixture: Create a test block
pub async fn create_test_block(pool: &SqlitePool, band_id: &BandId, name: &str) -> BlockId {
    magiclist_storage::blocks::create(
        pool,
        CreateBlock {
            band_id: band_id.clone(),
            name: name.to_string(),
        },
    )
    .await
    .expect("Failed to create test block")
    .id
}

/// Test fixture: Create a block already holding songs in the given order
pub async fn create_block_with_songs(
    pool: &SqlitePool,
    band_id: &BandId,
    name: &str,
    titles: &[&str],
) -> (BlockId, Vec<SongId>) {
    let block_id = create_test_block(pool, band_id, name).await;

    let mut song_ids = Vec::with_capacity(titles.len());
    for title in titles {
        let song_id = create_test_song(pool, band_id, title, None).await;
        magiclist_storage::blocks::add_song(pool, &block_id, &song_id)
            .await
            .expect("Failed to add song to block");
        song_ids.push(song_id);
    }

    (block_id, song_ids)
}

/// Test fixture: Create a board with one column per title
pub async fn create_board_with_columns(
    pool: &SqlitePool,
    name: &str,
    column_titles: &[&str],
) -> (BoardId, Vec<ColumnId>) {
    let board = magiclist_storage::boards::create(pool, name)
        .await
        .expect("Failed to create test board");

    let mut column_ids = Vec::with_capacity(column_titles.len());
    for title in column_titles {
        let column = magiclist_storage::boards::add_column(pool, &board.id, title)
            .await
            .expect("Failed to add column");
        column_ids.push(column.id);
    }

    (board.id, column_ids)
}
