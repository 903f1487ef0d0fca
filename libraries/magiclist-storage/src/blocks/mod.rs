//! Setlist blocks and their ordered songs
//!
//! A block's song order is stored as a contiguous 0-based `position` column.
//! Reorders arrive as the full replacement order (never a diff) and are
//! written in one transaction, so a reader can never observe a half-applied
//! order.

use magiclist_core::{error::Result, types::*, MagicError};
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

/// Create a new empty block
pub async fn create(pool: &SqlitePool, input: CreateBlock) -> Result<Block> {
    let block = Block::new(input.band_id, input.name);

    sqlx::query("INSERT INTO blocks (id, band_id, name) VALUES (?, ?, ?)")
        .bind(&block.id)
        .bind(&block.band_id)
        .bind(&block.name)
        .execute(pool)
        .await?;

    Ok(block)
}

/// Get a block with its ordered song ids
pub async fn get_by_id(pool: &SqlitePool, id: &BlockId) -> Result<Option<Block>> {
    let row = sqlx::query("SELECT id, band_id, name FROM blocks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let song_ids = song_order(pool, id).await?;

    Ok(Some(Block {
        id: row.get("id"),
        band_id: row.get("band_id"),
        name: row.get("name"),
        song_ids,
    }))
}

/// Get all blocks of a band (song orders included)
pub async fn list_by_band(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<Block>> {
    let rows = sqlx::query("SELECT id, band_id, name FROM blocks WHERE band_id = ? ORDER BY name")
        .bind(band_id)
        .fetch_all(pool)
        .await?;

    let mut blocks = Vec::with_capacity(rows.len());
    for row in rows {
        let id: BlockId = row.get("id");
        let song_ids = song_order(pool, &id).await?;
        blocks.push(Block {
            id,
            band_id: row.get("band_id"),
            name: row.get("name"),
            song_ids,
        });
    }

    Ok(blocks)
}

/// The block's current song order
pub async fn song_order(pool: &SqlitePool, id: &BlockId) -> Result<Vec<SongId>> {
    let rows = sqlx::query("SELECT song_id FROM block_songs WHERE block_id = ? ORDER BY position")
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("song_id")).collect())
}

/// Append a song to the end of a block
pub async fn add_song(pool: &SqlitePool, block_id: &BlockId, song_id: &SongId) -> Result<()> {
    ensure_block_exists(pool, block_id).await?;

    let next_position: i64 = sqlx::query(
        "SELECT COALESCE(MAX(position), -1) + 1 AS next_pos FROM block_songs WHERE block_id = ?",
    )
    .bind(block_id)
    .fetch_one(pool)
    .await?
    .get("next_pos");

    sqlx::query(
        r#"
        INSERT INTO block_songs (block_id, song_id, position)
        VALUES (?, ?, ?)
        ON CONFLICT(block_id, song_id) DO NOTHING
        "#,
    )
    .bind(block_id)
    .bind(song_id)
    .bind(next_position)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a song from a block, compacting the remaining positions
pub async fn remove_song(pool: &SqlitePool, block_id: &BlockId, song_id: &SongId) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM block_songs WHERE block_id = ? AND song_id = ?")
        .bind(block_id)
        .bind(song_id)
        .execute(&mut *tx)
        .await?;

    compact_positions(&mut tx, block_id).await?;

    tx.commit().await?;

    Ok(())
}

/// Replace the block's entire song order.
///
/// This is the durable half of a reorder: the ordering engine already
/// produced the full new order, and this call swaps it in wholesale. The
/// write is idempotent: replaying the same order is a no-op in effect.
pub async fn set_song_order(pool: &SqlitePool, block_id: &BlockId, order: &[SongId]) -> Result<()> {
    ensure_block_exists(pool, block_id).await?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM block_songs WHERE block_id = ?")
        .bind(block_id)
        .execute(&mut *tx)
        .await?;

    for (position, song_id) in order.iter().enumerate() {
        sqlx::query("INSERT INTO block_songs (block_id, song_id, position) VALUES (?, ?, ?)")
            .bind(block_id)
            .bind(song_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                // A duplicate song id in the replacement order trips the
                // (block_id, song_id) primary key
                MagicError::invalid_input(format!(
                    "invalid replacement order for block {block_id}: {e}"
                ))
            })?;
    }

    tx.commit().await?;

    Ok(())
}

/// Delete a block (song membership cascades)
pub async fn delete(pool: &SqlitePool, id: &BlockId) -> Result<()> {
    let result = sqlx::query("DELETE FROM blocks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MagicError::not_found("Block", id.as_str()));
    }

    Ok(())
}

/// Rewrite positions to 0..n after a removal left a gap
pub(crate) async fn compact_positions(
    tx: &mut Transaction<'_, Sqlite>,
    block_id: &BlockId,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE block_songs
        SET position = (
            SELECT COUNT(*)
            FROM block_songs bs2
            WHERE bs2.block_id = block_songs.block_id
              AND bs2.position < block_songs.position
        )
        WHERE block_id = ?
        "#,
    )
    .bind(block_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn ensure_block_exists(pool: &SqlitePool, id: &BlockId) -> Result<()> {
    let exists = sqlx::query("SELECT 1 FROM blocks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if exists.is_none() {
        return Err(MagicError::not_found("Block", id.as_str()));
    }

    Ok(())
}
