use crate::bands::timestamp;
use magiclist_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

fn song_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.get("id"),
        band_id: row.get("band_id"),
        title: row.get("title"),
        artist: row.get("artist"),
        key: row.get("key"),
        duration_secs: row.get::<Option<i64>, _>("duration_secs").map(|d| d as u32),
        created_at: timestamp(row.get("created_at"))?,
    })
}

/// Create a new song
pub async fn create(pool: &SqlitePool, input: CreateSong) -> Result<Song> {
    let song = Song {
        id: SongId::generate(),
        band_id: input.band_id,
        title: input.title,
        artist: input.artist,
        key: input.key,
        duration_secs: input.duration_secs,
        created_at: chrono::Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO songs (id, band_id, title, artist, key, duration_secs, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&song.id)
    .bind(&song.band_id)
    .bind(&song.title)
    .bind(&song.artist)
    .bind(&song.key)
    .bind(song.duration_secs.map(i64::from))
    .bind(song.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(song)
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, band_id, title, artist, key, duration_secs, created_at FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| song_from_row(&row)).transpose()
}

/// Get a band's full repertoire, alphabetical by title
pub async fn list_by_band(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT id, band_id, title, artist, key, duration_secs, created_at
        FROM songs
        WHERE band_id = ?
        ORDER BY title
        "#,
    )
    .bind(band_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Search a band's songs by title or artist substring
pub async fn search(pool: &SqlitePool, band_id: &BandId, query: &str) -> Result<Vec<Song>> {
    let pattern = format!("%{}%", query);

    let rows = sqlx::query(
        r#"
        SELECT id, band_id, title, artist, key, duration_secs, created_at
        FROM songs
        WHERE band_id = ? AND (title LIKE ? OR artist LIKE ?)
        ORDER BY title
        "#,
    )
    .bind(band_id)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Update a song (None fields are left unchanged)
pub async fn update(pool: &SqlitePool, id: &SongId, update: UpdateSong) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE songs SET
            title = COALESCE(?, title),
            artist = COALESCE(?, artist),
            key = COALESCE(?, key),
            duration_secs = COALESCE(?, duration_secs)
        WHERE id = ?
        "#,
    )
    .bind(&update.title)
    .bind(&update.artist)
    .bind(&update.key)
    .bind(update.duration_secs.map(i64::from))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(magiclist_core::MagicError::not_found("Song", id.as_str()));
    }

    Ok(())
}

/// Delete a song (block membership cascades, positions in affected blocks
/// are compacted)
pub async fn delete(pool: &SqlitePool, id: &SongId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let blocks: Vec<BlockId> = sqlx::query("SELECT block_id FROM block_songs WHERE song_id = ?")
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|row| row.get("block_id"))
        .collect();

    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(magiclist_core::MagicError::not_found("Song", id.as_str()));
    }

    for block_id in blocks {
        crate::blocks::compact_positions(&mut tx, &block_id).await?;
    }

    tx.commit().await?;

    Ok(())
}
