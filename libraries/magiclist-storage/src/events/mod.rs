use crate::bands::timestamp;
use magiclist_core::{error::Result, types::*, MagicError};
use sqlx::{Row, SqlitePool};

/// Create a new event
pub async fn create(pool: &SqlitePool, input: CreateEvent) -> Result<Event> {
    let mut event = Event::new(input.band_id, input.kind, input.name, input.starts_at);
    event.location = input.location;

    sqlx::query(
        r#"
        INSERT INTO events (id, band_id, kind, name, starts_at, location)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&event.id)
    .bind(&event.band_id)
    .bind(event.kind.as_str())
    .bind(&event.name)
    .bind(event.starts_at.timestamp())
    .bind(&event.location)
    .execute(pool)
    .await?;

    Ok(event)
}

/// Get a band's events, chronological
pub async fn list_by_band(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<Event>> {
    let rows = sqlx::query(
        r#"
        SELECT id, band_id, kind, name, starts_at, location
        FROM events
        WHERE band_id = ?
        ORDER BY starts_at
        "#,
    )
    .bind(band_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let kind_tag: String = row.get("kind");
            let kind = EventKind::parse(&kind_tag).ok_or_else(|| {
                MagicError::storage(format!("Unknown event kind in database: {kind_tag}"))
            })?;

            Ok(Event {
                id: row.get("id"),
                band_id: row.get("band_id"),
                kind,
                name: row.get("name"),
                starts_at: timestamp(row.get("starts_at"))?,
                location: row.get("location"),
            })
        })
        .collect()
}

/// Event counts per `YYYY-MM` bucket, oldest first (feeds the activity chart)
pub async fn count_by_month(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<MonthBucket>> {
    let rows = sqlx::query(
        r#"
        SELECT strftime('%Y-%m', starts_at, 'unixepoch') AS month, COUNT(*) AS count
        FROM events
        WHERE band_id = ?
        GROUP BY month
        ORDER BY month
        "#,
    )
    .bind(band_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| MonthBucket {
            month: row.get("month"),
            count: row.get("count"),
        })
        .collect())
}

/// Delete an event
pub async fn delete(pool: &SqlitePool, id: &EventId) -> Result<()> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MagicError::not_found("Event", id.as_str()));
    }

    Ok(())
}
