use magiclist_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// Create a new band
pub async fn create(pool: &SqlitePool, input: CreateBand) -> Result<Band> {
    let band = Band::new(input.name);

    sqlx::query("INSERT INTO bands (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&band.id)
        .bind(&band.name)
        .bind(band.created_at.timestamp())
        .execute(pool)
        .await?;

    Ok(band)
}

/// Get band by ID
pub async fn get_by_id(pool: &SqlitePool, id: &BandId) -> Result<Option<Band>> {
    let row = sqlx::query("SELECT id, name, created_at FROM bands WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(Band::with_id(
            row.get("id"),
            row.get::<String, _>("name"),
            timestamp(row.get("created_at"))?,
        ))
    })
    .transpose()
}

/// Get all bands, newest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Band>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM bands ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| {
            Ok(Band::with_id(
                row.get("id"),
                row.get::<String, _>("name"),
                timestamp(row.get("created_at"))?,
            ))
        })
        .collect()
}

/// Add a member to a band
pub async fn add_member(
    pool: &SqlitePool,
    band_id: &BandId,
    name: &str,
    instrument: Option<&str>,
) -> Result<Member> {
    let member = Member {
        id: uuid_string(),
        band_id: band_id.clone(),
        name: name.to_string(),
        instrument: instrument.map(String::from),
    };

    sqlx::query("INSERT INTO members (id, band_id, name, instrument) VALUES (?, ?, ?, ?)")
        .bind(&member.id)
        .bind(&member.band_id)
        .bind(&member.name)
        .bind(&member.instrument)
        .execute(pool)
        .await?;

    Ok(member)
}

/// Get a band's members, alphabetical
pub async fn list_members(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<Member>> {
    let rows = sqlx::query(
        "SELECT id, band_id, name, instrument FROM members WHERE band_id = ? ORDER BY name",
    )
    .bind(band_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Member {
            id: row.get("id"),
            band_id: row.get("band_id"),
            name: row.get("name"),
            instrument: row.get("instrument"),
        })
        .collect())
}

/// Delete a band (members, songs, blocks, and events cascade)
pub async fn delete(pool: &SqlitePool, id: &BandId) -> Result<()> {
    let result = sqlx::query("DELETE FROM bands WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(magiclist_core::MagicError::not_found("Band", id.as_str()));
    }

    Ok(())
}

pub(crate) fn timestamp(secs: i64) -> Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| magiclist_core::MagicError::storage("Invalid timestamp"))
}

pub(crate) fn uuid_string() -> String {
    uuid::Uuid::new_v4().to_string()
}
