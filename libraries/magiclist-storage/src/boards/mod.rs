//! Study kanban boards
//!
//! Card order within a column is a contiguous 0-based `position` column;
//! `column_cards` is keyed by card id, so the database itself enforces that
//! a card lives in at most one column. Cross-column moves replace both
//! affected columns' orders in one transaction.

use magiclist_core::{error::Result, types::*, MagicError};
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

/// Create a new board
pub async fn create(pool: &SqlitePool, name: &str) -> Result<Board> {
    let board = Board::new(name);

    sqlx::query("INSERT INTO boards (id, name) VALUES (?, ?)")
        .bind(&board.id)
        .bind(&board.name)
        .execute(pool)
        .await?;

    Ok(board)
}

/// Add a column at the end of a board
pub async fn add_column(pool: &SqlitePool, board_id: &BoardId, title: &str) -> Result<Column> {
    let column = Column::new(board_id.clone(), title);

    let next_position: i64 = sqlx::query(
        "SELECT COALESCE(MAX(position), -1) + 1 AS next_pos FROM columns WHERE board_id = ?",
    )
    .bind(board_id)
    .fetch_one(pool)
    .await?
    .get("next_pos");

    sqlx::query("INSERT INTO columns (id, board_id, title, position) VALUES (?, ?, ?, ?)")
        .bind(&column.id)
        .bind(board_id)
        .bind(&column.title)
        .bind(next_position)
        .execute(pool)
        .await?;

    Ok(column)
}

/// Get a board with its columns and their ordered card ids
pub async fn get_board(
    pool: &SqlitePool,
    board_id: &BoardId,
) -> Result<Option<(Board, Vec<Column>)>> {
    let row = sqlx::query("SELECT id, name FROM boards WHERE id = ?")
        .bind(board_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let board = Board {
        id: row.get("id"),
        name: row.get("name"),
    };

    let column_rows =
        sqlx::query("SELECT id, board_id, title FROM columns WHERE board_id = ? ORDER BY position")
            .bind(board_id)
            .fetch_all(pool)
            .await?;

    let mut columns = Vec::with_capacity(column_rows.len());
    for row in column_rows {
        let id: ColumnId = row.get("id");
        let card_ids = card_order(pool, &id).await?;
        columns.push(Column {
            id,
            board_id: row.get("board_id"),
            title: row.get("title"),
            card_ids,
        });
    }

    Ok(Some((board, columns)))
}

/// The column's current card order
pub async fn card_order(pool: &SqlitePool, column_id: &ColumnId) -> Result<Vec<CardId>> {
    let rows = sqlx::query("SELECT card_id FROM column_cards WHERE column_id = ? ORDER BY position")
        .bind(column_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|row| row.get("card_id")).collect())
}

/// Create a card at the end of a column
pub async fn add_card(
    pool: &SqlitePool,
    column_id: &ColumnId,
    title: &str,
    notes: Option<&str>,
) -> Result<Card> {
    ensure_column_exists(pool, column_id).await?;

    let mut card = Card::new(title);
    card.notes = notes.map(String::from);

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO cards (id, title, notes) VALUES (?, ?, ?)")
        .bind(&card.id)
        .bind(&card.title)
        .bind(&card.notes)
        .execute(&mut *tx)
        .await?;

    let next_position: i64 = sqlx::query(
        "SELECT COALESCE(MAX(position), -1) + 1 AS next_pos FROM column_cards WHERE column_id = ?",
    )
    .bind(column_id)
    .fetch_one(&mut *tx)
    .await?
    .get("next_pos");

    sqlx::query("INSERT INTO column_cards (card_id, column_id, position) VALUES (?, ?, ?)")
        .bind(&card.id)
        .bind(column_id)
        .bind(next_position)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(card)
}

/// Replace one column's entire card order.
///
/// Cards named in the new order that currently sit in another column are
/// pulled into this one (the upsert rewrites their `column_id`), which is
/// how the second half of a cross-column move lands.
pub async fn set_card_order(
    pool: &SqlitePool,
    column_id: &ColumnId,
    order: &[CardId],
) -> Result<()> {
    ensure_column_exists(pool, column_id).await?;

    let mut tx = pool.begin().await?;
    replace_column_order(&mut tx, column_id, order).await?;
    tx.commit().await?;

    Ok(())
}

/// Persist a cross-column move: both affected columns' full replacement
/// orders, committed atomically.
pub async fn move_card(
    pool: &SqlitePool,
    source_column: &ColumnId,
    source_order: &[CardId],
    destination_column: &ColumnId,
    destination_order: &[CardId],
) -> Result<()> {
    ensure_column_exists(pool, source_column).await?;
    ensure_column_exists(pool, destination_column).await?;

    let mut tx = pool.begin().await?;
    replace_column_order(&mut tx, source_column, source_order).await?;
    replace_column_order(&mut tx, destination_column, destination_order).await?;
    tx.commit().await?;

    Ok(())
}

/// Delete a card everywhere
pub async fn delete_card(pool: &SqlitePool, card_id: &CardId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let column: Option<ColumnId> =
        sqlx::query("SELECT column_id FROM column_cards WHERE card_id = ?")
            .bind(card_id)
            .fetch_optional(&mut *tx)
            .await?
            .map(|row| row.get("column_id"));

    let result = sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(card_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MagicError::not_found("Card", card_id.as_str()));
    }

    if let Some(column_id) = column {
        compact_positions(&mut tx, &column_id).await?;
    }

    tx.commit().await?;

    Ok(())
}

async fn replace_column_order(
    tx: &mut Transaction<'_, Sqlite>,
    column_id: &ColumnId,
    order: &[CardId],
) -> Result<()> {
    sqlx::query("DELETE FROM column_cards WHERE column_id = ?")
        .bind(column_id)
        .execute(&mut **tx)
        .await?;

    for (position, card_id) in order.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO column_cards (card_id, column_id, position)
            VALUES (?, ?, ?)
            ON CONFLICT(card_id) DO UPDATE SET
                column_id = excluded.column_id,
                position = excluded.position
            "#,
        )
        .bind(card_id)
        .bind(column_id)
        .bind(position as i64)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn compact_positions(tx: &mut Transaction<'_, Sqlite>, column_id: &ColumnId) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE column_cards
        SET position = (
            SELECT COUNT(*)
            FROM column_cards cc2
            WHERE cc2.column_id = column_cards.column_id
              AND cc2.position < column_cards.position
        )
        WHERE column_id = ?
        "#,
    )
    .bind(column_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn ensure_column_exists(pool: &SqlitePool, id: &ColumnId) -> Result<()> {
    let exists = sqlx::query("SELECT 1 FROM columns WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if exists.is_none() {
        return Err(MagicError::not_found("Column", id.as_str()));
    }

    Ok(())
}
