//! `OrderStore` implementations over the `SQLite` pool
//!
//! These are the persistence adapters the ordering engine's write queue
//! talks to: one for setlist blocks (songs), one for kanban columns (cards).
//! Both take the full replacement order and are idempotent under retry.

use async_trait::async_trait;
use magiclist_core::{BlockId, CardId, ColumnId, OrderStore, SongId};
use sqlx::SqlitePool;

/// Persists song orders for setlist blocks; `owner_id` is the block id
#[derive(Clone)]
pub struct BlockOrderStore {
    pool: SqlitePool,
}

impl BlockOrderStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for BlockOrderStore {
    async fn persist_order(
        &self,
        owner_id: &str,
        new_order: &[String],
    ) -> magiclist_core::Result<()> {
        let order: Vec<SongId> = new_order.iter().map(SongId::new).collect();
        crate::blocks::set_song_order(&self.pool, &BlockId::new(owner_id), &order).await
    }
}

/// Persists card orders for kanban columns; `owner_id` is the column id
#[derive(Clone)]
pub struct ColumnOrderStore {
    pool: SqlitePool,
}

impl ColumnOrderStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for ColumnOrderStore {
    async fn persist_order(
        &self,
        owner_id: &str,
        new_order: &[String],
    ) -> magiclist_core::Result<()> {
        let order: Vec<CardId> = new_order.iter().map(CardId::new).collect();
        crate::boards::set_card_order(&self.pool, &ColumnId::new(owner_id), &order).await
    }
}
