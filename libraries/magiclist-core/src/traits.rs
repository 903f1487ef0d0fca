/// Core traits for MagicList
use crate::error::Result;
use async_trait::async_trait;

/// Persistence seam for list ordering.
///
/// Implementers durably store the complete replacement order for one owned
/// list (the songs of a setlist block, the cards of a kanban column). The
/// ordering engine hands over the full new order, never a diff.
///
/// Contract:
/// - `new_order` replaces whatever order was stored before, wholesale.
/// - Calls must be idempotent: persisting the same order twice is safe.
/// - Failure is surfaced as `Err`; implementations never panic on I/O or
///   database errors.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Durably store the new order for the list identified by `owner_id`.
    ///
    /// # Errors
    /// Returns an error if the order could not be written.
    async fn persist_order(&self, owner_id: &str, new_order: &[String]) -> Result<()>;
}
