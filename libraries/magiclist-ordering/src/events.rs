//! Ordering events
//!
//! Event-based communication for UI synchronization after a reorder has been
//! handed to persistence. The in-memory order is already updated by the time
//! these fire; a failure event means the durable copy is behind and the UI
//! should show a retry banner, not roll the list back.

use serde::{Deserialize, Serialize};

/// Events emitted by the order write queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    /// The latest order for this list reached durable storage
    Persisted {
        /// Owner id of the persisted list
        owner_id: String,
    },

    /// Persisting the order failed; in-memory state is unaffected
    PersistFailed {
        /// Owner id of the list whose write failed
        owner_id: String,
        /// Human-readable failure description for the UI
        message: String,
    },
}
