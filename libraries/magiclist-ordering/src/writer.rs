//! Per-list serialized order persistence
//!
//! The engine returns before persistence is attempted; this queue is the
//! bridge to the `OrderStore` collaborator. Gestures arrive one at a time,
//! but their writes can be slow, and a slow earlier write must never
//! overwrite a later order. `OrderWriter` makes last-write-wins explicit:
//!
//! - one worker task per owner list, so writes for a list are serialized;
//! - the worker is fed through a `watch` channel, so rapid successive
//!   submissions coalesce to the newest order and stale orders are skipped
//!   instead of written.
//!
//! Persistence failure is reported as an [`OrderEvent::PersistFailed`] and
//! never retried here; the in-memory order is not rolled back.

use crate::events::OrderEvent;
use crate::types::ItemRef;
use magiclist_core::OrderStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

/// Serialized, coalescing write queue over an [`OrderStore`]
///
/// A worker task is kept per owner id for the writer's whole lifetime; idle
/// workers are not reaped. The set of lists a user drags in one session is
/// small, so the map stays bounded by the lists that exist. All workers end
/// when the writer is dropped and their channels close.
pub struct OrderWriter {
    store: Arc<dyn OrderStore>,
    events: broadcast::Sender<OrderEvent>,
    lists: Mutex<HashMap<String, watch::Sender<Option<Vec<ItemRef>>>>>,
}

impl OrderWriter {
    /// Create a writer over the given store.
    ///
    /// Workers are spawned lazily per owner id, so `submit` must be called
    /// from within a tokio runtime.
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            store,
            events,
            lists: Mutex::new(HashMap::new()),
        }
    }

    /// Subscribe to persistence outcome events
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.events.subscribe()
    }

    /// Hand the full replacement order for one list to persistence.
    ///
    /// Returns immediately; the write happens on the list's worker task. If
    /// an earlier write for the same list is still in flight, this order
    /// supersedes any not-yet-written one.
    pub fn submit(&self, owner_id: &str, new_order: Vec<ItemRef>) {
        let mut lists = self.lists.lock().expect("order writer lock poisoned");
        let tx = lists
            .entry(owner_id.to_string())
            .or_insert_with(|| self.spawn_worker(owner_id.to_string()));
        // The worker lives as long as this sender; send cannot fail here
        let _ = tx.send(Some(new_order));
    }

    fn spawn_worker(&self, owner_id: String) -> watch::Sender<Option<Vec<ItemRef>>> {
        let (tx, mut rx) = watch::channel::<Option<Vec<ItemRef>>>(None);
        let store = Arc::clone(&self.store);
        let events = self.events.clone();

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let Some(order) = rx.borrow_and_update().clone() else {
                    continue;
                };

                match store.persist_order(&owner_id, &order).await {
                    Ok(()) => {
                        debug!(owner_id = %owner_id, items = order.len(), "order persisted");
                        let _ = events.send(OrderEvent::Persisted {
                            owner_id: owner_id.clone(),
                        });
                    }
                    Err(err) => {
                        warn!(owner_id = %owner_id, error = %err, "failed to persist order");
                        let _ = events.send(OrderEvent::PersistFailed {
                            owner_id: owner_id.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        });

        tx
    }
}
