//! Integration tests for the order write queue
//!
//! Uses a recording fake `OrderStore` to verify:
//! - writes reach the store with the full replacement order
//! - failures surface as events without retry
//! - rapid successive submissions coalesce to the newest order

use async_trait::async_trait;
use magiclist_core::{MagicError, OrderStore};
use magiclist_ordering::{OrderEvent, OrderWriter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, Notify};

/// Fake store that records every persisted order
struct RecordingStore {
    orders: Mutex<Vec<(String, Vec<String>)>>,
    fail: AtomicBool,
    /// Signals each time a persist call starts
    started: mpsc::UnboundedSender<()>,
    /// Persist calls block here until released
    gate: Option<Arc<Notify>>,
}

impl RecordingStore {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                orders: Mutex::new(Vec::new()),
                fail: AtomicBool::new(false),
                started,
                gate: None,
            }),
            started_rx,
        )
    }

    fn gated(gate: Arc<Notify>) -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                orders: Mutex::new(Vec::new()),
                fail: AtomicBool::new(false),
                started,
                gate: Some(gate),
            }),
            started_rx,
        )
    }

    async fn recorded(&self) -> Vec<(String, Vec<String>)> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl OrderStore for RecordingStore {
    async fn persist_order(
        &self,
        owner_id: &str,
        new_order: &[String],
    ) -> magiclist_core::Result<()> {
        let _ = self.started.send(());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(MagicError::storage("disk full"));
        }

        self.orders
            .lock()
            .await
            .push((owner_id.to_string(), new_order.to_vec()));
        Ok(())
    }
}

fn order(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn submitted_order_reaches_the_store() {
    let (store, _started) = RecordingStore::new();
    let writer = OrderWriter::new(store.clone());
    let mut events = writer.subscribe();

    writer.submit("block-1", order(&["a", "b", "c"]));

    let event = events.recv().await.unwrap();
    assert_eq!(
        event,
        OrderEvent::Persisted {
            owner_id: "block-1".to_string()
        }
    );

    let recorded = store.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "block-1");
    assert_eq!(recorded[0].1, order(&["a", "b", "c"]));
}

#[tokio::test]
async fn sequential_writes_for_one_list_are_serialized() {
    let (store, _started) = RecordingStore::new();
    let writer = OrderWriter::new(store.clone());
    let mut events = writer.subscribe();

    writer.submit("block-1", order(&["a", "b"]));
    events.recv().await.unwrap();

    writer.submit("block-1", order(&["b", "a"]));
    events.recv().await.unwrap();

    let recorded = store.recorded().await;
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].1, order(&["a", "b"]));
    assert_eq!(recorded[1].1, order(&["b", "a"]));
}

#[tokio::test]
async fn rapid_submissions_coalesce_to_newest_order() {
    let gate = Arc::new(Notify::new());
    let (store, mut started) = RecordingStore::gated(gate.clone());
    let writer = OrderWriter::new(store.clone());
    let mut events = writer.subscribe();

    // First write enters the store and blocks on the gate
    writer.submit("block-1", order(&["a", "b", "c"]));
    started.recv().await.unwrap();

    // Two more orders arrive while it is in flight; the middle one is stale
    writer.submit("block-1", order(&["b", "a", "c"]));
    writer.submit("block-1", order(&["c", "b", "a"]));

    // Release the first write, then the coalesced second one
    gate.notify_one();
    events.recv().await.unwrap();
    started.recv().await.unwrap();
    gate.notify_one();
    events.recv().await.unwrap();

    let recorded = store.recorded().await;
    assert_eq!(recorded.len(), 2, "stale middle order should be skipped");
    assert_eq!(recorded[0].1, order(&["a", "b", "c"]));
    assert_eq!(recorded[1].1, order(&["c", "b", "a"]));
}

#[tokio::test]
async fn persistence_failure_surfaces_as_event_without_retry() {
    let (store, _started) = RecordingStore::new();
    store.fail.store(true, Ordering::SeqCst);

    let writer = OrderWriter::new(store.clone());
    let mut events = writer.subscribe();

    writer.submit("block-1", order(&["a", "b"]));

    match events.recv().await.unwrap() {
        OrderEvent::PersistFailed { owner_id, message } => {
            assert_eq!(owner_id, "block-1");
            assert!(message.contains("disk full"));
        }
        other => panic!("expected PersistFailed, got {other:?}"),
    }

    // No retry: nothing was recorded and no further event arrives
    assert!(store.recorded().await.is_empty());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn independent_lists_get_independent_workers() {
    let (store, _started) = RecordingStore::new();
    let writer = OrderWriter::new(store.clone());
    let mut events = writer.subscribe();

    writer.submit("block-1", order(&["a"]));
    writer.submit("column-9", order(&["x", "y"]));

    let mut owners = vec![];
    for _ in 0..2 {
        match events.recv().await.unwrap() {
            OrderEvent::Persisted { owner_id } => owners.push(owner_id),
            other => panic!("unexpected event: {other:?}"),
        }
    }
    owners.sort();
    assert_eq!(owners, ["block-1", "column-9"]);

    let recorded = store.recorded().await;
    assert_eq!(recorded.len(), 2);
}
