//! Shared types for the ordering engine

use serde::{Deserialize, Serialize};

/// Opaque identifier for a list member (song id, card id, block id)
pub type ItemRef = String;

/// A single completed drag gesture: move one item between two slots,
/// possibly across containers.
///
/// For a plain list (no containers) both container ids are the list's own
/// owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source_container: String,
    pub source_index: usize,
    pub destination_container: String,
    pub destination_index: usize,
}

impl MoveRequest {
    /// Move within a single container
    pub fn within(
        container: impl Into<String>,
        source_index: usize,
        destination_index: usize,
    ) -> Self {
        let container = container.into();
        Self {
            source_container: container.clone(),
            source_index,
            destination_container: container,
            destination_index,
        }
    }

    /// Move across containers
    pub fn across(
        source_container: impl Into<String>,
        source_index: usize,
        destination_container: impl Into<String>,
        destination_index: usize,
    ) -> Self {
        Self {
            source_container: source_container.into(),
            source_index,
            destination_container: destination_container.into(),
            destination_index,
        }
    }

    /// A move back to the exact same slot changes nothing
    pub fn is_noop(&self) -> bool {
        self.source_container == self.destination_container
            && self.source_index == self.destination_index
    }
}
