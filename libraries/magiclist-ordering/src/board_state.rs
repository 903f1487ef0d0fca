//! Kanban board state: named containers of ordered item refs
//!
//! A `BoardState` is the in-memory snapshot of one kanban board (or any
//! multi-list view where items move between named groups). Each item ref
//! lives in at most one container at a time.

use crate::error::{OrderError, Result};
use crate::reorder::move_between;
use crate::types::{ItemRef, MoveRequest};
use std::collections::{BTreeMap, HashSet};

/// Immutable-style snapshot of named ordered lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    columns: BTreeMap<String, Vec<ItemRef>>,
}

impl BoardState {
    /// Build a board state, rejecting items that appear twice anywhere
    pub fn new(columns: BTreeMap<String, Vec<ItemRef>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for items in columns.values() {
            for item in items {
                if !seen.insert(item.as_str()) {
                    return Err(OrderError::DuplicateItem(item.clone()));
                }
            }
        }
        Ok(Self { columns })
    }

    /// The order of one container, if it exists
    pub fn column(&self, container_id: &str) -> Option<&[ItemRef]> {
        self.columns.get(container_id).map(Vec::as_slice)
    }

    /// All container ids, in stable (sorted) order
    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Total number of items across all containers
    pub fn total_items(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Apply one completed drag gesture, returning the next snapshot.
    ///
    /// Copy-on-write: `self` is untouched, so the caller can keep it as the
    /// previous snapshot for undo or render diffing.
    pub fn apply_move(&self, request: &MoveRequest) -> Result<BoardState> {
        let columns = move_between(&self.columns, request)?;
        Ok(Self { columns })
    }

    /// The raw container map (e.g. for persistence of the changed lists)
    pub fn columns(&self) -> &BTreeMap<String, Vec<ItemRef>> {
        &self.columns
    }
}
