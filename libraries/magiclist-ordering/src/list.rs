//! Ordered list container
//!
//! One `OrderedList` is the canonical order for a single owned list: the
//! songs of a setlist block, the blocks of a set. The sequence itself is the
//! sole carrier of position; there is no rank or weight field. All mutation
//! replaces the sequence wholesale, so callers never observe a half-applied
//! splice.

use crate::error::{OrderError, Result};
use crate::reorder::reorder;
use crate::types::ItemRef;
use std::collections::HashSet;

/// An ordered sequence of item refs owned by one displaying component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList {
    owner_id: String,
    items: Vec<ItemRef>,
}

impl OrderedList {
    /// Create a list, rejecting duplicate item refs
    pub fn new(owner_id: impl Into<String>, items: Vec<ItemRef>) -> Result<Self> {
        check_unique(&items)?;
        Ok(Self {
            owner_id: owner_id.into(),
            items,
        })
    }

    /// Create an empty list
    pub fn empty(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            items: Vec::new(),
        }
    }

    /// The persistence owner id for this list
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// The current order
    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the entire order (e.g. after a fresh load).
    ///
    /// Returns the previous order so a caller can keep it as a rollback
    /// snapshot. Rejects duplicates.
    pub fn replace(&mut self, items: Vec<ItemRef>) -> Result<Vec<ItemRef>> {
        check_unique(&items)?;
        Ok(std::mem::replace(&mut self.items, items))
    }

    /// Apply one completed drag gesture.
    ///
    /// Computes the new order with [`reorder`] and swaps it in wholesale.
    /// Returns the previous order (the exact value before the mutation) so
    /// the caller can roll back if it chooses to on persistence failure.
    pub fn apply(&mut self, source_index: usize, destination_index: usize) -> Result<Vec<ItemRef>> {
        let next = reorder(&self.items, source_index, destination_index)?;
        Ok(std::mem::replace(&mut self.items, next))
    }
}

fn check_unique(items: &[ItemRef]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.as_str()) {
            return Err(OrderError::DuplicateItem(item.clone()));
        }
    }
    Ok(())
}
