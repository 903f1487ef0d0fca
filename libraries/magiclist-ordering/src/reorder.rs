//! Pure reorder/move functions
//!
//! These are the only functions that compute a new order. They are
//! deterministic, side-effect free, and never touch persistence: same input,
//! same output, so they are suitable for property-based testing.
//!
//! Semantics are remove-then-insert, NOT swap: the moved element is removed
//! first, then inserted at `destination_index` of the shortened sequence.
//! When `destination_index > source_index` the item therefore lands at
//! `destination_index - 1` of the original indexing. Reorder libraries differ
//! on this off-by-one; the unit tests below pin it exactly.

use crate::error::{OrderError, Result};
use crate::types::MoveRequest;
use std::collections::BTreeMap;

/// Compute the new order after moving one element within a single list.
///
/// Bounds: `source_index < order.len()`, `destination_index <= order.len()`
/// (`== len` means append). Anything else is `OrderError::InvalidIndex`.
///
/// Returns a fresh `Vec`; the input is untouched. The output is a pure
/// permutation of the input: same length, same elements.
pub fn reorder<T: Clone>(
    order: &[T],
    source_index: usize,
    destination_index: usize,
) -> Result<Vec<T>> {
    if source_index >= order.len() {
        return Err(OrderError::InvalidIndex {
            index: source_index,
            len: order.len(),
        });
    }
    if destination_index > order.len() {
        return Err(OrderError::InvalidIndex {
            index: destination_index,
            len: order.len(),
        });
    }

    let mut next = order.to_vec();
    if source_index == destination_index {
        return Ok(next);
    }

    let item = next.remove(source_index);
    // destination_index == original len aliases "append" on the shortened list
    let insert_at = destination_index.min(next.len());
    next.insert(insert_at, item);
    Ok(next)
}

/// Compute the new container map after moving one element, kanban-style.
///
/// Copy-on-write: the input map is never mutated, so callers holding a
/// reference to the old map (undo stacks, render diffing) see no change.
///
/// Same-container requests delegate to [`reorder`]; cross-container requests
/// shrink the source list by one and grow the destination list by one. The
/// destination bound is checked against the original destination length
/// (`== len` appends). A no-op request returns an equal-by-value copy.
pub fn move_between<T: Clone>(
    containers: &BTreeMap<String, Vec<T>>,
    request: &MoveRequest,
) -> Result<BTreeMap<String, Vec<T>>> {
    let source = containers
        .get(&request.source_container)
        .ok_or_else(|| OrderError::UnknownContainer(request.source_container.clone()))?;
    let destination = containers
        .get(&request.destination_container)
        .ok_or_else(|| OrderError::UnknownContainer(request.destination_container.clone()))?;

    if request.source_container == request.destination_container {
        let new_list = reorder(source, request.source_index, request.destination_index)?;
        let mut next = containers.clone();
        next.insert(request.source_container.clone(), new_list);
        return Ok(next);
    }

    if request.source_index >= source.len() {
        return Err(OrderError::InvalidIndex {
            index: request.source_index,
            len: source.len(),
        });
    }
    if request.destination_index > destination.len() {
        return Err(OrderError::InvalidIndex {
            index: request.destination_index,
            len: destination.len(),
        });
    }

    let mut new_source = source.clone();
    let item = new_source.remove(request.source_index);

    let mut new_destination = destination.clone();
    new_destination.insert(request.destination_index, item);

    let mut next = containers.clone();
    next.insert(request.source_container.clone(), new_source);
    next.insert(request.destination_container.clone(), new_destination);
    Ok(next)
}
