//! MagicList - Ordering Engine
//!
//! The one reusable behavior behind every draggable list in MagicList:
//! moving an item from one slot to another (songs within a setlist block,
//! cards within and across kanban columns, blocks within a set) and handing
//! the new order to persistence.
//!
//! This crate provides:
//! - Pure reorder functions (`reorder`, `move_between`) with pinned
//!   remove-then-insert semantics
//! - `OrderedList`: canonical order for one list, wholesale replacement only
//! - `BoardState`: named containers with copy-on-write moves
//! - `OrderWriter`: per-list serialized, coalescing persistence queue
//! - `OrderEvent`: persistence outcome events for the UI layer
//!
//! # Architecture
//!
//! `magiclist-ordering` knows nothing about rendering or SQL:
//! - The pure functions never suspend, block, or touch persistence
//! - Persistence goes through the `OrderStore` trait from `magiclist-core`;
//!   the SQLite implementations live in `magiclist-storage`
//!
//! The drag-gesture source (a UI layer) serializes gestures, so no two order
//! computations run concurrently against the same list. In this
//! multi-threaded host the only shared state, the writer's worker map, is
//! behind a lock, and writes are serialized per list.
//!
//! # Example: reordering a setlist block
//!
//! ```rust
//! use magiclist_ordering::{reorder, OrderedList};
//!
//! // Canonical order loaded from storage
//! let mut block = OrderedList::new(
//!     "block-1",
//!     vec!["intro".into(), "ballad".into(), "closer".into()],
//! )?;
//!
//! // User drags the closer to the front
//! let previous = block.apply(2, 0)?;
//!
//! assert_eq!(block.items(), ["closer", "intro", "ballad"]);
//! assert_eq!(previous, ["intro", "ballad", "closer"]);
//! # Ok::<(), magiclist_ordering::OrderError>(())
//! ```
//!
//! # Example: moving a card between kanban columns
//!
//! ```rust
//! use magiclist_ordering::{BoardState, MoveRequest};
//! use std::collections::BTreeMap;
//!
//! let mut columns = BTreeMap::new();
//! columns.insert("to-learn".to_string(), vec!["riff-a".into(), "riff-b".into()]);
//! columns.insert("ready".to_string(), vec!["riff-c".into()]);
//! let board = BoardState::new(columns)?;
//!
//! let next = board.apply_move(&MoveRequest::across("to-learn", 0, "ready", 1))?;
//!
//! assert_eq!(next.column("to-learn").unwrap(), ["riff-b"]);
//! assert_eq!(next.column("ready").unwrap(), ["riff-c", "riff-a"]);
//! # Ok::<(), magiclist_ordering::OrderError>(())
//! ```

mod board_state;
mod error;
mod events;
mod list;
mod reorder;
mod types;
mod writer;

// Public exports
pub use board_state::BoardState;
pub use error::{OrderError, Result};
pub use events::OrderEvent;
pub use list::OrderedList;
pub use reorder::{move_between, reorder};
pub use types::{ItemRef, MoveRequest};
pub use writer::OrderWriter;
