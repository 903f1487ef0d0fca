//! MagicList Core
//!
//! Platform-agnostic core types, traits, and error handling for MagicList.
//!
//! This crate provides the foundational building blocks used across the
//! library layer (ordering engine, storage) and by application hosts.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Band`, `Song`, `Block`, `Board`, `Event`, etc.
//! - **Core Traits**: `OrderStore` (the persistence seam for list ordering)
//! - **Error Handling**: Unified `MagicError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use magiclist_core::types::{Band, CreateSong, SongFilter};
//!
//! let band = Band::new("The Afternoons");
//!
//! let song = CreateSong {
//!     band_id: band.id.clone(),
//!     title: "Opening Number".to_string(),
//!     artist: Some("The Afternoons".to_string()),
//!     key: Some("Em".to_string()),
//!     duration_secs: Some(245),
//! };
//! assert_eq!(song.title, "Opening Number");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MagicError, Result};
pub use traits::OrderStore;

// Export all types
pub use types::{
    Band, BandId, Block, BlockId, Board, BoardId, Card, CardId, Column, ColumnId, CreateBand,
    CreateBlock, CreateEvent, CreateSong, Event, EventId, EventKind, Member, MonthBucket, Song,
    SongFilter, SongId, UpdateSong,
};
