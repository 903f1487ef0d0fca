/// Setlist block types
use super::ids::{BandId, BlockId, SongId};
use serde::{Deserialize, Serialize};

/// A setlist block ("bloco"): an ordered run of songs played back to back
///
/// `song_ids` is the canonical order. It is replaced wholesale by the
/// ordering engine; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub band_id: BandId,
    pub name: String,
    pub song_ids: Vec<SongId>,
}

impl Block {
    /// Create a new empty block with a generated ID
    pub fn new(band_id: BandId, name: impl Into<String>) -> Self {
        Self {
            id: BlockId::generate(),
            band_id,
            name: name.into(),
            song_ids: Vec::new(),
        }
    }
}

/// Input for creating a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlock {
    pub band_id: BandId,
    pub name: String,
}
