/// Study kanban board types
use super::ids::{BoardId, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A study kanban board (e.g. "to learn" / "practicing" / "ready")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
}

impl Board {
    /// Create a new board with a generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::generate(),
            name: name.into(),
        }
    }
}

/// A kanban column owning an ordered run of cards
///
/// `card_ids` is the canonical order within the column. A card lives in at
/// most one column of its board at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub card_ids: Vec<CardId>,
}

impl Column {
    /// Create a new empty column with a generated ID
    pub fn new(board_id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            board_id,
            title: title.into(),
            card_ids: Vec::new(),
        }
    }
}

/// A kanban card (one song or study item)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub notes: Option<String>,
}

impl Card {
    /// Create a new card with a generated ID
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            title: title.into(),
            notes: None,
        }
    }
}
