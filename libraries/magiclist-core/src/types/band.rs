/// Band and member types
use super::ids::BandId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A band (the owning group for songs, blocks, and events)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Band {
    /// Create a new band with a generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BandId::generate(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a band with a known ID (for storage hydration)
    pub fn with_id(id: BandId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }
}

/// A band member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub band_id: BandId,
    pub name: String,
    /// Primary instrument ("guitar", "vocals", ...)
    pub instrument: Option<String>,
}

/// Input for creating a band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBand {
    pub name: String,
}
