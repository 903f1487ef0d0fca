/// Event types (shows, rehearsals, meetings)
use super::ids::{BandId, EventId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of band event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Show,
    Rehearsal,
    Meeting,
}

impl EventKind {
    /// Storage tag for the kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Rehearsal => "rehearsal",
            Self::Meeting => "meeting",
        }
    }

    /// Parse a storage tag back into a kind
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "show" => Some(Self::Show),
            "rehearsal" => Some(Self::Rehearsal),
            "meeting" => Some(Self::Meeting),
            _ => None,
        }
    }
}

/// A band event on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub band_id: BandId,
    pub kind: EventKind,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
}

impl Event {
    /// Create a new event with a generated ID
    pub fn new(
        band_id: BandId,
        kind: EventKind,
        name: impl Into<String>,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EventId::generate(),
            band_id,
            kind,
            name: name.into(),
            starts_at,
            location: None,
        }
    }
}

/// Input for creating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    pub band_id: BandId,
    pub kind: EventKind,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
}

/// One month's event count, for the activity chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Month key in `YYYY-MM` form
    pub month: String,
    pub count: i64,
}
