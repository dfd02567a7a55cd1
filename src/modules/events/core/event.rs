// Event entity as owned by the event store, and the caller-writable subset of it.
//
// Purpose
// - Event: a persisted, time-bounded calendar entry handed out to callers as a copy.
// - EventDetails: the fields a caller may set on create and overwrite on update.
//
// Invariants
// - id, uuid and created_at are assigned by the store and never caller-writable.
// - date_from and date_to are UTC instants. Local times are converted before they get here.
// - date_from > date_to and overlapping events are allowed.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: i64,
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

impl Event {
    pub fn details(&self) -> EventDetails {
        EventDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
        }
    }

    /// True when `[date_from, date_to]` intersects the open window `(start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.date_from < end && self.date_to > start
    }
}
