//! Event and chamber data model.
//!
//! These types are the wire format too: their serde shapes match the
//! persisted JSON records (`chamberId`, `type`, RFC 3339 `date` strings),
//! so a saved file from an earlier run deserializes unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single calendar event, from any source.
///
/// `id` is the sole de-duplication key across the whole system. Events are
/// immutable once stored; the store's merge never overwrites an existing id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Soft reference to the owning chamber. Removing the chamber leaves
    /// the event in place, unattributed.
    pub chamber_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Present only for feed-sourced events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Event {
    /// The calendar day this event falls on, ignoring time-of-day.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Networking,
    Workshop,
    Luncheon,
    Conference,
    Orientation,
}

impl EventType {
    /// Classify an event by case-insensitive substring match on its title.
    /// Priority order: workshop, luncheon, conference; anything else is
    /// networking.
    pub fn classify(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("workshop") {
            EventType::Workshop
        } else if lower.contains("luncheon") {
            EventType::Luncheon
        } else if lower.contains("conference") {
            EventType::Conference
        } else {
            EventType::Networking
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Networking => "networking",
            EventType::Workshop => "workshop",
            EventType::Luncheon => "luncheon",
            EventType::Conference => "conference",
            EventType::Orientation => "orientation",
        }
    }
}

/// A business chamber whose events are tracked.
///
/// `enabled` gates visibility everywhere (calendar, list, export) but never
/// deletes events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chamber {
    pub id: String,
    pub name: String,
    pub location: String,
    pub website: String,
    pub enabled: bool,
}
