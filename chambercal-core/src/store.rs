//! The canonical in-memory event set.
//!
//! The store is the single source of truth for every event the application
//! knows about. Merging is keyed on event id with first-writer-wins
//! semantics; nothing in the store is ever overwritten in place.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::ChamberCalResult;
use crate::event::Event;
use crate::registry::ChamberRegistry;
use crate::storage;

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store from a candidate list, dropping any id duplicates the
    /// list itself carries.
    pub fn new(events: Vec<Event>) -> Self {
        let mut store = Self { events: Vec::new() };
        store.merge(events);
        store
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    /// Add every candidate whose id is not already present. Existing events
    /// are never overwritten. Returns the number of events added.
    pub fn merge(&mut self, candidates: Vec<Event>) -> usize {
        let mut seen: HashSet<String> = self.events.iter().map(|e| e.id.clone()).collect();

        let mut added = 0;
        for candidate in candidates {
            if seen.insert(candidate.id.clone()) {
                self.events.push(candidate);
                added += 1;
            }
        }
        added
    }

    /// Events whose chamber is enabled, in chronological order.
    pub fn visible<'a>(&'a self, registry: &ChamberRegistry) -> Vec<&'a Event> {
        let mut visible: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| registry.is_enabled(&e.chamber_id))
            .collect();

        visible.sort_by_key(|e| e.date);
        visible
    }

    /// Visible events falling on the given calendar day, time-of-day ignored.
    pub fn events_on<'a>(&'a self, day: NaiveDate, registry: &ChamberRegistry) -> Vec<&'a Event> {
        self.visible(registry)
            .into_iter()
            .filter(|e| e.day() == day)
            .collect()
    }

    /// Restore from the persisted record, if one exists.
    pub fn load(dir: &Path) -> ChamberCalResult<Option<Self>> {
        let events: Option<Vec<Event>> = storage::load_json(dir, storage::EVENTS_FILE)?;
        Ok(events.map(Self::new))
    }

    /// Persist the full set, dates as ISO-8601 timestamp strings.
    pub fn save(&self, dir: &Path) -> ChamberCalResult<()> {
        storage::save_json(dir, storage::EVENTS_FILE, &self.events)
    }
}
