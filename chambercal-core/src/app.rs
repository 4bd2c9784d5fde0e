//! The application facade.
//!
//! `ChamberCalendar` owns the registry and the store, knows where they
//! persist, and funnels every mutation through a save so the on-disk
//! records always match memory. Loading seeds defaults the first time and
//! whenever a persisted record is unreadable.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::defaults;
use crate::error::ChamberCalResult;
use crate::event::Event;
use crate::recurrence::{self, EventTemplate, RecurrenceRule};
use crate::registry::ChamberRegistry;
use crate::store::EventStore;

/// What `load` had to fall back on, for the caller to report.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadOutcome {
    pub seeded_chambers: bool,
    pub seeded_events: bool,
}

/// Schedule for a user-created event: a single occurrence or an expanded
/// recurrence.
#[derive(Debug, Clone)]
pub enum Schedule {
    Once(DateTime<Utc>),
    Recurring(RecurrenceRule),
}

pub struct ChamberCalendar {
    data_dir: PathBuf,
    pub registry: ChamberRegistry,
    pub store: EventStore,
}

impl ChamberCalendar {
    /// Load persisted state from `data_dir`, seeding defaults where a
    /// record is missing or unreadable. The built-in Friday series is
    /// merged on every load; its date-derived ids keep that idempotent.
    pub fn load(data_dir: PathBuf) -> ChamberCalResult<(Self, LoadOutcome)> {
        let now = Utc::now();
        let mut outcome = LoadOutcome::default();

        let registry = match ChamberRegistry::load(&data_dir) {
            Ok(Some(registry)) => registry,
            Ok(None) | Err(_) => {
                outcome.seeded_chambers = true;
                ChamberRegistry::new(defaults::default_chambers())
            }
        };

        let mut store = match EventStore::load(&data_dir) {
            Ok(Some(store)) => store,
            Ok(None) | Err(_) => {
                outcome.seeded_events = true;
                EventStore::new(defaults::sample_events(now))
            }
        };
        store.merge(recurrence::friday_series(now.date_naive()));

        let app = Self { data_dir, registry, store };
        app.save()?;
        Ok((app, outcome))
    }

    fn save(&self) -> ChamberCalResult<()> {
        self.registry.save(&self.data_dir)?;
        self.store.save(&self.data_dir)
    }

    /// Merge feed-sourced candidates and persist. Returns how many were new.
    pub fn merge_feed_events(&mut self, candidates: Vec<Event>) -> ChamberCalResult<usize> {
        let added = self.store.merge(candidates);
        self.save()?;
        Ok(added)
    }

    /// Create one event or a recurring batch from user input. A blank title
    /// or an unknown chamber id is rejected with `Ok(None)` and nothing
    /// changes. On success, returns how many events were created.
    pub fn add_event(
        &mut self,
        template: &EventTemplate,
        schedule: &Schedule,
    ) -> ChamberCalResult<Option<usize>> {
        if template.title.trim().is_empty() || self.registry.get(&template.chamber_id).is_none() {
            return Ok(None);
        }

        let events = match schedule {
            Schedule::Once(date) => vec![Event {
                id: Uuid::new_v4().to_string(),
                chamber_id: template.chamber_id.clone(),
                title: template.title.trim().to_string(),
                date: *date,
                location: template.location.clone(),
                description: template.description.clone(),
                kind: template.kind,
                link: None,
            }],
            Schedule::Recurring(rule) => recurrence::expand_rule(rule, template),
        };

        let added = self.store.merge(events);
        self.save()?;
        Ok(Some(added))
    }

    /// Register a chamber. `Ok(None)` means the input was rejected.
    pub fn add_chamber(
        &mut self,
        name: &str,
        location: &str,
        website: &str,
    ) -> ChamberCalResult<Option<String>> {
        let id = match self.registry.add(name, location, website) {
            Some(chamber) => chamber.id.clone(),
            None => return Ok(None),
        };
        self.save()?;
        Ok(Some(id))
    }

    /// Remove a chamber. Its events stay stored but stop being visible.
    pub fn remove_chamber(&mut self, id: &str) -> ChamberCalResult<bool> {
        if !self.registry.remove(id) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Flip a chamber's enabled flag; `Ok(None)` for an unknown id.
    pub fn toggle_chamber(&mut self, id: &str) -> ChamberCalResult<Option<bool>> {
        let enabled = match self.registry.toggle(id) {
            Some(enabled) => enabled,
            None => return Ok(None),
        };
        self.save()?;
        Ok(Some(enabled))
    }

    /// Throw away all state and restore the defaults, Friday series
    /// included.
    pub fn reset_to_defaults(&mut self) -> ChamberCalResult<()> {
        let now = Utc::now();
        self.registry = ChamberRegistry::new(defaults::default_chambers());
        self.store = EventStore::new(defaults::sample_events(now));
        self.store.merge(recurrence::friday_series(now.date_naive()));
        self.save()
    }
}
