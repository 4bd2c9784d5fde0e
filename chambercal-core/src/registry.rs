//! The chamber registry.
//!
//! Chambers drive attribution and visibility: every event carries a
//! `chamber_id`, and the registry's enabled flags decide which events the
//! views and the exporter show. Removing a chamber removes the chamber
//! only; its events stay in the store and simply stop being visible.

use std::path::Path;

use uuid::Uuid;

use crate::error::ChamberCalResult;
use crate::event::Chamber;
use crate::storage;

#[derive(Debug, Default)]
pub struct ChamberRegistry {
    chambers: Vec<Chamber>,
}

impl ChamberRegistry {
    pub fn new(chambers: Vec<Chamber>) -> Self {
        Self { chambers }
    }

    pub fn chambers(&self) -> &[Chamber] {
        &self.chambers
    }

    pub fn len(&self) -> usize {
        self.chambers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chambers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Chamber> {
        self.chambers.iter().find(|c| c.id == id)
    }

    /// Unknown ids are disabled: an event attributed to a chamber that was
    /// never registered (or has been removed) is not visible.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).map(|c| c.enabled).unwrap_or(false)
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// Register a chamber with a fresh id, enabled by default. A blank name
    /// (after trimming) is rejected and nothing changes.
    pub fn add(&mut self, name: &str, location: &str, website: &str) -> Option<&Chamber> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.chambers.push(Chamber {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            location: location.trim().to_string(),
            website: website.trim().to_string(),
            enabled: true,
        });
        self.chambers.last()
    }

    /// Remove a chamber by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.chambers.len();
        self.chambers.retain(|c| c.id != id);
        self.chambers.len() < before
    }

    /// Flip a chamber's enabled flag, returning the new state, or `None`
    /// for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let chamber = self.chambers.iter_mut().find(|c| c.id == id)?;
        chamber.enabled = !chamber.enabled;
        Some(chamber.enabled)
    }

    pub fn load(dir: &Path) -> ChamberCalResult<Option<Self>> {
        let chambers: Option<Vec<Chamber>> = storage::load_json(dir, storage::CHAMBERS_FILE)?;
        Ok(chambers.map(Self::new))
    }

    pub fn save(&self, dir: &Path) -> ChamberCalResult<()> {
        storage::save_json(dir, storage::CHAMBERS_FILE, &self.chambers)
    }
}
