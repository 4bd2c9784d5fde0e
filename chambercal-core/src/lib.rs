//! Event aggregation core for the chamber calendar.
//!
//! This crate merges three heterogeneous event sources into one
//! id-deduplicated, chronologically consistent set:
//! - locally persisted events (`store` + `storage`)
//! - procedurally generated recurring series (`recurrence`)
//! - events harvested from chamber RSS feeds (`feed`)
//!
//! Visibility is gated per chamber (`registry`), and the visible subset can
//! be serialized to an iCalendar document (`ics`). The `app` module ties the
//! pieces together behind a single root controller; presentation layers
//! (like chambercal-cli) work exclusively through it.

pub mod app;
pub mod defaults;
pub mod error;
pub mod event;
pub mod feed;
pub mod ics;
pub mod recurrence;
pub mod registry;
pub mod storage;
pub mod store;

pub use app::{ChamberCalendar, LoadOutcome, Schedule};
pub use error::{ChamberCalError, ChamberCalResult};
pub use event::{Chamber, Event, EventType};
pub use registry::ChamberRegistry;
pub use store::EventStore;
