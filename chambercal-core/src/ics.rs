//! ICS export.
//!
//! Serializes the visible event set into a single RFC 5545 calendar. All
//! timestamps are emitted in compact UTC form (`YYYYMMDDTHHMMSSZ`); text
//! values are passed through raw and escaped once by the icalendar crate
//! at serialization time.

use chrono::{DateTime, Duration, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::event::Event;
use crate::registry::ChamberRegistry;
use crate::store::EventStore;

/// Exported events carry no explicit end in the data model; give each a
/// fixed two-hour window.
pub const EXPORT_DURATION_HOURS: i64 = 2;

const PRODID: &str = "-//Chamber Calendar//chambercal//EN";
const UID_DOMAIN: &str = "chambercal";

/// Export every visible event as one ICS document, stamped with the
/// current time.
pub fn export_ics(store: &EventStore, registry: &ChamberRegistry) -> String {
    export_ics_at(store, registry, Utc::now())
}

/// Like [`export_ics`] but with an explicit DTSTAMP, so output is
/// reproducible.
pub fn export_ics_at(
    store: &EventStore,
    registry: &ChamberRegistry,
    stamp: DateTime<Utc>,
) -> String {
    let mut cal = Calendar::new();

    for event in store.visible(registry) {
        let end = event.date + Duration::hours(EXPORT_DURATION_HOURS);

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@{UID_DOMAIN}", event.id));
        ics_event.add_property("DTSTAMP", compact_utc(stamp));
        ics_event.add_property("DTSTART", compact_utc(event.date));
        ics_event.add_property("DTEND", compact_utc(end));
        ics_event.summary(&event.title);
        ics_event.description(&describe(event, registry));
        ics_event.location(&event.location);
        ics_event.add_property("STATUS", "CONFIRMED");

        cal.push(ics_event.done());
    }

    pin_prodid(&cal.done().to_string())
}

fn compact_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Description body, then the event link if there is one, then chamber
/// attribution. Unknown chambers are attributed as such rather than
/// dropped.
fn describe(event: &Event, registry: &ChamberRegistry) -> String {
    let mut text = event.description.clone();
    if let Some(link) = &event.link {
        text.push_str("\nMore info: ");
        text.push_str(link);
    }
    text.push_str("\nBy: ");
    text.push_str(registry.name_of(&event.chamber_id).unwrap_or("Unknown chamber"));
    text
}

/// Replace the library's PRODID with ours so exports identify this
/// application regardless of the icalendar crate version.
fn pin_prodid(ics: &str) -> String {
    let pinned = format!("PRODID:{PRODID}");
    let lines: Vec<&str> = ics
        .lines()
        .map(|line| if line.starts_with("PRODID:") { pinned.as_str() } else { line })
        .collect();

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}
