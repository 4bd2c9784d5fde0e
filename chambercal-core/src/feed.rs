//! RSS feed parsing.
//!
//! Chamber feeds are heterogeneous and best-effort parsed: an item whose
//! `pubDate` does not parse is dropped, and the free-text description is
//! mined for a location with two fallback patterns before giving up.
//! A malformed document yields an error for that one feed; callers treat it
//! as "zero events from this source".

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::{ChamberCalError, ChamberCalResult};
use crate::event::{Event, EventType};

pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

static LOCATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Location:\s*(.+)").unwrap());
static AT_PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bat\s+(.+)").unwrap());
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Parse one RSS document into candidate events for the given chamber.
pub fn parse_feed(chamber_id: &str, xml: &str) -> ChamberCalResult<Vec<Event>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| ChamberCalError::Feed(format!("invalid feed document: {e}")))?;

    let events = doc
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .filter_map(|item| parse_item(chamber_id, item))
        .collect();

    Ok(events)
}

fn parse_item(chamber_id: &str, item: roxmltree::Node) -> Option<Event> {
    let title = child_text(item, "title").unwrap_or_default();
    let date = parse_pub_date(&child_text(item, "pubDate")?)?;
    let link = child_text(item, "link").filter(|l| !l.is_empty());
    let raw_description = child_text(item, "description").unwrap_or_default();

    Some(Event {
        id: feed_event_id(chamber_id, &title, date),
        chamber_id: chamber_id.to_string(),
        kind: EventType::classify(&title),
        title,
        date,
        location: extract_location(&raw_description),
        description: strip_markup(&raw_description),
        link,
    })
}

fn child_text(item: roxmltree::Node, tag: &str) -> Option<String> {
    item.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

/// Feed timestamps are nominally RFC 2822; some feeds emit ISO 8601 instead.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Content-derived id: the same item parses to the same id on every fetch,
/// so the store's merge deduplicates repeated refreshes.
fn feed_event_id(chamber_id: &str, title: &str, date: DateTime<Utc>) -> String {
    let seed = format!("{chamber_id}|{title}|{}", date.to_rfc3339());
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes());
    format!("rss-{chamber_id}-{uuid}")
}

/// Best-effort location scrape from the raw description. Tries an explicit
/// `Location: <text>` marker first, then an `at <text>` phrase, both up to
/// the end of the line.
pub fn extract_location(description: &str) -> String {
    if let Some(captures) = LOCATION_MARKER.captures(description) {
        return captures[1].trim().to_string();
    }
    if let Some(captures) = AT_PHRASE.captures(description) {
        return captures[1].trim().to_string();
    }
    LOCATION_NOT_SPECIFIED.to_string()
}

/// Remove markup tags, leaving plain text.
pub fn strip_markup(description: &str) -> String {
    MARKUP_TAG.replace_all(description, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_items(items: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel><title>Upcoming Events</title>{items}</channel></rss>"
        )
    }

    const GOOD_ITEM: &str = "<item>\
        <title>Grant Writing Workshop</title>\
        <pubDate>Fri, 07 Jun 2024 17:30:00 GMT</pubDate>\
        <link>https://example.org/events/42</link>\
        <description>&lt;p&gt;Bring your laptop.&lt;/p&gt;\nLocation: Main Street Annex</description>\
        </item>";

    #[test]
    fn parses_a_well_formed_item() {
        let xml = feed_with_items(GOOD_ITEM);
        let events = parse_feed("3", &xml).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.title, "Grant Writing Workshop");
        assert_eq!(event.kind, EventType::Workshop);
        assert_eq!(event.chamber_id, "3");
        assert_eq!(event.location, "Main Street Annex");
        assert_eq!(event.description, "Bring your laptop.\nLocation: Main Street Annex");
        assert_eq!(event.link.as_deref(), Some("https://example.org/events/42"));
        assert_eq!(event.date.to_rfc3339(), "2024-06-07T17:30:00+00:00");
    }

    #[test]
    fn unparseable_pub_date_drops_the_item() {
        let xml = feed_with_items(
            "<item><title>Mystery Event</title>\
             <pubDate>sometime soon</pubDate>\
             <description>Location: Anywhere</description></item>",
        );
        let events = parse_feed("1", &xml).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn missing_description_never_crashes() {
        let xml = feed_with_items(
            "<item><title>Quarterly Mixer</title>\
             <pubDate>Fri, 07 Jun 2024 17:30:00 GMT</pubDate></item>",
        );
        let events = parse_feed("1", &xml).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location, LOCATION_NOT_SPECIFIED);
        assert_eq!(events[0].description, "");
    }

    #[test]
    fn at_phrase_is_the_location_fallback() {
        let description = "Join us at the Riverside Hotel\nDinner served at seven.";
        assert_eq!(extract_location(description), "the Riverside Hotel");
    }

    #[test]
    fn location_marker_wins_over_at_phrase() {
        let description = "Dinner at the annex.\nLocation: Riverside Hotel";
        assert_eq!(extract_location(description), "Riverside Hotel");
    }

    #[test]
    fn strip_markup_leaves_plain_text() {
        assert_eq!(
            strip_markup("<p>Networking <b>and</b> refreshments</p>"),
            "Networking and refreshments"
        );
        assert_eq!(strip_markup("   "), "");
    }

    #[test]
    fn ids_are_stable_across_repeated_parses() {
        let xml = feed_with_items(GOOD_ITEM);
        let first = parse_feed("3", &xml).unwrap();
        let second = parse_feed("3", &xml).unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert!(first[0].id.starts_with("rss-3-"), "got: {}", first[0].id);
    }

    #[test]
    fn ids_differ_per_chamber_and_title() {
        let xml = feed_with_items(GOOD_ITEM);
        let a = parse_feed("3", &xml).unwrap();
        let b = parse_feed("5", &xml).unwrap();
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn iso8601_pub_dates_are_accepted() {
        let xml = feed_with_items(
            "<item><title>Board Meeting</title>\
             <pubDate>2024-06-07T17:30:00Z</pubDate></item>",
        );
        let events = parse_feed("1", &xml).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn garbage_document_is_a_feed_error() {
        assert!(parse_feed("1", "this is not xml <<<").is_err());
    }
}
