//! Seed data: the default chamber set, the sample events used when no
//! persisted events exist, and the chamber-to-feed map.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::event::{Chamber, Event, EventType};

/// RSS feeds for the chambers that publish one, keyed by default chamber id.
/// Not every chamber has a public feed.
pub const CHAMBER_FEEDS: &[(&str, &str)] = &[
    ("1", "https://business.fortworthchamber.com/feed/rss/UpcomingEvents.rss"),
    ("3", "https://business.grapevinechamber.org/feed/rss/UpcomingEvents.rss"),
    ("5", "https://business.dentonchamber.org/feed/rss/UpcomingEvents.rss"),
    ("6", "https://business.kellerchamber.com/feed/rss/UpcomingEvents.rss"),
    ("8", "https://business.heb.org/feed/rss/UpcomingEvents.rss"),
    ("9", "https://business.colleyvillechamber.org/feed/rss/UpcomingEvents.rss"),
];

pub fn default_chambers() -> Vec<Chamber> {
    [
        ("1", "Fort Worth Chamber of Commerce", "Fort Worth, TX", "https://fortworthchamber.com"),
        ("2", "Greater Arlington Chamber of Commerce", "Arlington, TX", "https://www.arlingtontx.com"),
        ("3", "Grapevine Chamber of Commerce", "Grapevine, TX", "https://www.grapevinechamber.org"),
        ("4", "Southlake Chamber of Commerce", "Southlake, TX", "https://www.southlakechamber.org"),
        ("5", "Denton Chamber of Commerce", "Denton, TX", "https://dentonchamber.org"),
        ("6", "Greater Keller Chamber", "Keller, TX", "https://www.kellerchamber.com"),
        (
            "7",
            "Weatherford Chamber of Commerce",
            "Weatherford, TX",
            "https://www.weatherford-chamber.com",
        ),
        (
            "8",
            "Hurst-Euless-Bedford (HEB) Chamber of Commerce",
            "Bedford, TX",
            "https://heb.org",
        ),
        (
            "9",
            "Colleyville Chamber of Commerce",
            "Colleyville, TX",
            "https://colleyvillechamber.org",
        ),
        (
            "10",
            "Northeast Tarrant Chamber of Commerce",
            "Haltom City, TX",
            "https://www.netarrant.org",
        ),
    ]
    .into_iter()
    .map(|(id, name, location, website)| Chamber {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        website: website.to_string(),
        enabled: true,
    })
    .collect()
}

/// Sample events relative to `now`, seeded when no persisted events exist
/// or the persisted record is unreadable.
pub fn sample_events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        sample(now, "1", "1", "Business After Hours Networking", 2, 17, 30,
            "The Modern Art Museum",
            "Join fellow members for networking and refreshments",
            EventType::Networking),
        sample(now, "2", "2", "Monthly Membership Luncheon", 5, 11, 30,
            "Arlington Convention Center",
            "Member lunch with a featured speaker on regional growth",
            EventType::Luncheon),
        sample(now, "3", "3", "Small Business Marketing Workshop", 7, 9, 0,
            "Grapevine Public Library",
            "Hands-on session covering social media basics for small teams",
            EventType::Workshop),
        sample(now, "4", "4", "New Member Orientation", 10, 8, 0,
            "Southlake Chamber Offices",
            "Welcome session for members who joined this quarter",
            EventType::Orientation),
        sample(now, "5", "5", "Regional Economic Outlook Conference", 14, 8, 30,
            "Embassy Suites Denton",
            "Half-day conference with county and university economists",
            EventType::Conference),
        sample(now, "6", "7", "Young Professionals Mixer", 3, 17, 0,
            "Downtown Weatherford Square",
            "Casual evening mixer for members under 40",
            EventType::Networking),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    now: DateTime<Utc>,
    id: &str,
    chamber_id: &str,
    title: &str,
    days_ahead: i64,
    hour: u32,
    minute: u32,
    location: &str,
    description: &str,
    kind: EventType,
) -> Event {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    Event {
        id: id.to_string(),
        chamber_id: chamber_id.to_string(),
        title: title.to_string(),
        date: (now.date_naive() + Duration::days(days_ahead)).and_time(time).and_utc(),
        location: location.to_string(),
        description: description.to_string(),
        kind,
        link: None,
    }
}
