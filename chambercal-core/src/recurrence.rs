//! Recurring event generation.
//!
//! Two flavors: a built-in weekly Friday series whose ids derive from the
//! occurrence date (regeneration is idempotent), and user-defined rules
//! expanded at creation time into standalone events sharing a series seed.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use uuid::Uuid;

use crate::event::{Event, EventType};

/// Number of weekly occurrences the built-in Friday series emits.
const FRIDAY_SERIES_COUNT: usize = 26;
/// The Friday series is hosted by the Fort Worth chamber.
const FRIDAY_SERIES_CHAMBER: &str = "1";

/// The built-in Friday networking series: the next Friday on or after
/// `today`, then weekly at 07:30, `FRIDAY_SERIES_COUNT` times.
///
/// Ids derive from each occurrence's calendar date, so regenerating the
/// series (on the same day or any later one) produces overlapping ids and
/// the store's merge drops the duplicates.
pub fn friday_series(today: NaiveDate) -> Vec<Event> {
    let time = NaiveTime::from_hms_opt(7, 30, 0).unwrap_or_default();
    let mut date = next_weekday_on_or_after(today, Weekday::Fri);

    let mut events = Vec::with_capacity(FRIDAY_SERIES_COUNT);
    for _ in 0..FRIDAY_SERIES_COUNT {
        events.push(Event {
            id: format!("recurring-friday-{}", date.format("%Y-%m-%d")),
            chamber_id: FRIDAY_SERIES_CHAMBER.to_string(),
            title: "Friday Morning Networking".to_string(),
            date: date.and_time(time).and_utc(),
            location: "Chamber offices".to_string(),
            description: "Weekly drop-in networking breakfast".to_string(),
            kind: EventType::Networking,
            link: None,
        });
        date += Duration::days(7);
    }

    events
}

fn next_weekday_on_or_after(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    from + Duration::days(i64::from(ahead))
}

/// Interval class for user-defined recurring events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Weekly,
    Monthly,
}

impl Interval {
    /// Fixed step widths: a "month" is a flat 30 days.
    pub fn days(self) -> i64 {
        match self {
            Interval::Weekly => 7,
            Interval::Monthly => 30,
        }
    }
}

/// A transient recurrence rule. Expanded once into standalone events at
/// creation time; never stored as a first-class entity.
#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    pub start: DateTime<Utc>,
    pub interval: Interval,
    pub occurrences: u32,
    /// Ceiling on the occurrence's calendar date, applied in addition to
    /// the occurrence count; whichever bound hits first wins.
    pub end_date: Option<NaiveDate>,
}

/// Everything about the generated events except their schedule.
#[derive(Debug, Clone)]
pub struct EventTemplate {
    pub chamber_id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub kind: EventType,
}

/// Expand a rule into standalone events.
///
/// Each expansion mints a fresh series seed; within the batch, ids derive
/// from the seed plus the occurrence date, so one batch can never collide
/// with itself or with a differently seeded batch.
pub fn expand_rule(rule: &RecurrenceRule, template: &EventTemplate) -> Vec<Event> {
    let seed = Uuid::new_v4();
    let step = Duration::days(rule.interval.days());

    let mut events = Vec::new();
    let mut date = rule.start;
    for _ in 0..rule.occurrences {
        if let Some(end) = rule.end_date {
            if date.date_naive() > end {
                break;
            }
        }
        events.push(Event {
            id: format!("{seed}-{}", date.date_naive().format("%Y-%m-%d")),
            chamber_id: template.chamber_id.clone(),
            title: template.title.clone(),
            date,
            location: template.location.clone(),
            description: template.description.clone(),
            kind: template.kind,
            link: None,
        });
        date += step;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template() -> EventTemplate {
        EventTemplate {
            chamber_id: "2".to_string(),
            title: "Coffee Club".to_string(),
            location: "Cafe".to_string(),
            description: "".to_string(),
            kind: EventType::Networking,
        }
    }

    #[test]
    fn friday_series_starts_on_the_next_friday() {
        // 2024-06-05 is a Wednesday; the next Friday is 06-07
        let events = friday_series(day(2024, 6, 5));
        assert_eq!(events.len(), 26);
        assert_eq!(events[0].day(), day(2024, 6, 7));
        assert_eq!(events[0].date.format("%H:%M").to_string(), "07:30");
        assert_eq!(events[0].id, "recurring-friday-2024-06-07");
    }

    #[test]
    fn friday_series_keeps_a_friday_anchor() {
        // A Friday stays put; every occurrence is a Friday, a week apart
        let events = friday_series(day(2024, 6, 7));
        assert_eq!(events[0].day(), day(2024, 6, 7));
        for window in events.windows(2) {
            assert_eq!(window[0].date.weekday(), Weekday::Fri);
            assert_eq!(window[1].day() - window[0].day(), Duration::days(7));
        }
    }

    #[test]
    fn friday_series_regeneration_yields_identical_ids() {
        let today = day(2024, 6, 5);
        let first: Vec<_> = friday_series(today).into_iter().map(|e| e.id).collect();
        let second: Vec<_> = friday_series(today).into_iter().map(|e| e.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn friday_series_overlaps_across_later_days() {
        // Regenerating a week later shares 25 of 26 ids with the original
        let first: Vec<_> = friday_series(day(2024, 6, 5)).into_iter().map(|e| e.id).collect();
        let second: Vec<_> = friday_series(day(2024, 6, 12)).into_iter().map(|e| e.id).collect();
        let shared = second.iter().filter(|id| first.contains(id)).count();
        assert_eq!(shared, 25);
    }

    #[test]
    fn weekly_rule_emits_the_requested_count() {
        let rule = RecurrenceRule {
            start: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            interval: Interval::Weekly,
            occurrences: 4,
            end_date: None,
        };
        let events = expand_rule(&rule, &template());

        let days: Vec<_> = events.iter().map(|e| e.day()).collect();
        assert_eq!(
            days,
            vec![day(2024, 1, 5), day(2024, 1, 12), day(2024, 1, 19), day(2024, 1, 26)]
        );
    }

    #[test]
    fn end_date_ceiling_cuts_the_batch_short() {
        let rule = RecurrenceRule {
            start: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            interval: Interval::Weekly,
            occurrences: 4,
            end_date: Some(day(2024, 1, 15)),
        };
        let events = expand_rule(&rule, &template());

        let days: Vec<_> = events.iter().map(|e| e.day()).collect();
        assert_eq!(days, vec![day(2024, 1, 5), day(2024, 1, 12)]);
    }

    #[test]
    fn monthly_rule_steps_thirty_days() {
        let rule = RecurrenceRule {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap(),
            interval: Interval::Monthly,
            occurrences: 3,
            end_date: None,
        };
        let events = expand_rule(&rule, &template());

        let days: Vec<_> = events.iter().map(|e| e.day()).collect();
        assert_eq!(days, vec![day(2024, 1, 1), day(2024, 1, 31), day(2024, 3, 1)]);
    }

    #[test]
    fn each_expansion_gets_its_own_seed() {
        let rule = RecurrenceRule {
            start: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            interval: Interval::Weekly,
            occurrences: 2,
            end_date: None,
        };
        let first = expand_rule(&rule, &template());
        let second = expand_rule(&rule, &template());
        assert_ne!(first[0].id, second[0].id);

        // Ids within one batch are unique
        assert_ne!(first[0].id, first[1].id);
    }
}
