//! The add-event command.
//!
//! Invalid input (blank title, unknown chamber, unparseable date or time)
//! is reported with a quiet one-line notice rather than an error; the
//! command still exits zero.

use anyhow::Result;
use chambercal_core::recurrence::{EventTemplate, Interval, RecurrenceRule};
use chambercal_core::{ChamberCalendar, EventType, Schedule};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;

#[derive(Args)]
pub struct AddEventArgs {
    title: String,

    /// Event date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Event time (HH:MM)
    #[arg(short, long, default_value = "09:00")]
    time: String,

    /// Hosting chamber id
    #[arg(short, long)]
    chamber: String,

    /// Venue
    #[arg(short, long, default_value = "")]
    location: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Event kind
    #[arg(short, long, value_enum, default_value = "networking")]
    kind: KindArg,

    /// Repeat the event at this interval
    #[arg(short, long, value_enum)]
    recurring: Option<RecurringArg>,

    /// Number of occurrences when recurring
    #[arg(short, long, default_value_t = 1)]
    occurrences: u32,

    /// Stop recurring after this date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Networking,
    Luncheon,
    Workshop,
    Conference,
    Orientation,
}

impl From<KindArg> for EventType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Networking => EventType::Networking,
            KindArg::Luncheon => EventType::Luncheon,
            KindArg::Workshop => EventType::Workshop,
            KindArg::Conference => EventType::Conference,
            KindArg::Orientation => EventType::Orientation,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecurringArg {
    Weekly,
    Monthly,
}

impl From<RecurringArg> for Interval {
    fn from(interval: RecurringArg) -> Self {
        match interval {
            RecurringArg::Weekly => Interval::Weekly,
            RecurringArg::Monthly => Interval::Monthly,
        }
    }
}

pub fn run(app: &mut ChamberCalendar, args: AddEventArgs) -> Result<()> {
    let schedule = match build_schedule(&args) {
        Some(schedule) => schedule,
        None => {
            println!(
                "{}",
                "Nothing added: dates are YYYY-MM-DD, times HH:MM".dimmed()
            );
            return Ok(());
        }
    };

    let template = EventTemplate {
        chamber_id: args.chamber,
        title: args.title,
        location: args.location,
        description: args.description,
        kind: args.kind.into(),
    };

    match app.add_event(&template, &schedule)? {
        Some(1) => println!("{}", "Added 1 event".green()),
        Some(n) => println!("{}", format!("Added {n} events").green()),
        None => println!(
            "{}",
            "Nothing added: events need a title and a registered chamber".dimmed()
        ),
    }
    Ok(())
}

/// `None` when any date or time field fails to parse; the caller treats
/// that the same as the other rejected inputs.
fn build_schedule(args: &AddEventArgs) -> Option<Schedule> {
    let day = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&args.time, "%H:%M").ok()?;
    let start = day.and_time(time).and_utc();

    let end_date = match args.end_date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?),
        None => None,
    };

    Some(match args.recurring {
        Some(interval) => Schedule::Recurring(RecurrenceRule {
            start,
            interval: interval.into(),
            occurrences: args.occurrences,
            end_date,
        }),
        None => Schedule::Once(start),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chambercal_core::ChamberCalendar;

    fn args(date: &str, time: &str) -> AddEventArgs {
        AddEventArgs {
            title: "Board Social".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            chamber: "1".to_string(),
            location: "".to_string(),
            description: "".to_string(),
            kind: KindArg::Networking,
            recurring: None,
            occurrences: 1,
            end_date: None,
        }
    }

    #[test]
    fn build_schedule_parses_a_single_occurrence() {
        match build_schedule(&args("2030-01-10", "18:00")) {
            Some(Schedule::Once(start)) => {
                assert_eq!(start.to_rfc3339(), "2030-01-10T18:00:00+00:00");
            }
            other => panic!("expected a single occurrence, got {other:?}"),
        }
    }

    #[test]
    fn build_schedule_rejects_unparseable_fields() {
        assert!(build_schedule(&args("June 7", "09:00")).is_none());
        assert!(build_schedule(&args("2030-01-10", "9 am")).is_none());

        let mut bad_end = args("2030-01-10", "09:00");
        bad_end.recurring = Some(RecurringArg::Weekly);
        bad_end.end_date = Some("soon".to_string());
        assert!(build_schedule(&bad_end).is_none());
    }

    #[test]
    fn bad_date_or_time_adds_nothing_and_exits_clean() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = ChamberCalendar::load(dir.path().to_path_buf()).unwrap();
        let before = app.store.len();

        assert!(run(&mut app, args("June 7", "09:00")).is_ok());
        assert!(run(&mut app, args("2030-01-10", "9 am")).is_ok());

        assert_eq!(app.store.len(), before);
    }
}
