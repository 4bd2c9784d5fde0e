//! Event list views.

use anyhow::{Context, Result};
use chambercal_core::ChamberCalendar;
use chrono::{NaiveDate, Utc};
use owo_colors::OwoColorize;

use crate::render;

pub fn run(app: &ChamberCalendar, on: Option<&str>) -> Result<()> {
    match on {
        Some(raw) => {
            let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?;
            list_day(app, day)
        }
        None => list_upcoming(app),
    }
}

fn list_day(app: &ChamberCalendar, day: NaiveDate) -> Result<()> {
    let events = app.store.events_on(day, &app.registry);

    println!("\n{}", day.format("%A, %B %-d %Y").to_string().bold());
    if events.is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", render::event_line(event, &app.registry));
        if !event.location.is_empty() {
            println!("        {}", event.location.dimmed());
        }
    }
    Ok(())
}

fn list_upcoming(app: &ChamberCalendar) -> Result<()> {
    let today = Utc::now().date_naive();
    let upcoming: Vec<_> =
        app.store.visible(&app.registry).into_iter().filter(|e| e.day() >= today).collect();

    if upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    let mut current_day = None;
    for event in upcoming {
        let day = event.day();
        if current_day != Some(day) {
            println!("\n{}", day.format("%A, %B %-d %Y").to_string().bold());
            current_day = Some(day);
        }
        println!("{}", render::event_line(event, &app.registry));
    }
    Ok(())
}
