//! Month-grid view.

use anyhow::{Context, Result};
use chambercal_core::ChamberCalendar;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use owo_colors::OwoColorize;

pub fn run(app: &ChamberCalendar, month: Option<&str>) -> Result<()> {
    let today = Utc::now().date_naive();
    let first = match month {
        Some(raw) => parse_month(raw)
            .with_context(|| format!("invalid month '{raw}', expected YYYY-MM"))?,
        None => today.with_day(1).unwrap_or(today),
    };

    let event_days: Vec<NaiveDate> =
        app.store.visible(&app.registry).iter().map(|e| e.day()).collect();

    println!("\n{}", first.format("%B %Y").to_string().bold());
    println!("{}", " Sun Mon Tue Wed Thu Fri Sat".dimmed());

    let mut cells: Vec<String> = Vec::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push("    ".to_string());
    }

    let mut day = first;
    while day.month() == first.month() {
        let marker = if event_days.contains(&day) { "*" } else { " " };
        let cell = format!("{:>3}{marker}", day.day());
        if day == today {
            cells.push(cell.bold().cyan().to_string());
        } else {
            cells.push(cell);
        }
        day += Duration::days(1);
    }

    for week in cells.chunks(7) {
        println!("{}", week.concat());
    }
    println!("\n{}", "* marks a day with at least one visible event".dimmed());

    Ok(())
}

fn parse_month(raw: &str) -> Option<NaiveDate> {
    let (year, month) = raw.split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}
