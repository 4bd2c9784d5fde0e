//! Feed refresh: fetch every chamber RSS feed concurrently and merge
//! whatever parses. One slow or broken feed never blocks the rest.

use std::time::Duration;

use anyhow::Result;
use chambercal_core::{defaults, feed, ChamberCalendar};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::task::JoinSet;

/// Per-feed budget; a feed that exceeds it counts as failed.
const FEED_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn run(app: &mut ChamberCalendar) -> Result<()> {
    let client = reqwest::Client::builder().timeout(FEED_TIMEOUT).build()?;

    let spinner = feed_spinner(defaults::CHAMBER_FEEDS.len());

    let mut tasks = JoinSet::new();
    for (chamber_id, url) in defaults::CHAMBER_FEEDS {
        let client = client.clone();
        tasks.spawn(async move {
            let body = fetch(&client, url).await;
            (*chamber_id, *url, body)
        });
    }

    let mut added = 0;
    let mut failures: Vec<String> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (chamber_id, url, body) = joined?;

        let events = match body.and_then(|xml| {
            feed::parse_feed(chamber_id, &xml).map_err(|e| e.to_string())
        }) {
            Ok(events) => events,
            Err(reason) => {
                failures.push(format!("{url}: {reason}"));
                continue;
            }
        };
        added += app.merge_feed_events(events)?;
    }
    spinner.finish_and_clear();

    for failure in &failures {
        println!("   {}", failure.red());
    }

    let fetched = defaults::CHAMBER_FEEDS.len() - failures.len();
    println!(
        "{}",
        format!("Refreshed {fetched} of {} feeds, {added} new events", defaults::CHAMBER_FEEDS.len())
            .green()
    );

    Ok(())
}

fn feed_spinner(feed_count: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[".  ", ".. ", "...", " ..", "  .", "   "])
            .template("{spinner} Refreshing {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("{feed_count} chamber feeds"));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<String, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    let response = response.error_for_status().map_err(|e| e.to_string())?;
    response.text().await.map_err(|e| e.to_string())
}
