//! Colored terminal rendering for core types.

use chambercal_core::{ChamberRegistry, Event, EventType};
use owo_colors::OwoColorize;

/// One line per event: time, kind tag, title, chamber attribution.
pub fn event_line(event: &Event, registry: &ChamberRegistry) -> String {
    let time = event.date.format("%H:%M");
    let chamber = registry.name_of(&event.chamber_id).unwrap_or("Unattributed");

    format!(
        "  {} {} {} {}",
        time.to_string().dimmed(),
        kind_tag(event.kind),
        event.title,
        format!("[{chamber}]").dimmed()
    )
}

pub fn kind_tag(kind: EventType) -> String {
    let label = format!("({})", kind.as_str());
    match kind {
        EventType::Networking => label.blue().to_string(),
        EventType::Workshop => label.green().to_string(),
        EventType::Luncheon => label.yellow().to_string(),
        EventType::Conference => label.magenta().to_string(),
        EventType::Orientation => label.cyan().to_string(),
    }
}
