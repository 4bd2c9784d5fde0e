//! ICS export command.

use std::path::Path;

use anyhow::{Context, Result};
use chambercal_core::{ics, ChamberCalendar};
use owo_colors::OwoColorize;

pub fn run(app: &ChamberCalendar, output: &Path) -> Result<()> {
    let count = app.store.visible(&app.registry).len();
    let content = ics::export_ics(&app.store, &app.registry);

    std::fs::write(output, content)
        .with_context(|| format!("could not write {}", output.display()))?;

    println!("{}", format!("Exported {count} events to {}", output.display()).green());
    Ok(())
}
