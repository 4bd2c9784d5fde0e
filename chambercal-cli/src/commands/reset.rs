//! Reset command: wipe all state back to the defaults.

use anyhow::Result;
use chambercal_core::ChamberCalendar;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(app: &mut ChamberCalendar, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Discard all chambers and events and restore the defaults?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing changed".dimmed());
            return Ok(());
        }
    }

    app.reset_to_defaults()?;
    println!("{}", "Restored default chambers and sample events".green());
    Ok(())
}
