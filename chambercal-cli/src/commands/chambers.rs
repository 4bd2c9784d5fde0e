//! Chamber management commands.

use anyhow::Result;
use chambercal_core::ChamberCalendar;
use owo_colors::OwoColorize;

pub fn list(app: &ChamberCalendar) -> Result<()> {
    if app.registry.is_empty() {
        println!("{}", "No chambers registered".dimmed());
        return Ok(());
    }

    for chamber in app.registry.chambers() {
        let state = if chamber.enabled {
            "enabled ".green().to_string()
        } else {
            "disabled".red().to_string()
        };
        let detail = if chamber.location.is_empty() {
            String::new()
        } else {
            format!(" ({})", chamber.location)
        };
        println!("  {state} {}{} {}", chamber.name, detail, format!("[{}]", chamber.id).dimmed());
    }
    Ok(())
}

pub fn add(app: &mut ChamberCalendar, name: &str, location: &str, website: &str) -> Result<()> {
    match app.add_chamber(name, location, website)? {
        Some(id) => println!("{} {}", "Added chamber".green(), format!("[{id}]").dimmed()),
        None => println!("{}", "A chamber needs a non-empty name; nothing added".dimmed()),
    }
    Ok(())
}

pub fn remove(app: &mut ChamberCalendar, id: &str) -> Result<()> {
    if app.remove_chamber(id)? {
        println!("{}", "Removed chamber; its events are no longer shown".yellow());
    } else {
        println!("{}", format!("No chamber with id '{id}'").red());
    }
    Ok(())
}

pub fn toggle(app: &mut ChamberCalendar, id: &str) -> Result<()> {
    match app.toggle_chamber(id)? {
        Some(true) => println!("{}", "Chamber enabled".green()),
        Some(false) => println!("{}", "Chamber disabled".yellow()),
        None => println!("{}", format!("No chamber with id '{id}'").red()),
    }
    Ok(())
}
