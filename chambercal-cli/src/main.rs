mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chambercal_core::storage;
use chambercal_core::{ChamberCalendar, LoadOutcome};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use commands::add_event::AddEventArgs;

#[derive(Parser)]
#[command(name = "chambercal")]
#[command(about = "Aggregate regional chamber-of-commerce events into one calendar")]
struct Cli {
    /// Override the state directory (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with event markers
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List upcoming events, or the events on one day
    Events {
        /// Only show events on this day (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// List registered chambers
    Chambers,
    /// Register a chamber
    AddChamber {
        name: String,

        #[arg(short, long, default_value = "")]
        location: String,

        #[arg(short, long, default_value = "")]
        website: String,
    },
    /// Remove a chamber (its events stop being shown)
    RemoveChamber { id: String },
    /// Enable or disable a chamber without removing it
    ToggleChamber { id: String },
    /// Create an event, optionally recurring
    AddEvent(AddEventArgs),
    /// Fetch every chamber RSS feed and merge new events
    Refresh,
    /// Write the visible events to an .ics file
    Export {
        /// Output path
        #[arg(short, long, default_value = "chamber-events.ics")]
        output: PathBuf,
    },
    /// Discard all state and restore the defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => storage::default_data_dir()?,
    };
    let (mut app, outcome) = ChamberCalendar::load(data_dir)?;
    report_seeding(&outcome);

    match cli.command {
        Commands::Calendar { month } => commands::calendar::run(&app, month.as_deref()),
        Commands::Events { on } => commands::events::run(&app, on.as_deref()),
        Commands::Chambers => commands::chambers::list(&app),
        Commands::AddChamber { name, location, website } => {
            commands::chambers::add(&mut app, &name, &location, &website)
        }
        Commands::RemoveChamber { id } => commands::chambers::remove(&mut app, &id),
        Commands::ToggleChamber { id } => commands::chambers::toggle(&mut app, &id),
        Commands::AddEvent(args) => commands::add_event::run(&mut app, args),
        Commands::Refresh => commands::refresh::run(&mut app).await,
        Commands::Export { output } => commands::export::run(&app, &output),
        Commands::Reset { yes } => commands::reset::run(&mut app, yes),
    }
}

fn report_seeding(outcome: &LoadOutcome) {
    if outcome.seeded_chambers {
        println!("{}", "No chamber record found; starting with the default set".dimmed());
    }
    if outcome.seeded_events {
        println!("{}", "No event record found; starting with sample events".dimmed());
    }
}
