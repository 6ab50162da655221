mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Turn an .ics class schedule into a weekly timetable")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an .ics file and print the weekly schedule
    Show {
        /// Path to the .ics file
        file: PathBuf,

        /// Only show this weekday (e.g. "monday" or "mon")
        #[arg(short, long)]
        day: Option<String>,

        /// Skip invalid events instead of rejecting the whole file
        #[arg(long)]
        lenient: bool,
    },
    /// Validate an .ics file and report every rejected event
    Check {
        /// Path to the .ics file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file, day, lenient } => commands::show::run(&file, day.as_deref(), lenient),
        Commands::Check { file } => commands::check::run(&file),
    }
}
