//! coursework CLI — prints the schedule found in `./schedule.txt`.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coursework_core::model::Schedule;
use coursework_core::parser::read_schedule;

/// Schedule file read from the current directory.
const SCHEDULE_FILE: &str = "schedule.txt";

#[derive(Parser)]
#[command(
    name = "coursework",
    version,
    about = "Print a student's classes, assignments, and exams",
    long_about = "Print a student's classes, assignments, and exams.\n\n\
                  Reads schedule.txt from the current directory. Set RUST_LOG \
                  (e.g. RUST_LOG=coursework=debug) for diagnostics on stderr."
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coursework=info")),
        )
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let path = Path::new(SCHEDULE_FILE);
    tracing::debug!("reading schedule from {}", path.display());
    let parsed = match read_schedule(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            eprintln!("Failed to read schedule. Exiting...");
            process::exit(1);
        }
    };

    for warning in &parsed.warnings {
        eprintln!("{warning}");
    }

    if let Err(e) = print_schedule(&parsed.schedule) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_schedule(schedule: &Schedule) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    coursework_report::write_text(schedule, &mut out).context("failed to write schedule")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
