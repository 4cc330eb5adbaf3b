//! `slotcal` CLI — validate schedules and list bookable slots from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a schedule JSON file
//! slotcal validate -s schedule.json
//!
//! # List bookable 30-minute slots for a date, as seen from Tokyo
//! slotcal slots -s schedule.json --date 2026-03-16 --duration 30 --timezone Asia/Tokyo
//!
//! # Subtract existing bookings and emit a JSON array
//! slotcal slots -s schedule.json -b bookings.json --date 2026-03-16 \
//!     --duration 30 --timezone UTC --json
//!
//! # Read the schedule from stdin
//! cat schedule.json | slotcal slots -s - --date 2026-03-16 --duration 30 --timezone UTC
//! ```

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use slotcal_core::types::{Booking, Schedule};
use slotcal_core::{compute_available_slots, validate_schedule};

#[derive(Parser)]
#[command(
    name = "slotcal",
    version,
    about = "Timezone-aware availability resolution for calendar booking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schedule JSON file
    Validate {
        /// Schedule JSON file ("-" reads from stdin)
        #[arg(short, long)]
        schedule: String,
    },
    /// List bookable start instants for a date
    Slots {
        /// Schedule JSON file ("-" reads from stdin)
        #[arg(short, long)]
        schedule: String,
        /// Bookings JSON file (an array of {start, end} instants)
        #[arg(short, long)]
        bookings: Option<String>,
        /// Target calendar date in the viewer's timezone (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Event duration in minutes
        #[arg(long)]
        duration: u32,
        /// Viewer's IANA timezone (e.g., "Asia/Tokyo")
        #[arg(long)]
        timezone: String,
        /// Emit a JSON array instead of one instant per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { schedule } => {
            let schedule: Schedule = read_json(&schedule)?;
            match validate_schedule(&schedule) {
                Ok(()) => println!("Schedule is valid."),
                Err(err) => {
                    eprintln!("Invalid schedule: {err}");
                    process::exit(1);
                }
            }
        }
        Commands::Slots {
            schedule,
            bookings,
            date,
            duration,
            timezone,
            json,
        } => {
            let schedule: Schedule = read_json(&schedule)?;
            let bookings: Vec<Booking> = match bookings {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };

            let slots = compute_available_slots(&schedule, &bookings, duration, date, &timezone)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot.to_rfc3339());
                }
            }
        }
    }

    Ok(())
}

/// Read and deserialize a JSON file, with "-" meaning stdin.
fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON from {}", path))
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}
