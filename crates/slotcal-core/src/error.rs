//! Error types for availability resolution and booking operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::DayOfWeek;

/// Errors surfaced by the availability engine and the booking stores.
#[derive(Error, Debug)]
pub enum SlotError {
    /// The supplied string is not a recognized IANA timezone identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The requested event duration cannot produce any slot.
    #[error("Invalid event duration: {0} minutes")]
    InvalidDuration(u32),

    /// A schedule failed validation before it could become authoritative.
    #[error("Schedule validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The chosen slot was found booked at commit time. The caller must
    /// re-query available slots and retry; the engine never retries itself.
    #[error("Slot {start}..{end} conflicts with an existing booking")]
    SlotConflict {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// No event type is registered under the given identifier.
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
}

/// A schedule rejected at save time. Variants carry the indices of the
/// offending entries so the caller can render field-level messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The schedule's timezone string is not a recognized IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An entry's start minute is not strictly before its end minute.
    #[error(
        "Availability entry {index} on {day_of_week}: start minute {start_minute} \
         is not before end minute {end_minute}"
    )]
    InvertedRange {
        index: usize,
        day_of_week: DayOfWeek,
        start_minute: u16,
        end_minute: u16,
    },

    /// An entry's end minute runs past the end of the day (1440).
    #[error("Availability entry {index} on {day_of_week}: end minute {end_minute} is past end of day")]
    MinuteOutOfRange {
        index: usize,
        day_of_week: DayOfWeek,
        end_minute: u16,
    },

    /// Two entries on the same day have overlapping minute ranges.
    #[error("Availability entries {first} and {second} on {day_of_week} overlap")]
    OverlappingEntries {
        day_of_week: DayOfWeek,
        first: usize,
        second: usize,
    },
}

/// Convenience alias used throughout slotcal-core.
pub type Result<T> = std::result::Result<T, SlotError>;
