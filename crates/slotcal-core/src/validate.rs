//! Schedule validation — the only gate before a snapshot becomes authoritative.
//!
//! Pure predicate/report function: no mutation, no normalization. Violations
//! identify the offending entry (or pair) by index into the candidate list so
//! the caller can re-render with field-level messages.

use chrono_tz::Tz;

use crate::error::ValidationError;
use crate::timeutil::intervals_overlap;
use crate::types::{Schedule, MINUTES_PER_DAY};

/// Validate a candidate schedule.
///
/// Checks, in order:
/// 1. the timezone string parses as an IANA identifier;
/// 2. every entry satisfies `start_minute < end_minute <= 1440`;
/// 3. no two entries on the same day-of-week have overlapping minute ranges
///    (half-open — entries that touch are allowed).
///
/// Entries on different days never conflict, and the entry list need not be
/// sorted.
pub fn validate_schedule(schedule: &Schedule) -> Result<(), ValidationError> {
    if schedule.timezone.parse::<Tz>().is_err() {
        return Err(ValidationError::InvalidTimezone(schedule.timezone.clone()));
    }

    for (index, entry) in schedule.availabilities.iter().enumerate() {
        if entry.end_minute > MINUTES_PER_DAY {
            return Err(ValidationError::MinuteOutOfRange {
                index,
                day_of_week: entry.day_of_week,
                end_minute: entry.end_minute,
            });
        }
        if entry.start_minute >= entry.end_minute {
            return Err(ValidationError::InvertedRange {
                index,
                day_of_week: entry.day_of_week,
                start_minute: entry.start_minute,
                end_minute: entry.end_minute,
            });
        }
    }

    // Pairwise same-day overlap check. Schedules are small (a handful of
    // entries per day), so the quadratic scan is fine and keeps the original
    // indices intact for error reporting.
    let entries = &schedule.availabilities;
    for first in 0..entries.len() {
        for second in (first + 1)..entries.len() {
            let a = &entries[first];
            let b = &entries[second];
            if a.day_of_week == b.day_of_week
                && intervals_overlap(a.start_minute, a.end_minute, b.start_minute, b.end_minute)
            {
                return Err(ValidationError::OverlappingEntries {
                    day_of_week: a.day_of_week,
                    first,
                    second,
                });
            }
        }
    }

    Ok(())
}
