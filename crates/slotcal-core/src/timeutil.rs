//! Pure time conversion helpers.
//!
//! Converts between the (day-of-week, minute-offset) wall-clock
//! representation and absolute UTC instants in a named IANA timezone, using
//! the zone's actual UTC offset for the specific date (DST-aware, never a
//! fixed offset). Also provides the half-open interval overlap predicate the
//! rest of the engine is built on.
//!
//! DST disambiguation is a fixed, documented policy:
//! - ambiguous local times (fall-back hour) resolve to the earlier offset;
//! - nonexistent local times (spring-forward gap) shift forward to the first
//!   valid wall time after the gap.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};
use crate::types::MINUTES_PER_DAY;

/// Split a minutes-since-midnight offset into `(hour, minute)`.
///
/// Total over `[0, 1440)`; callers keep inputs below 1440 (an end minute of
/// exactly 1440 is normalized to the next day's midnight by
/// [`local_minute_to_instant`], not here).
pub fn minutes_to_local_time(minute: u16) -> (u32, u32) {
    (u32::from(minute / 60), u32::from(minute % 60))
}

/// Parse an IANA timezone identifier into a `chrono_tz::Tz`.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(timezone.to_string()))
}

/// Resolve a wall-clock minute offset on a calendar date in a named timezone
/// to an absolute instant.
///
/// A minute offset of exactly 1440 means midnight of the following day, so
/// availability end minutes resolve without a special case at the caller.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` if the identifier is unrecognized.
pub fn local_minute_to_instant(date: NaiveDate, minute: u16, timezone: &str) -> Result<DateTime<Utc>> {
    let tz = parse_timezone(timezone)?;
    Ok(resolve_local(date, minute, tz))
}

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`
/// overlap iff `a_start < b_end && b_start < a_end`. Touching endpoints do
/// not overlap.
pub fn intervals_overlap<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}

/// DST-aware resolution of a local minute offset against an already-parsed
/// zone. See the module docs for the gap/ambiguity policy.
pub(crate) fn resolve_local(date: NaiveDate, minute: u16, tz: Tz) -> DateTime<Utc> {
    // Normalize offset 1440 to the next day's midnight. succ_opt only fails
    // at the far edge of the representable range.
    let (date, minute) = if minute >= MINUTES_PER_DAY {
        (
            date.succ_opt().unwrap_or(date),
            minute - MINUTES_PER_DAY,
        )
    } else {
        (date, minute)
    };

    let (hour, min) = minutes_to_local_time(minute);
    let naive = date
        .and_hms_opt(hour, min, 0)
        .expect("minute offset below 1440 is a valid wall time");

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => shift_past_gap(naive, tz),
    }
}

/// The wall time falls inside a spring-forward gap. Probe forward in small
/// steps until the zone can represent the time again. Real-world gaps are at
/// most a few hours; the probe is bounded so a pathological zone database
/// cannot loop forever.
fn shift_past_gap(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let step = Duration::minutes(5);
    let mut probe = naive;
    for _ in 0..(24 * 12) {
        probe += step;
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => continue,
        }
    }
    // Unreachable with a sane tz database; interpret as UTC rather than panic.
    Utc.from_utc_datetime(&naive)
}
