//! Slot resolution — projects a recurring weekly schedule onto a target
//! calendar date in the viewer's timezone and emits bookable start instants.
//!
//! The central correctness requirement is timezone skew: a day-of-week
//! boundary in the owner's zone does not align with the same boundary in the
//! viewer's zone when their UTC offsets differ. An owner's Monday-evening
//! window can be the viewer's Tuesday morning. Naive same-weekday matching
//! silently drops or leaks slots near midnight, so the resolver scans the
//! owner-side dates adjacent to the target date and keeps a slot only if its
//! start instant, viewed in the viewer's zone, lands on the requested date.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{Result, SlotError};
use crate::ledger::BookingLedger;
use crate::timeutil::{parse_timezone, resolve_local};
use crate::types::{Booking, DayOfWeek, Schedule};

/// Compute the bookable start instants for an event of
/// `event_duration_minutes` on `target_date`, as seen from `viewer_timezone`.
///
/// Pure function of its inputs: availability is reported as of the booking
/// snapshot it was given. Atomicity between "check" and "commit" is the
/// caller's responsibility (see [`BookingStore::create_booking`]).
///
/// Algorithm:
/// 1. Scan the owner-side calendar dates `target_date ± 1 day`; entries whose
///    day-of-week matches an owner date are projected to absolute intervals
///    in the *owner's* timezone.
/// 2. Subtract the merged busy intervals of the supplied bookings from each
///    projected interval, leaving continuous free sub-intervals.
/// 3. Quantize each free sub-interval into start instants, stepping by the
///    event duration from the sub-interval start (fixed granularity).
/// 4. Keep a slot only if its start instant falls on `target_date` in the
///    viewer's timezone. The check is per slot, not per entry, because a
///    projected entry can straddle the viewer's midnight.
///
/// The result is strictly increasing with duplicates suppressed. No
/// availability for the date is an empty vec, not an error.
///
/// # Errors
/// `SlotError::InvalidTimezone` for an unrecognized owner or viewer zone,
/// `SlotError::InvalidDuration` for a zero duration.
///
/// [`BookingStore::create_booking`]: crate::store::BookingStore::create_booking
pub fn compute_available_slots(
    schedule: &Schedule,
    bookings: &[Booking],
    event_duration_minutes: u32,
    target_date: NaiveDate,
    viewer_timezone: &str,
) -> Result<Vec<DateTime<Utc>>> {
    if event_duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(0));
    }
    let owner_tz = parse_timezone(&schedule.timezone)?;
    let viewer_tz = parse_timezone(viewer_timezone)?;
    let duration = Duration::minutes(i64::from(event_duration_minutes));

    let ledger = BookingLedger::new(bookings.to_vec());

    // Owner-side dates whose entries can project onto the viewer's target
    // date. One day either side covers any real UTC-offset difference.
    let candidate_dates = [target_date.pred_opt(), Some(target_date), target_date.succ_opt()];

    let mut slots: Vec<DateTime<Utc>> = Vec::new();
    for owner_date in candidate_dates.into_iter().flatten() {
        let day = DayOfWeek::from_weekday(owner_date.weekday());
        for entry in schedule
            .availabilities
            .iter()
            .filter(|e| e.day_of_week == day)
        {
            let abs_start = resolve_local(owner_date, entry.start_minute, owner_tz);
            let abs_end = resolve_local(owner_date, entry.end_minute, owner_tz);
            if abs_start >= abs_end {
                // Entry collapsed entirely into a DST gap.
                continue;
            }

            for (free_start, free_end) in subtract_busy(abs_start, abs_end, &ledger) {
                let mut slot = free_start;
                while slot + duration <= free_end {
                    if slot.with_timezone(&viewer_tz).date_naive() == target_date {
                        slots.push(slot);
                    }
                    slot += duration;
                }
            }
        }
    }

    slots.sort_unstable();
    slots.dedup();
    Ok(slots)
}

/// Subtract the ledger's merged busy intervals from `[start, end)`, returning
/// the remaining free sub-intervals in order.
fn subtract_busy(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    ledger: &BookingLedger,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let busy = ledger.merge_busy(start, end);

    let mut free = Vec::new();
    let mut cursor = start;
    for (busy_start, busy_end) in busy {
        if cursor < busy_start {
            free.push((cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }
    if cursor < end {
        free.push((cursor, end));
    }

    free
}
