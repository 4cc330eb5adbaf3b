//! Property-based tests for slot resolution using proptest.
//!
//! These verify invariants that must hold for *any* schedule, booking set,
//! and timezone pair — not just the hand-picked examples in
//! `resolver_tests.rs` and `timezone_tests.rs`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;
use slotcal_core::types::{AvailabilityEntry, Booking, DayOfWeek, Schedule};
use slotcal_core::{compute_available_slots, validate_schedule};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_day() -> impl Strategy<Value = DayOfWeek> {
    (0usize..7).prop_map(|i| DayOfWeek::ALL[i])
}

/// An entry anywhere in the day, 15-120 minutes long, clamped to midnight.
fn arb_entry() -> impl Strategy<Value = AvailabilityEntry> {
    (arb_day(), 0u16..1380, 15u16..=120).prop_map(|(day, start, len)| {
        AvailabilityEntry::new(day, start, (start + len).min(1440))
    })
}

fn arb_timezone() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("UTC".to_string()),
        Just("America/New_York".to_string()),
        Just("America/Los_Angeles".to_string()),
        Just("Europe/London".to_string()),
        Just("Asia/Tokyo".to_string()),
        Just("Australia/Sydney".to_string()),
    ]
}

fn arb_schedule() -> impl Strategy<Value = Schedule> {
    (arb_timezone(), prop::collection::vec(arb_entry(), 0..8))
        .prop_map(|(tz, entries)| Schedule::new(tz, entries))
}

/// Bookings within ±1 day of the target date, as minute offsets from
/// 2026-03-15T00:00Z.
fn arb_bookings() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec((0i64..4000, 15i64..=180), 0..6).prop_map(|pairs| {
        let base = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        pairs
            .into_iter()
            .map(|(offset, len)| {
                let start = base + Duration::minutes(offset);
                Booking::new(start, start + Duration::minutes(len))
            })
            .collect()
    })
}

fn arb_duration() -> impl Strategy<Value = u32> {
    prop_oneof![Just(15u32), Just(30), Just(45), Just(60), Just(90)]
}

fn target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// No returned slot may overlap any supplied booking (half-open).
    #[test]
    fn slots_never_overlap_bookings(
        schedule in arb_schedule(),
        bookings in arb_bookings(),
        duration in arb_duration(),
        viewer_tz in arb_timezone(),
    ) {
        let slots =
            compute_available_slots(&schedule, &bookings, duration, target_date(), &viewer_tz)
                .unwrap();
        let dur = Duration::minutes(i64::from(duration));

        for slot in &slots {
            let slot_end = *slot + dur;
            for booking in &bookings {
                prop_assert!(
                    !(*slot < booking.end && booking.start < slot_end),
                    "slot {slot} overlaps booking {}..{}",
                    booking.start,
                    booking.end,
                );
            }
        }
    }

    /// The result sequence is strictly increasing (which also implies it is
    /// duplicate-free).
    #[test]
    fn slots_are_strictly_increasing(
        schedule in arb_schedule(),
        bookings in arb_bookings(),
        duration in arb_duration(),
        viewer_tz in arb_timezone(),
    ) {
        let slots =
            compute_available_slots(&schedule, &bookings, duration, target_date(), &viewer_tz)
                .unwrap();
        for pair in slots.windows(2) {
            prop_assert!(pair[0] < pair[1], "not strictly increasing: {pair:?}");
        }
    }

    /// Every slot's start instant falls on the requested date as seen in the
    /// viewer's timezone.
    #[test]
    fn slots_fall_on_the_viewer_local_date(
        schedule in arb_schedule(),
        duration in arb_duration(),
        viewer_tz in arb_timezone(),
    ) {
        let slots =
            compute_available_slots(&schedule, &[], duration, target_date(), &viewer_tz)
                .unwrap();
        let tz: Tz = viewer_tz.parse().unwrap();
        for slot in &slots {
            prop_assert_eq!(slot.with_timezone(&tz).date_naive(), target_date());
        }
    }

    /// Every slot lies inside some projection of an availability entry: its
    /// local start in the owner's zone matches an entry covering that minute
    /// on that weekday. The target week has no DST transition in any of the
    /// sampled zones, so gap shifting cannot move a start off its grid.
    #[test]
    fn slots_come_from_some_availability_entry(
        schedule in arb_schedule(),
        duration in arb_duration(),
        viewer_tz in arb_timezone(),
    ) {
        let slots =
            compute_available_slots(&schedule, &[], duration, target_date(), &viewer_tz)
                .unwrap();
        let owner_tz: Tz = schedule.timezone.parse().unwrap();

        for slot in &slots {
            let local = slot.with_timezone(&owner_tz);
            let day = DayOfWeek::from_weekday(local.weekday());
            let minute = minutes_since_midnight(&local);
            let covered = schedule.availabilities.iter().any(|e| {
                e.day_of_week == day && e.start_minute <= minute && minute < e.end_minute
            });
            prop_assert!(covered, "slot {slot} maps to uncovered {day} minute {minute}");
        }
    }

    /// Schedules built from a disjoint per-day grid always validate.
    #[test]
    fn disjoint_grid_schedules_always_validate(
        cells in prop::collection::hash_set((0usize..7, 0u16..12), 0..10),
        tz in arb_timezone(),
    ) {
        // Each grid cell is a two-hour band; one entry per cell can never
        // overlap another.
        let entries: Vec<AvailabilityEntry> = cells
            .into_iter()
            .map(|(day, cell)| {
                AvailabilityEntry::new(DayOfWeek::ALL[day], cell * 120, cell * 120 + 60)
            })
            .collect();
        let schedule = Schedule::new(tz, entries);
        prop_assert!(validate_schedule(&schedule).is_ok());
    }
}

fn minutes_since_midnight(local: &DateTime<Tz>) -> u16 {
    use chrono::Timelike;
    (local.hour() * 60 + local.minute()) as u16
}
