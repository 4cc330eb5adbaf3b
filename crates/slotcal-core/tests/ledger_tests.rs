//! Tests for the read-only booking ledger view.

use chrono::{DateTime, TimeZone, Utc};
use slotcal_core::types::Booking;
use slotcal_core::BookingLedger;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, minute, 0).unwrap()
}

fn booking(start: (u32, u32), end: (u32, u32)) -> Booking {
    Booking::new(at(start.0, start.1), at(end.0, end.1))
}

#[test]
fn ledger_sorts_bookings_by_start() {
    let ledger = BookingLedger::new(vec![
        booking((14, 0), (15, 0)),
        booking((9, 0), (10, 0)),
    ]);
    assert_eq!(ledger.bookings()[0].start, at(9, 0));
    assert_eq!(ledger.bookings()[1].start, at(14, 0));
}

#[test]
fn overlapping_query_is_half_open() {
    let ledger = BookingLedger::new(vec![
        booking((9, 0), (10, 0)),
        booking((10, 0), (11, 0)),
        booking((13, 0), (14, 0)),
    ]);

    // Range [10:00, 12:00): the 09:00-10:00 booking touches but does not
    // intersect; 13:00 starts after the range ends.
    let hits = ledger.overlapping(at(10, 0), at(12, 0));
    assert_eq!(hits, vec![booking((10, 0), (11, 0))]);
}

#[test]
fn merge_busy_merges_overlapping_and_adjacent_bookings() {
    let ledger = BookingLedger::new(vec![
        booking((9, 0), (10, 30)),
        booking((10, 0), (11, 0)),
        booking((11, 0), (11, 30)),
        booking((14, 0), (15, 0)),
    ]);

    let merged = ledger.merge_busy(at(8, 0), at(17, 0));
    assert_eq!(
        merged,
        vec![(at(9, 0), at(11, 30)), (at(14, 0), at(15, 0))]
    );
}

#[test]
fn merge_busy_clips_to_the_window() {
    let ledger = BookingLedger::new(vec![
        booking((7, 0), (9, 30)),
        booking((16, 30), (18, 0)),
        booking((5, 0), (6, 0)), // entirely outside, discarded
    ]);

    let merged = ledger.merge_busy(at(8, 0), at(17, 0));
    assert_eq!(
        merged,
        vec![(at(8, 0), at(9, 30)), (at(16, 30), at(17, 0))]
    );
}

#[test]
fn empty_ledger_has_no_busy_periods() {
    let ledger = BookingLedger::new(vec![]);
    assert!(ledger.merge_busy(at(8, 0), at(17, 0)).is_empty());
    assert!(ledger.overlapping(at(8, 0), at(17, 0)).is_empty());
}
