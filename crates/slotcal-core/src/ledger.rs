//! Read-only booking ledger view.
//!
//! A sorted snapshot of confirmed bookings with range queries and busy-period
//! merging. No conflict policy lives here — the slot resolver decides what
//! "conflict" means against this view.

use chrono::{DateTime, Utc};

use crate::timeutil::intervals_overlap;
use crate::types::Booking;

/// Immutable snapshot of confirmed bookings, sorted by start instant.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    /// Build a ledger from an unordered booking list.
    pub fn new(mut bookings: Vec<Booking>) -> Self {
        bookings.sort_by_key(|b| (b.start, b.end));
        Self { bookings }
    }

    /// All bookings in the snapshot, sorted by start.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings whose interval intersects the half-open range `[from, to)`.
    pub fn overlapping(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| intervals_overlap(b.start, b.end, from, to))
            .copied()
            .collect()
    }

    /// Merge overlapping or adjacent bookings into non-overlapping busy
    /// intervals, clipped to the given window. Bookings entirely outside the
    /// window are discarded.
    ///
    /// Returns a sorted list of `(start, end)` pairs.
    pub fn merge_busy(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        let clipped: Vec<(DateTime<Utc>, DateTime<Utc>)> = self
            .bookings
            .iter()
            .filter(|b| b.start < window_end && b.end > window_start)
            .map(|b| (b.start.max(window_start), b.end.min(window_end)))
            .collect();

        let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
        for (start, end) in clipped {
            if let Some(last) = merged.last_mut() {
                if start <= last.1 {
                    // Overlapping or adjacent — extend the current interval.
                    last.1 = last.1.max(end);
                    continue;
                }
            }
            merged.push((start, end));
        }

        merged
    }
}
