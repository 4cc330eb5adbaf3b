//! Benchmark slot resolution over a dense weekly schedule.

use std::hint::black_box;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use slotcal_core::compute_available_slots;
use slotcal_core::types::{AvailabilityEntry, Booking, DayOfWeek, Schedule};

/// Four two-hour windows on every day of the week.
fn dense_schedule() -> Schedule {
    let mut entries = Vec::new();
    for day in DayOfWeek::ALL {
        for block in 0..4u16 {
            let start = 480 + block * 150; // 08:00, 10:30, 13:00, 15:30
            entries.push(AvailabilityEntry::new(day, start, start + 120));
        }
    }
    Schedule::new("America/New_York", entries)
}

/// Fifty 45-minute bookings scattered across the surrounding days.
fn scattered_bookings() -> Vec<Booking> {
    let base = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
    (0..50)
        .map(|i| {
            let start = base + Duration::minutes(i * 67);
            Booking::new(start, start + Duration::minutes(45))
        })
        .collect()
}

fn bench_resolver(c: &mut Criterion) {
    let schedule = dense_schedule();
    let bookings = scattered_bookings();
    let target = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();

    c.bench_function("resolve_dense_week", |b| {
        b.iter(|| {
            compute_available_slots(
                black_box(&schedule),
                black_box(&bookings),
                30,
                target,
                "Asia/Tokyo",
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
