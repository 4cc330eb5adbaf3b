//! Store seams and the caller-facing slot query.
//!
//! [`ScheduleStore`] and [`BookingStore`] are the boundaries behind which the
//! real system's persistence lives. [`get_available_slots`] composes them
//! with the resolver. [`MemoryStore`] is a concrete in-memory backend for the
//! CLI and tests; it also demonstrates the check-and-commit contract a real
//! booking store must honor.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::{Result, SlotError, ValidationError};
use crate::resolver::compute_available_slots;
use crate::timeutil::intervals_overlap;
use crate::types::{AttendeeInfo, Booking, EventType, Schedule};
use crate::validate::validate_schedule;

/// Schedule persistence seam.
pub trait ScheduleStore {
    /// The owner's current schedule snapshot, if one has been saved.
    fn load_schedule(&self, owner_id: &str) -> Option<Schedule>;

    /// Replace the owner's schedule wholesale. The candidate is validated
    /// first; on failure nothing is saved.
    fn save_schedule(
        &mut self,
        owner_id: &str,
        schedule: Schedule,
    ) -> std::result::Result<(), ValidationError>;
}

/// Booking persistence seam.
pub trait BookingStore {
    /// All confirmed bookings for the owner whose interval intersects the
    /// half-open range `[from, to)`.
    fn list_bookings(&self, owner_id: &str, from: DateTime<Utc>, to: DateTime<Utc>)
        -> Vec<Booking>;

    /// Commit a new booking.
    ///
    /// Implementations must re-validate the chosen interval against the
    /// current ledger inside the same mutation that inserts it, and fail with
    /// [`SlotError::SlotConflict`] on overlap. The resolver only reports
    /// availability as of the snapshot it was given; this is where the
    /// check-and-commit race is closed.
    fn create_booking(
        &mut self,
        owner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        attendee: AttendeeInfo,
    ) -> Result<Booking>;
}

/// Caller-facing query: load the owner's schedule, fetch the bookings that
/// could collide with the target date, and resolve slots for the event type.
///
/// An owner with no saved schedule has no availability — empty vec, not an
/// error. The booking fetch window is the target date padded by a day on
/// each side plus the event duration, in UTC: a slot starting on the
/// viewer's target date can begin up to 14h before or after the UTC day
/// (the extreme zone offsets) and still run a full duration past that, so
/// the padding must cover offset extremes *and* the slot length.
pub fn get_available_slots<S, B>(
    schedules: &S,
    bookings: &B,
    owner_id: &str,
    event_type: &EventType,
    target_date: NaiveDate,
    viewer_timezone: &str,
) -> Result<Vec<DateTime<Utc>>>
where
    S: ScheduleStore + ?Sized,
    B: BookingStore + ?Sized,
{
    let Some(schedule) = schedules.load_schedule(owner_id) else {
        return Ok(Vec::new());
    };

    let day_start = target_date.and_time(NaiveTime::MIN).and_utc();
    let duration = Duration::minutes(i64::from(event_type.duration_minutes));
    let from = day_start - Duration::days(1) - duration;
    let to = day_start + Duration::days(2) + duration;
    let existing = bookings.list_bookings(owner_id, from, to);

    compute_available_slots(
        &schedule,
        &existing,
        event_type.duration_minutes,
        target_date,
        viewer_timezone,
    )
}

struct BookingRecord {
    booking: Booking,
    attendee: AttendeeInfo,
}

/// In-memory implementation of both store seams plus an event-type registry.
#[derive(Default)]
pub struct MemoryStore {
    schedules: HashMap<String, Schedule>,
    bookings: HashMap<String, Vec<BookingRecord>>,
    event_types: HashMap<String, EventType>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event type under an identifier.
    pub fn insert_event_type(&mut self, id: impl Into<String>, event_type: EventType) {
        self.event_types.insert(id.into(), event_type);
    }

    /// Look up a registered event type.
    pub fn event_type(&self, id: &str) -> Option<&EventType> {
        self.event_types.get(id)
    }

    /// An owner's bookings with the guest details recorded at creation,
    /// sorted by creation order.
    pub fn booked_attendees(&self, owner_id: &str) -> Vec<(Booking, &AttendeeInfo)> {
        self.bookings
            .get(owner_id)
            .map(|records| records.iter().map(|r| (r.booking, &r.attendee)).collect())
            .unwrap_or_default()
    }

    /// Resolve available slots by event-type identifier.
    ///
    /// # Errors
    /// `SlotError::UnknownEventType` if no event type is registered under
    /// `event_type_id`, plus anything [`get_available_slots`] can return.
    pub fn available_slots(
        &self,
        owner_id: &str,
        event_type_id: &str,
        target_date: NaiveDate,
        viewer_timezone: &str,
    ) -> Result<Vec<DateTime<Utc>>> {
        let event_type = self
            .event_types
            .get(event_type_id)
            .ok_or_else(|| SlotError::UnknownEventType(event_type_id.to_string()))?;
        get_available_slots(self, self, owner_id, event_type, target_date, viewer_timezone)
    }
}

impl ScheduleStore for MemoryStore {
    fn load_schedule(&self, owner_id: &str) -> Option<Schedule> {
        self.schedules.get(owner_id).cloned()
    }

    fn save_schedule(
        &mut self,
        owner_id: &str,
        schedule: Schedule,
    ) -> std::result::Result<(), ValidationError> {
        validate_schedule(&schedule)?;
        self.schedules.insert(owner_id.to_string(), schedule);
        Ok(())
    }
}

impl BookingStore for MemoryStore {
    fn list_bookings(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<Booking> {
        self.bookings
            .get(owner_id)
            .map(|records| {
                records
                    .iter()
                    .map(|r| r.booking)
                    .filter(|b| intervals_overlap(b.start, b.end, from, to))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn create_booking(
        &mut self,
        owner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        attendee: AttendeeInfo,
    ) -> Result<Booking> {
        let records = self.bookings.entry(owner_id.to_string()).or_default();

        // Conflict check and insert happen under the same &mut borrow, so a
        // stale availability snapshot cannot sneak a double booking through.
        let conflict = records
            .iter()
            .any(|r| intervals_overlap(r.booking.start, r.booking.end, start, end));
        if conflict {
            return Err(SlotError::SlotConflict { start, end });
        }

        let booking = Booking::new(start, end);
        records.push(BookingRecord { booking, attendee });
        Ok(booking)
    }
}
