//! Core data model: weekly availability, schedules, bookings, event types.
//!
//! All types are plain serde-derived records. The engine treats them as
//! immutable snapshots — a [`Schedule`] is replaced wholesale on save, and a
//! [`Booking`] never changes once created. Wall-clock values (day-of-week,
//! minute offsets) and absolute instants are kept in separate types and are
//! only ever compared after explicit conversion.

use std::fmt;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Minutes in a full day. An entry's `end_minute` may equal this value
/// (meaning midnight of the following day); `start_minute` may not.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Day of the week in fixed canonical order, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in canonical order, for grouping and iteration.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Map from chrono's weekday representation.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    /// Map to chrono's weekday representation.
    pub fn weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }

    /// Lowercase day name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recurring weekly availability window, expressed as minutes since
/// local midnight in the owning schedule's timezone.
///
/// Invariant (enforced by [`validate_schedule`](crate::validate_schedule),
/// not by construction): `start_minute < end_minute <= 1440`. Entries never
/// cross a local day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub day_of_week: DayOfWeek,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl AvailabilityEntry {
    pub fn new(day_of_week: DayOfWeek, start_minute: u16, end_minute: u16) -> Self {
        Self {
            day_of_week,
            start_minute,
            end_minute,
        }
    }
}

/// An owner's recurring weekly schedule: a flat collection of availability
/// entries tagged with the owner's IANA timezone.
///
/// The resolver always operates on a full, immutable snapshot — never
/// incremental mutation. Entries need not be sorted and the core does not
/// deduplicate them; validation is the only gate before a snapshot becomes
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// IANA timezone identifier (e.g., "America/New_York").
    pub timezone: String,
    pub availabilities: Vec<AvailabilityEntry>,
}

impl Schedule {
    pub fn new(timezone: impl Into<String>, availabilities: Vec<AvailabilityEntry>) -> Self {
        Self {
            timezone: timezone.into(),
            availabilities,
        }
    }
}

/// A confirmed booking the resolver must avoid. Immutable once created.
///
/// Invariant: `start < end` (half-open interval `[start, end)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Booking {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// A bookable event kind. Carries no scheduling logic; its duration sizes
/// the slots the resolver emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub duration_minutes: u32,
}

impl EventType {
    pub fn new(duration_minutes: u32) -> Self {
        Self { duration_minutes }
    }
}

/// Guest details recorded against a created booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeInfo {
    pub name: String,
    pub email: String,
}
