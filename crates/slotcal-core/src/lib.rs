//! # slotcal-core
//!
//! Timezone-aware availability resolution for calendar booking.
//!
//! Owners define recurring weekly availability windows in their own
//! timezone; visitors request bookable slots for a specific calendar date in
//! *their* timezone. The engine projects the weekly schedule onto absolute
//! instants, subtracts existing bookings, and quantizes what remains into
//! bookable start times — handling the day-of-week remapping that happens
//! when the two timezones' UTC offsets differ.
//!
//! Every computation is a pure function of its inputs: no shared mutable
//! state, no internal locking, no retries. The engine reports availability
//! as of the booking snapshot it was given; closing the race between "check"
//! and "commit" is the booking store's job.
//!
//! ## Modules
//!
//! - [`types`] — data model (schedule, availability entries, bookings)
//! - [`timeutil`] — wall-clock ↔ absolute instant conversion, DST-aware
//! - [`validate`] — schedule validation (overlap/inversion checks)
//! - [`ledger`] — read-only booking snapshot with busy-period merging
//! - [`resolver`] — the slot resolution algorithm
//! - [`store`] — persistence seams, in-memory backend, caller-facing query
//! - [`error`] — error types

pub mod error;
pub mod ledger;
pub mod resolver;
pub mod store;
pub mod timeutil;
pub mod types;
pub mod validate;

pub use error::{Result, SlotError, ValidationError};
pub use ledger::BookingLedger;
pub use resolver::compute_available_slots;
pub use store::{get_available_slots, BookingStore, MemoryStore, ScheduleStore};
pub use timeutil::{intervals_overlap, local_minute_to_instant, minutes_to_local_time};
pub use types::{AttendeeInfo, AvailabilityEntry, Booking, DayOfWeek, EventType, Schedule};
pub use validate::validate_schedule;
