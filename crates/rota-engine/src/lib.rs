//! # rota-engine
//!
//! Recurring-schedule and unavailability-calendar engine for rotation
//! schedulers.
//!
//! Given an anchor instant and a repetition rule (weekly, bi-weekly,
//! monthly), the engine answers "when does occurrence N start?" and "which
//! occurrence contains instant T?" correctly across DST transitions and
//! month-length irregularities, and maintains each participant's calendar of
//! unavailability intervals. Occurrence arithmetic preserves local wall-clock
//! time-of-day rather than fixed elapsed duration; calendar clearing removes
//! overlapping records in full rather than clipping them.
//!
//! The engine is pure, synchronous computation over immutable-once-built
//! instants and small in-memory sequences. Who gets scheduled, command
//! parsing, and persistence all live outside it.
//!
//! ## Modules
//!
//! - [`time`] — timezone-bound instants with wall-clock calendar arithmetic
//! - [`interval`] — half-open time intervals with overlap detection
//! - [`period`] — weekly / bi-weekly / monthly recurrence arithmetic
//! - [`calendar`] — per-user unavailability records with overlap-based clearing
//! - [`user`] — the user aggregate that owns a calendar
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod interval;
pub mod period;
pub mod time;
pub mod user;

pub use calendar::{Calendar, Reason, Unavailable};
pub use error::RotaError;
pub use interval::Interval;
pub use period::Period;
pub use time::{parse_timezone, CalendarUnit, WallClockTime};
pub use user::User;
