//! The user aggregate that owns a calendar.
//!
//! Persistence is external: the surrounding store loads and saves the whole
//! aggregate by key and serializes access per user. Interval endpoints
//! persist as UTC timestamps; the user's zone is applied when rendering.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, Reason};
use crate::error::Result;
use crate::interval::Interval;
use crate::time::parse_timezone;

fn default_time_zone() -> String {
    "UTC".to_string()
}

/// A rotation participant and their unavailability calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// IANA zone identifier used when rendering this user's calendar.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub calendar: Calendar,
}

impl User {
    /// A new user with an empty calendar, rendering in UTC.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time_zone: default_time_zone(),
            calendar: Calendar::new(),
        }
    }

    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = zone.into();
        self
    }

    /// The zone this user's calendar renders in.
    ///
    /// # Errors
    /// Returns [`RotaError::InvalidTimezone`](crate::RotaError::InvalidTimezone)
    /// when the stored identifier is unknown.
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.time_zone)
    }

    /// Record an unavailability window.
    pub fn add_unavailable(&mut self, interval: Interval, reason: Reason) {
        self.calendar.add(interval, reason);
    }

    /// Drop every unavailability record overlapping `range`.
    ///
    /// Returns the number of records removed.
    pub fn clear_unavailable(&mut self, range: &Interval) -> usize {
        self.calendar.clear(range)
    }
}
