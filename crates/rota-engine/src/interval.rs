//! Half-open time intervals with overlap detection.

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RotaError};
use crate::time::WallClockTime;

/// An ordered pair of instants, `start <= finish`.
///
/// Overlap comparisons are half-open: an interval that finishes exactly when
/// another starts does not overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: WallClockTime,
    pub finish: WallClockTime,
}

impl Interval {
    /// Build an interval, rejecting `finish < start`.
    ///
    /// Callers constructing the fields directly are responsible for the
    /// ordering invariant themselves; [`Calendar`](crate::Calendar) does not
    /// re-check it.
    ///
    /// # Errors
    /// Returns [`RotaError::InvalidInterval`] when `finish` precedes `start`.
    pub fn new(start: WallClockTime, finish: WallClockTime) -> Result<Self> {
        if finish < start {
            return Err(RotaError::InvalidInterval {
                start: start.to_string(),
                finish: finish.to_string(),
            });
        }
        Ok(Self { start, finish })
    }

    /// Whether two intervals share any instant.
    ///
    /// `a.start < b.finish && b.start < a.finish` — touching endpoints do not
    /// overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.finish && other.start < self.finish
    }

    /// Re-express both endpoints in another zone; the instants are unchanged.
    pub fn in_zone(self, zone: Tz) -> Self {
        Self {
            start: self.start.in_zone(zone),
            finish: self.finish.in_zone(zone),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.finish)
    }
}
