//! Weekly, bi-weekly, and monthly recurrence arithmetic.
//!
//! A [`Period`] is a rule, not a schedule: an anchor instant supplied per
//! call fully determines every occurrence. Occurrence starts are computed
//! with wall-clock calendar arithmetic, so a 9am anchor yields 9am
//! occurrences on both sides of a DST transition.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::time::{CalendarUnit, WallClockTime};

/// A recurring-schedule rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Weekly,
    BiWeekly,
    Monthly,
}

impl Period {
    /// Start of the occurrence `n` repetitions after `anchor`.
    ///
    /// `n` may be negative (occurrences before the anchor); `n == 0` returns
    /// the anchor itself, in its own zone. Monthly steps land on the anchor's
    /// day-of-month, clamped to the last day of the target month, so a
    /// Jan 31 anchor recurs on Feb 28 (Feb 29 in a leap year).
    pub fn for_number(&self, anchor: WallClockTime, n: i32) -> WallClockTime {
        if n == 0 {
            return anchor;
        }
        let (unit, stride) = self.step();
        anchor.add_calendar(unit, stride * n)
    }

    /// Locate the occurrence interval `[start_n, start_n+1)` containing `now`.
    ///
    /// Returns the occurrence number and its start, or `None` when `now` is
    /// strictly before the anchor — the schedule has not started yet. An
    /// instant exactly on an occurrence boundary belongs to the occurrence it
    /// begins.
    pub fn for_time(
        &self,
        anchor: WallClockTime,
        now: WallClockTime,
    ) -> Option<(i32, WallClockTime)> {
        if now < anchor {
            return None;
        }

        // Seed an estimate from elapsed time over the nominal period length,
        // then walk to the bracketing occurrence. Individual periods are
        // irregular across DST transitions and month lengths, so the estimate
        // can be off by a step in either direction.
        let elapsed = (now - anchor).num_seconds();
        let mut n = (elapsed / self.nominal().num_seconds()) as i32;
        while now < self.for_number(anchor, n) {
            n -= 1;
        }
        while now >= self.for_number(anchor, n + 1) {
            n += 1;
        }
        Some((n, self.for_number(anchor, n)))
    }

    fn step(&self) -> (CalendarUnit, i32) {
        match self {
            Period::Weekly => (CalendarUnit::Weeks, 1),
            Period::BiWeekly => (CalendarUnit::Weeks, 2),
            Period::Monthly => (CalendarUnit::Months, 1),
        }
    }

    /// Nominal period length, used only to seed the occurrence search.
    fn nominal(&self) -> Duration {
        match self {
            Period::Weekly => Duration::weeks(1),
            Period::BiWeekly => Duration::weeks(2),
            Period::Monthly => Duration::days(30),
        }
    }
}
