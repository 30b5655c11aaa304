//! Timezone-bound instants with wall-clock calendar arithmetic.
//!
//! [`WallClockTime`] pairs an absolute instant with the IANA timezone it is
//! read in. Comparison and subtraction operate on the absolute instant, while
//! [`WallClockTime::add_calendar`] steps the *local* calendar fields (days,
//! weeks, months) and re-resolves the UTC offset afterwards — "9am next
//! Monday" stays 9am across a DST transition even though the elapsed duration
//! is 167 or 169 hours instead of 168.

use std::fmt;
use std::ops::Sub;

use chrono::{
    DateTime, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RotaError};

/// Calendar units accepted by [`WallClockTime::add_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Days,
    Weeks,
    Months,
}

/// An instant bound to an IANA timezone.
///
/// Two values are equal iff they denote the same absolute instant, regardless
/// of the zone either was constructed in. Formatting always renders in the
/// bound zone, minute precision (`YYYY-MM-DDTHH:MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallClockTime(DateTime<Tz>);

impl WallClockTime {
    /// Parse a date or datetime string as local time in `zone`.
    ///
    /// Accepted layouts: `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM`, and
    /// `YYYY-MM-DD` (midnight local).
    ///
    /// # Errors
    /// Returns [`RotaError::InvalidDatetime`] when the string matches none of
    /// the accepted layouts.
    pub fn parse(s: &str, zone: Tz) -> Result<Self> {
        let naive = parse_local(s)?;
        Ok(Self(resolve_local(naive, zone)))
    }

    /// Bind a UTC instant to the UTC zone.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&Tz::UTC))
    }

    /// Re-express the same absolute instant in another zone.
    ///
    /// Only local-field arithmetic and rendering change; the instant does not.
    pub fn in_zone(self, zone: Tz) -> Self {
        Self(self.0.with_timezone(&zone))
    }

    /// The zone this value is bound to.
    pub fn zone(&self) -> Tz {
        self.0.timezone()
    }

    /// The absolute instant in UTC.
    pub fn to_utc(self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// The local calendar fields in the bound zone.
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.0.naive_local()
    }

    /// Add `count` calendar units (negative counts step backwards).
    ///
    /// The local date is stepped first and the result re-resolved against the
    /// zone's transition table, so the local time-of-day is preserved across
    /// DST boundaries. Month steps clamp the day-of-month to the last valid
    /// day of the target month: Jan 31 plus one month is Feb 28, or Feb 29 in
    /// a leap year.
    pub fn add_calendar(self, unit: CalendarUnit, count: i32) -> Self {
        let zone = self.0.timezone();
        let date = self.0.date_naive();
        let shifted = match unit {
            CalendarUnit::Days => date + Duration::days(i64::from(count)),
            CalendarUnit::Weeks => date + Duration::days(7 * i64::from(count)),
            CalendarUnit::Months => {
                let months = Months::new(count.unsigned_abs());
                let stepped = if count >= 0 {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                };
                // chrono's date range outlives any schedulable instant
                stepped.unwrap_or(date)
            }
        };
        Self(resolve_local(shifted.and_time(self.0.time()), zone))
    }
}

impl Sub for WallClockTime {
    type Output = Duration;

    /// Absolute elapsed duration between two instants (not calendar
    /// difference): one week of wall-clock arithmetic across a spring-forward
    /// boundary subtracts to 167 hours.
    fn sub(self, other: WallClockTime) -> Duration {
        self.0 - other.0
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
    }
}

/// Persisted as an RFC 3339 UTC timestamp; the zone is applied at render
/// time, not stored.
impl Serialize for WallClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl<'de> Deserialize<'de> for WallClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let instant = DateTime::<Utc>::deserialize(deserializer)?;
        Ok(Self::from_utc(instant))
    }
}

/// Parse an IANA timezone identifier (e.g. "America/Los_Angeles").
///
/// # Errors
/// Returns [`RotaError::InvalidTimezone`] when the identifier is unknown.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse()
        .map_err(|_| RotaError::InvalidTimezone(s.to_string()))
}

fn parse_local(s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(RotaError::InvalidDatetime(s.to_string()))
}

/// Resolve a local datetime against a zone's transition table.
///
/// Ambiguous local times (the repeated hour when clocks fall back) take the
/// earlier offset; nonexistent local times (the skipped hour when clocks
/// spring forward) advance by one hour.
fn resolve_local(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => match zone.from_local_datetime(&(naive + Duration::hours(1))) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            // no tzdb zone skips two consecutive hours
            LocalResult::None => zone.from_utc_datetime(&naive),
        },
    }
}
