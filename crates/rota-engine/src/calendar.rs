//! Per-user unavailability records with overlap-based clearing.
//!
//! A [`Calendar`] is an ordered sequence of [`Unavailable`] records owned by
//! a single [`User`](crate::User). Records stay sorted by start after every
//! mutation. [`Calendar::clear`] removes every record overlapping the given
//! range in full — a partially overlapping record is removed, not clipped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// Why a user is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    /// Self-reported time off.
    Personal,
    /// Recovery window granted after serving a shift.
    Grace,
    /// Serving a shift.
    Shift,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reason::Personal => "personal",
            Reason::Grace => "grace",
            Reason::Shift => "shift",
        };
        f.write_str(s)
    }
}

/// One unavailability record: an interval and why it is blocked.
///
/// Persists as a flat `{start, finish, reason}` triple with UTC endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailable {
    #[serde(flatten)]
    pub interval: Interval,
    pub reason: Reason,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.interval)
    }
}

/// An ordered sequence of unavailability records.
///
/// Mutation is in place through `&mut self`. A calendar is owned by exactly
/// one user aggregate; concurrent writers must be serialized by the
/// surrounding persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    records: Vec<Unavailable>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keeping the sequence sorted by start.
    ///
    /// Overlapping records are not merged or deduplicated; they coexist until
    /// cleared. `interval.start <= interval.finish` is a caller precondition
    /// (upheld by [`Interval::new`]) and is not re-checked here.
    pub fn add(&mut self, interval: Interval, reason: Reason) {
        let at = self
            .records
            .partition_point(|r| r.interval.start <= interval.start);
        self.records.insert(at, Unavailable { interval, reason });
    }

    /// Remove every record whose interval overlaps `range`, in full.
    ///
    /// A record that only partially overlaps is still removed whole; records
    /// entirely outside `range`, including ones touching its endpoints, are
    /// untouched. Returns the number of records removed.
    pub fn clear(&mut self, range: &Interval) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.interval.overlaps(range));
        before - self.records.len()
    }

    /// The record at `index`, in chronological position.
    pub fn get(&self, index: usize) -> Option<&Unavailable> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Unavailable> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a Unavailable;
    type IntoIter = std::slice::Iter<'a, Unavailable>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
