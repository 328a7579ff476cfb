//! Relative time offsets and expiry stamps.
//!
//! The Broker expresses validity windows either as absolute RFC 3339
//! timestamps or as relative offsets ("valid for 7 days"). `TimeOffset`
//! is the structured form of such an offset: a fixed set of unit slots,
//! each either present with a non-negative count or absent entirely.

use chrono::{DateTime, Days, Months, Utc};
use serde::{Deserialize, Serialize};

/// A relative time offset decomposed into calendar and clock units.
///
/// Absent units (`None`) are treated as zero when the offset is applied;
/// the distinction only matters for reporting which units a parsed
/// duration string actually mentioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffset {
    pub years: Option<u64>,
    pub months: Option<u64>,
    pub weeks: Option<u64>,
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
}

impl TimeOffset {
    /// An offset of `n` minutes.
    pub fn minutes(n: u64) -> Self {
        Self {
            minutes: Some(n),
            ..Self::default()
        }
    }

    /// An offset of `n` days.
    pub fn days(n: u64) -> Self {
        Self {
            days: Some(n),
            ..Self::default()
        }
    }

    /// An offset of `n` weeks.
    pub fn weeks(n: u64) -> Self {
        Self {
            weeks: Some(n),
            ..Self::default()
        }
    }

    /// True when no unit is present at all.
    pub fn is_empty(&self) -> bool {
        self.years.is_none()
            && self.months.is_none()
            && self.weeks.is_none()
            && self.days.is_none()
            && self.hours.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
    }

    /// Apply the offset to a base timestamp.
    ///
    /// Calendar units are added first (years fold into months, weeks into
    /// days), then the clock units. Month addition clamps the day of
    /// month to the target month's length, so Jan 31 + 1 month lands on
    /// the last day of February.
    pub fn apply_to(&self, base: DateTime<Utc>) -> DateTime<Utc> {
        let months = self.years.unwrap_or(0) * 12 + self.months.unwrap_or(0);
        let days = self.weeks.unwrap_or(0) * 7 + self.days.unwrap_or(0);
        let seconds = self.hours.unwrap_or(0) * 3600
            + self.minutes.unwrap_or(0) * 60
            + self.seconds.unwrap_or(0);

        let mut stamp = base;
        if months > 0 {
            stamp = stamp + Months::new(months.min(u64::from(u32::MAX)) as u32);
        }
        if days > 0 {
            stamp = stamp + Days::new(days);
        }
        if seconds > 0 {
            stamp += chrono::Duration::seconds(seconds as i64);
        }
        stamp
    }

    /// Shorthand for applying the offset to the current time.
    pub fn from_now(&self) -> DateTime<Utc> {
        self.apply_to(Utc::now())
    }
}

/// An expiry stamp: absolute, or relative to the moment of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Expires at the given instant.
    At(DateTime<Utc>),
    /// Expires after the given offset from now.
    In(TimeOffset),
}

impl Expiry {
    /// Resolve to an absolute timestamp against the given "now".
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Expiry::At(stamp) => *stamp,
            Expiry::In(offset) => offset.apply_to(now),
        }
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(stamp: DateTime<Utc>) -> Self {
        Expiry::At(stamp)
    }
}

impl From<TimeOffset> for Expiry {
    fn from(offset: TimeOffset) -> Self {
        Expiry::In(offset)
    }
}
