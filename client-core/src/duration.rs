//! Restricted ISO 8601 duration parsing.
//!
//! The Broker accepts validity offsets in a subset of the ISO 8601
//! duration grammar. Three forms are recognized, tried in order with the
//! first match winning:
//!
//! 1. `PnYnMnDTnHnMnS` - every component optional, the `T` separator
//!    mandatory iff at least one time component is present, `P` always
//!    mandatory, components non-negative integers, none repeated
//! 2. `PnW` - a whole number of weeks
//! 3. `PYYYYMMDDThhmmss` (basic) or `PYYYY-MM-DDThh:mm:ss` (extended) -
//!    a timestamp-shaped stamp with every field mandatory
//!
//! Whitespace is ignored and matching is case-insensitive. A string
//! matching none of the forms parses as the empty offset: "no offset" is
//! a documented default here, not a failure. The degenerate input `"P"`
//! matches form 1 with every component absent and likewise yields the
//! empty offset.

use models::TimeOffset;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P(?:(?:(?P<years>\d+)Y)?(?:(?P<months>\d+)M)?(?:(?P<days>\d+)D)?)?(?:T(?:(?P<hours>\d+)H)?(?:(?P<minutes>\d+)M)?(?:(?P<seconds>\d+)S)?)?$",
    )
    .expect("period regex is valid")
});

static WEEKS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^P(?P<weeks>\d+)W$").expect("weeks regex is valid"));

static STAMP_BASIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P(?P<years>\d{4})(?P<months>\d{2})(?P<days>\d{2})T(?P<hours>\d{2})(?P<minutes>\d{2})(?P<seconds>\d{2})$",
    )
    .expect("basic stamp regex is valid")
});

static STAMP_EXTENDED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P(?P<years>\d{4})-(?P<months>\d{2})-(?P<days>\d{2})T(?P<hours>\d{2}):(?P<minutes>\d{2}):(?P<seconds>\d{2})$",
    )
    .expect("extended stamp regex is valid")
});

/// Parse a duration/period stamp into its time components.
///
/// Returns a [`TimeOffset`] carrying exactly the units the input
/// mentioned; anything unparseable yields the empty offset.
///
/// ```
/// use client_core::duration::parse_duration;
///
/// let offset = parse_duration("P1Y2M3D");
/// assert_eq!(offset.years, Some(1));
/// assert_eq!(offset.hours, None);
///
/// assert_eq!(parse_duration("P12W").weeks, Some(12));
/// assert!(parse_duration("garbage").is_empty());
/// ```
pub fn parse_duration(text: &str) -> TimeOffset {
    let cleaned: String = text.split_whitespace().collect::<String>().to_uppercase();

    if let Some(caps) = PERIOD_RE.captures(&cleaned) {
        return TimeOffset {
            years: group(&caps, "years"),
            months: group(&caps, "months"),
            days: group(&caps, "days"),
            hours: group(&caps, "hours"),
            minutes: group(&caps, "minutes"),
            seconds: group(&caps, "seconds"),
            ..TimeOffset::default()
        };
    }

    if let Some(caps) = WEEKS_RE.captures(&cleaned) {
        return TimeOffset {
            weeks: group(&caps, "weeks"),
            ..TimeOffset::default()
        };
    }

    for stamp_re in [&STAMP_BASIC_RE, &STAMP_EXTENDED_RE] {
        if let Some(caps) = stamp_re.captures(&cleaned) {
            return TimeOffset {
                years: group(&caps, "years"),
                months: group(&caps, "months"),
                days: group(&caps, "days"),
                hours: group(&caps, "hours"),
                minutes: group(&caps, "minutes"),
                seconds: group(&caps, "seconds"),
                ..TimeOffset::default()
            };
        }
    }

    TimeOffset::default()
}

fn group(caps: &Captures<'_>, name: &str) -> Option<u64> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}
