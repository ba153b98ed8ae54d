//! TTL Module
//!
//! Resolves a time-to-live, given either as whole seconds or as a calendar
//! interval, into an absolute expiration instant on the virtual clock.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months};
use serde_json::Value;

use crate::error::{CacheError, Result};

// == Interval ==
/// A calendar-aware interval, the counterpart of an ISO-8601 duration.
///
/// Months are applied first against the calendar, then the fixed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Calendar months (years are folded in as 12 months each)
    pub months: i32,
    /// Fixed-length part: weeks, days, hours, minutes and seconds
    pub span: Duration,
}

impl Interval {
    /// Creates an interval of whole months plus a fixed span.
    pub fn new(months: i32, span: Duration) -> Self {
        Self { months, span }
    }

    /// Creates an interval with no calendar component.
    pub fn from_span(span: Duration) -> Self {
        Self { months: 0, span }
    }

    // == Add To ==
    /// Applies the interval to the instant `now` seconds after the epoch.
    ///
    /// Months are counted from the first of the current month and the day of
    /// month is added back afterwards, so 01-31 plus one month lands on 03-03
    /// rather than clamping to the end of February.
    ///
    /// # Arguments
    /// * `now` - Virtual instant in seconds
    ///
    /// # Returns
    /// The shifted instant, truncated to whole seconds, or `InvalidTtl` when
    /// it falls outside the representable calendar.
    pub fn add_to(&self, now: i64) -> Result<i64> {
        let out_of_range = || CacheError::InvalidTtl(format!("{:?} overflows from {}", self, now));

        let start = DateTime::from_timestamp(now, 0).ok_or_else(out_of_range)?;
        let day_offset = Duration::days(i64::from(start.day0()));
        let first_of_month = start.checked_sub_signed(day_offset).ok_or_else(out_of_range)?;
        let months = Months::new(self.months.unsigned_abs());
        let shifted = if self.months >= 0 {
            first_of_month.checked_add_months(months)
        } else {
            first_of_month.checked_sub_months(months)
        };

        shifted
            .and_then(|instant| instant.checked_add_signed(day_offset))
            .and_then(|instant| instant.checked_add_signed(self.span))
            .map(|instant| instant.timestamp())
            .ok_or_else(out_of_range)
    }
}

/// Designators allowed before `T`, as (unit, months per unit, seconds per unit).
const DATE_UNITS: [(char, i64, i64); 4] = [('Y', 12, 0), ('M', 1, 0), ('W', 0, 604_800), ('D', 0, 86_400)];

/// Designators allowed after `T`.
const TIME_UNITS: [(char, i64, i64); 3] = [('H', 0, 3_600), ('M', 0, 60), ('S', 0, 1)];

impl FromStr for Interval {
    type Err = CacheError;

    /// Parses ISO-8601 durations such as `PT10S`, `P1D` or `-P1Y2M3W4DT5H6M7S`.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = || CacheError::InvalidTtl(format!("malformed interval {:?}", input));

        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let body = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (date_part, time_part) = match body.split_once('T') {
            Some((_, "")) => return Err(invalid()),
            Some((date, time)) => (date, time),
            None if body.is_empty() => return Err(invalid()),
            None => (body, ""),
        };

        let (months, date_seconds) = sum_components(date_part, &DATE_UNITS).ok_or_else(invalid)?;
        let (_, time_seconds) = sum_components(time_part, &TIME_UNITS).ok_or_else(invalid)?;
        let months = i32::try_from(months).map_err(|_| invalid())?;
        let span = date_seconds
            .checked_add(time_seconds)
            .and_then(Duration::try_seconds)
            .ok_or_else(invalid)?;

        Ok(if negative {
            Self::new(-months, -span)
        } else {
            Self::new(months, span)
        })
    }
}

/// Totals `12D3H` style text into `(months, seconds)`.
///
/// Units must appear at most once and in table order.
fn sum_components(part: &str, units: &[(char, i64, i64)]) -> Option<(i64, i64)> {
    let (mut months, mut seconds) = (0i64, 0i64);
    let mut next = 0;
    let mut rest = part;

    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit())?;
        let n: i64 = rest[..digits].parse().ok()?;
        let designator = rest[digits..].chars().next()?;
        let offset = units[next..].iter().position(|(unit, _, _)| *unit == designator)?;
        let (_, per_month, per_second) = units[next + offset];

        months = months.checked_add(n.checked_mul(per_month)?)?;
        seconds = seconds.checked_add(n.checked_mul(per_second)?)?;
        next += offset + 1;
        rest = &rest[digits + designator.len_utf8()..];
    }

    Some((months, seconds))
}

// == Ttl ==
/// Time-to-live for a stored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Relative seconds; zero or negative means already expired
    Seconds(i64),
    /// Calendar interval applied to the current virtual instant
    Interval(Interval),
}

impl Ttl {
    // == Expires At ==
    /// Computes the absolute expiration instant relative to `now`.
    pub fn expires_at(&self, now: i64) -> Result<i64> {
        match self {
            Ttl::Seconds(seconds) => Ok(now.saturating_add(*seconds)),
            Ttl::Interval(interval) => interval.add_to(now),
        }
    }

    // == From JSON ==
    /// Interprets a loosely-typed TTL.
    ///
    /// `null` selects the default TTL, integers are seconds and strings are
    /// ISO-8601 intervals. Anything else is rejected.
    pub fn from_json(value: &Value) -> Result<Option<Ttl>> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(|seconds| Some(Ttl::Seconds(seconds)))
                .ok_or_else(|| CacheError::InvalidTtl(n.to_string())),
            Value::String(s) => s.parse::<Interval>().map(|i| Some(Ttl::Interval(i))),
            other => Err(CacheError::InvalidTtl(other.to_string())),
        }
    }
}

impl From<i64> for Ttl {
    fn from(seconds: i64) -> Self {
        Ttl::Seconds(seconds)
    }
}

impl From<Duration> for Ttl {
    fn from(span: Duration) -> Self {
        Ttl::Interval(Interval::from_span(span))
    }
}

impl From<Interval> for Ttl {
    fn from(interval: Interval) -> Self {
        Ttl::Interval(interval)
    }
}
