//! Day-resolution calendar dates.
//!
//! A [`CalendarDate`] wraps `chrono::NaiveDate`, so it can only ever hold a
//! real calendar day and never carries a time of day. All comparisons in the
//! resolver happen at this granularity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{DayStateError, Result};

/// Numbering convention for the month component of a date triple.
///
/// Grid components written against JavaScript date APIs pass zero-based
/// months (January = 0); everything else in this crate is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBase {
    ZeroBased,
    #[default]
    OneBased,
}

impl MonthBase {
    /// Convert a month in this convention to a one-based month number.
    pub fn to_one_based(self, month: u32) -> Option<u32> {
        match self {
            MonthBase::ZeroBased => month.checked_add(1),
            MonthBase::OneBased => Some(month),
        }
    }
}

/// A calendar day, compared only at day resolution.
///
/// Serializes as an ISO `YYYY-MM-DD` string. Deserializes from that string
/// or from a canonical identity (epoch milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a one-based year/month/day triple.
    ///
    /// # Errors
    /// Returns `DayStateError::InvalidDate` if the triple is not a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DayStateError::InvalidDate { year, month, day })
    }

    /// Build a date from a triple whose month follows `base`.
    ///
    /// # Errors
    /// Returns `DayStateError::InvalidDate` if the triple is not a real day.
    /// The reported month is the caller's original value.
    pub fn from_parts(year: i32, month: u32, day: u32, base: MonthBase) -> Result<Self> {
        base.to_one_based(month)
            .and_then(|m| NaiveDate::from_ymd_opt(year, m, day))
            .map(Self)
            .ok_or(DayStateError::InvalidDate { year, month, day })
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// One-based month number.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Canonical identity: milliseconds since the Unix epoch at UTC midnight.
    pub fn identity(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// The UTC day containing the epoch-millisecond timestamp `millis`.
    ///
    /// Any instant inside a day maps to that day, so `from_identity` undoes
    /// [`identity`](Self::identity). `None` outside chrono's range.
    pub fn from_identity(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| Self(dt.date_naive()))
    }

    /// The date `days` days later, or `None` past the end of the calendar.
    pub fn add_days(self, days: u32) -> Option<Self> {
        self.0.checked_add_days(Days::new(u64::from(days))).map(Self)
    }

    /// True when `self` lies strictly between `a` and `b` (both exclusive).
    pub fn is_strictly_between(self, a: Self, b: Self) -> bool {
        a < self && self < b
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

struct CalendarDateVisitor;

impl Visitor<'_> for CalendarDateVisitor {
    type Value = CalendarDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YYYY-MM-DD date string or epoch milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CalendarDate, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<CalendarDate, E> {
        CalendarDate::from_identity(v)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<CalendarDate, E> {
        let millis = i64::try_from(v)
            .map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
        self.visit_i64(millis)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CalendarDateVisitor)
    }
}

/// Number of days in a one-based month.
///
/// # Errors
/// Returns `DayStateError::InvalidMonth` if `month` is outside 1..=12 or the
/// year is outside chrono's supported range.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let invalid = || DayStateError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    u32::try_from((next - first).num_days()).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_based_month_shifts_by_one() {
        let a = CalendarDate::from_parts(2024, 2, 10, MonthBase::ZeroBased).unwrap();
        let b = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_triple_is_rejected() {
        let err = CalendarDate::from_ymd(2023, 2, 29).unwrap_err();
        assert!(matches!(
            err,
            DayStateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        ));
        assert!(CalendarDate::from_parts(2024, 12, 1, MonthBase::ZeroBased).is_err());
    }

    #[test]
    fn identity_is_utc_midnight_millis() {
        let epoch = CalendarDate::from_ymd(1970, 1, 2).unwrap();
        assert_eq!(epoch.identity(), 86_400_000);
    }

    #[test]
    fn identity_round_trips_and_ignores_time_of_day() {
        let day = CalendarDate::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(CalendarDate::from_identity(day.identity()), Some(day));
        let afternoon = day.identity() + 15 * 3_600_000;
        assert_eq!(CalendarDate::from_identity(afternoon), Some(day));
        assert_eq!(CalendarDate::from_identity(i64::MAX), None);
    }

    #[test]
    fn deserializes_from_string_or_millis() {
        let day = CalendarDate::from_ymd(2024, 3, 1).unwrap();
        let from_str: CalendarDate = serde_json::from_str(r#""2024-03-01""#).unwrap();
        let from_millis: CalendarDate = serde_json::from_str("1709251200000").unwrap();
        assert_eq!(from_str, day);
        assert_eq!(from_millis, day);
        assert!(serde_json::from_str::<CalendarDate>(r#""03/01/2024""#).is_err());
        assert!(serde_json::from_str::<CalendarDate>("true").is_err());
        assert_eq!(serde_json::to_string(&day).unwrap(), r#""2024-03-01""#);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn display_and_parse_agree() {
        let d: CalendarDate = "2024-03-05".parse().unwrap();
        assert_eq!(d.to_string(), "2024-03-05");
    }
}
