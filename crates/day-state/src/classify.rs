//! Range/validity classification.
//!
//! Decides whether a day is out of range: outside the min/max bounds,
//! explicitly disabled, or too close to / too far from the selected range
//! start for the configured duration constraints. An out-of-range day skips
//! every later stage of resolution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constraint::DurationConstraints;
use crate::date::CalendarDate;
use crate::selection::Selection;

/// Optional inclusive min/max bounds. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

/// Days excluded regardless of every other rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisabledDates(BTreeSet<CalendarDate>);

impl DisabledDates {
    pub fn contains(&self, day: CalendarDate) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.0.iter()
    }
}

impl FromIterator<CalendarDate> for DisabledDates {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Why a day is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangeReason {
    /// The date triple was not a real day (boundary degradation only).
    InvalidDate,
    AfterMax,
    BeforeMin,
    Disabled,
    BeforeMinDuration,
    AfterMaxDuration,
}

impl OutOfRangeReason {
    pub fn as_str(self) -> &'static str {
        match self {
            OutOfRangeReason::InvalidDate => "invalid_date",
            OutOfRangeReason::AfterMax => "after_max",
            OutOfRangeReason::BeforeMin => "before_min",
            OutOfRangeReason::Disabled => "disabled",
            OutOfRangeReason::BeforeMinDuration => "before_min_duration",
            OutOfRangeReason::AfterMaxDuration => "after_max_duration",
        }
    }
}

/// The five independent range flags for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCheck {
    pub after_max: bool,
    pub before_min: bool,
    pub disabled: bool,
    pub before_min_duration: bool,
    pub after_max_duration: bool,
}

impl RangeCheck {
    pub fn out_of_range(&self) -> bool {
        self.after_max
            || self.before_min
            || self.disabled
            || self.before_min_duration
            || self.after_max_duration
    }

    /// The set flags, in a fixed order.
    pub fn reasons(&self) -> Vec<OutOfRangeReason> {
        [
            (self.after_max, OutOfRangeReason::AfterMax),
            (self.before_min, OutOfRangeReason::BeforeMin),
            (self.disabled, OutOfRangeReason::Disabled),
            (self.before_min_duration, OutOfRangeReason::BeforeMinDuration),
            (self.after_max_duration, OutOfRangeReason::AfterMaxDuration),
        ]
        .into_iter()
        .filter_map(|(set, reason)| set.then_some(reason))
        .collect()
    }
}

/// Classify `day` against bounds, disabled dates and duration constraints.
///
/// Duration constraints are only checked in range mode, once a start is
/// selected, and for days strictly after that start. The applicable day
/// count comes from [`crate::DurationConstraint::days_for`]:
///
/// - min: flagged while `start + days > day`
/// - max: flagged once `start + days < day`
///
/// An offset past the end of the calendar counts as unreachable, so it gates
/// every later day on the min side and none on the max side.
pub fn classify(
    day: CalendarDate,
    bounds: &DateBounds,
    disabled: &DisabledDates,
    selection: &Selection,
    durations: &DurationConstraints,
) -> RangeCheck {
    let after_max = bounds.max.is_some_and(|max| day > max);
    let before_min = bounds.min.is_some_and(|min| day < min);
    let is_disabled = disabled.contains(day);

    let duration_start = selection
        .start
        .filter(|start| selection.allow_range && day > *start);

    let before_min_duration = duration_start
        .and_then(|start| {
            let days = durations.min.as_ref()?.days_for(start)?;
            Some(start.add_days(days).is_none_or(|limit| limit > day))
        })
        .unwrap_or(false);

    let after_max_duration = duration_start
        .and_then(|start| {
            let days = durations.max.as_ref()?.days_for(start)?;
            Some(start.add_days(days).is_some_and(|limit| limit < day))
        })
        .unwrap_or(false);

    let check = RangeCheck {
        after_max,
        before_min,
        disabled: is_disabled,
        before_min_duration,
        after_max_duration,
    };
    trace!(%day, ?check, "classified day");
    check
}
