//! Minimum/maximum range-duration constraints.
//!
//! A constraint is either one day count applied to every range start, or a
//! list of day counts keyed by specific start dates. On the wire the two
//! shapes are a bare number and a list of objects respectively.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// A day count that only applies when the selected start is `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchoredDuration {
    pub anchor: CalendarDate,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationConstraint {
    /// Same day count for every start date. Zero means "not configured".
    Uniform(u32),
    /// Day counts keyed by start date; first exact match wins.
    PerAnchor(Vec<AnchoredDuration>),
}

impl DurationConstraint {
    /// Resolve the day count that applies to a range starting at `start`.
    ///
    /// Returns `None` when no constraint applies: a zero uniform count, or a
    /// per-anchor list with no entry for `start`.
    pub fn days_for(&self, start: CalendarDate) -> Option<u32> {
        match self {
            DurationConstraint::Uniform(0) => None,
            DurationConstraint::Uniform(days) => Some(*days),
            DurationConstraint::PerAnchor(entries) => entries
                .iter()
                .find(|entry| entry.anchor == start)
                .map(|entry| entry.days),
        }
    }
}

/// Independent, optional min and max duration constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationConstraints {
    #[serde(default)]
    pub min: Option<DurationConstraint>,
    #[serde(default)]
    pub max: Option<DurationConstraint>,
}
