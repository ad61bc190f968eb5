//! The input bundle for day resolution and its JSON request form.
//!
//! Every field of [`DayContext`] has a default, so `{}` is a valid context:
//! no bounds, nothing disabled, nothing selected, no styles.

use serde::{Deserialize, Serialize};

use crate::classify::{DateBounds, DisabledDates};
use crate::constraint::DurationConstraints;
use crate::custom_style::CustomDateStyle;
use crate::date::{CalendarDate, MonthBase};
use crate::error::Result;
use crate::format::DateFormat;
use crate::marked::MarkedDates;
use crate::selection::Selection;
use crate::theme::{StyleOverrides, StyleSheet, Theme};

/// Everything about the picker that a single day cell depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayContext {
    pub bounds: DateBounds,
    pub disabled_dates: DisabledDates,
    pub duration_constraints: DurationConstraints,
    pub selection: Selection,
    pub custom_date_styles: Vec<CustomDateStyle>,
    pub style_overrides: StyleOverrides,
    pub styles: StyleSheet,
    pub theme: Theme,
    pub date_format: DateFormat,
    pub marked_dates: MarkedDates,
}

impl DayContext {
    /// Parse a context from JSON.
    ///
    /// # Errors
    /// Returns `DayStateError::Json` on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A date triple plus its context, as sent by a grid component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub month_base: MonthBase,
    #[serde(flatten)]
    pub context: DayContext,
}

impl DayRequest {
    /// Parse a request from JSON.
    ///
    /// # Errors
    /// Returns `DayStateError::Json` on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The requested date.
    ///
    /// # Errors
    /// Returns `DayStateError::InvalidDate` if the triple is not a real day.
    pub fn date(&self) -> Result<CalendarDate> {
        CalendarDate::from_parts(self.year, self.month, self.day, self.month_base)
    }

    /// Strict boundary validation: the date must exist and the selection
    /// must be consistent. Resolution itself degrades instead of failing.
    ///
    /// # Errors
    /// `InvalidDate`, `EndWithoutRange` or `EndBeforeStart`.
    pub fn validate(&self) -> Result<CalendarDate> {
        let date = self.date()?;
        self.context.selection.validate()?;
        Ok(date)
    }
}
