//! Error types for day-state boundary validation.
//!
//! The resolver itself never fails; these errors are produced by the
//! validation layer that turns caller input into a [`crate::DayContext`].

use thiserror::Error;

use crate::date::CalendarDate;

#[derive(Error, Debug)]
pub enum DayStateError {
    #[error("Invalid date: {year}-{month}-{day} is not a calendar day")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Selected end date is set but range selection is disabled")]
    EndWithoutRange,

    #[error("Selected end date {end} is before start date {start}")]
    EndBeforeStart {
        start: CalendarDate,
        end: CalendarDate,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DayStateError>;
