//! Per-date custom style overrides.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::style::StyleFragment;

/// Custom styles for one date. Callers pass these as an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDateStyle {
    pub date: CalendarDate,
    /// Layered onto the outer wrapper.
    #[serde(default)]
    pub container_style: Option<StyleFragment>,
    /// Layered first onto the pressable surface.
    #[serde(default)]
    pub date_style: Option<StyleFragment>,
    /// Layered onto the label after the selection color.
    #[serde(default)]
    pub text_style: Option<StyleFragment>,
}

/// Styles borrowed from the matching entry, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CustomStyleMatch<'a> {
    pub container_style: Option<&'a StyleFragment>,
    pub date_style: Option<&'a StyleFragment>,
    pub text_style: Option<&'a StyleFragment>,
}

/// Return the styles of the first entry dated `day`. Later entries for the
/// same date are ignored; no entry yields an empty match.
pub fn match_custom_style(day: CalendarDate, styles: &[CustomDateStyle]) -> CustomStyleMatch<'_> {
    styles
        .iter()
        .find(|entry| entry.date == day)
        .map(|entry| CustomStyleMatch {
            container_style: entry.container_style.as_ref(),
            date_style: entry.date_style.as_ref(),
            text_style: entry.text_style.as_ref(),
        })
        .unwrap_or_default()
}
