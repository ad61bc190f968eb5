//! Marked-date overlay.
//!
//! Marked dates are keyed by the day formatted with the picker's date
//! pattern. A marked day gets the theme's "selected day" tokens when its
//! entry says `selected: true`, and the "active day" tokens otherwise. The
//! overlay is layered on top of the selection style, never instead of it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::format::DateFormat;
use crate::style::StyleFragment;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedDate {
    #[serde(default)]
    pub selected: Option<bool>,
}

/// Formatted date string to marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedDates(BTreeMap<String, MarkedDate>);

impl MarkedDates {
    pub fn get(&self, key: &str) -> Option<&MarkedDate> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, MarkedDate)> for MarkedDates {
    fn from_iter<I: IntoIterator<Item = (K, MarkedDate)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    Selected,
    Active,
}

impl MarkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkKind::Selected => "selected",
            MarkKind::Active => "active",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkedOverlay {
    pub kind: Option<MarkKind>,
    pub container: Option<StyleFragment>,
    pub text: Option<StyleFragment>,
}

pub fn apply_marked_overlay(
    day: CalendarDate,
    marked: &MarkedDates,
    format: &DateFormat,
    theme: &Theme,
) -> MarkedOverlay {
    if marked.is_empty() {
        return MarkedOverlay::default();
    }
    let Some(mark) = marked.get(&format.format(day)) else {
        return MarkedOverlay::default();
    };
    let (kind, tokens) = if mark.selected == Some(true) {
        (MarkKind::Selected, &theme.selected_day)
    } else {
        (MarkKind::Active, &theme.active_day)
    };
    MarkedOverlay {
        kind: Some(kind),
        container: Some(tokens.container.clone()),
        text: Some(tokens.text.clone()),
    }
}
