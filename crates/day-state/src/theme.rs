//! Caller-supplied look: base style sheet, style prop overrides, theme tokens.
//!
//! All of these are data. The resolver picks which slots to layer; it never
//! reads the properties inside them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::StyleFragment;

/// Base style slots for a day cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub day_wrapper: StyleFragment,
    pub day_button: StyleFragment,
    pub day_label: StyleFragment,
    pub selected_day: StyleFragment,
    pub selected_day_label: StyleFragment,
    pub selected_day_background: StyleFragment,
    pub start_day_wrapper: StyleFragment,
    pub end_day_wrapper: StyleFragment,
    pub in_range_day: StyleFragment,
    pub disabled_text: StyleFragment,
}

/// Per-picker overrides for the selected-day and range styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub selected_day_style: Option<StyleFragment>,
    pub selected_range_style: Option<StyleFragment>,
    pub selected_range_start_style: Option<StyleFragment>,
    pub selected_range_end_style: Option<StyleFragment>,
}

/// Container and text tokens for one kind of marked day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayTokens {
    pub container: StyleFragment,
    pub text: StyleFragment,
}

/// Theme tokens. Text attribute values are passed through as given, so a
/// font weight may be `"600"` or `600`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub selected_day: DayTokens,
    pub active_day: DayTokens,
    pub text_day_color: Option<Value>,
    pub text_day_font_family: Option<Value>,
    pub text_day_font_weight: Option<Value>,
    pub text_day_font_size: Option<Value>,
    pub text_disabled_color: Option<Value>,
}

impl Theme {
    /// Inline text attributes layered onto every day label.
    ///
    /// Disabled labels take `text_disabled_color` instead of `text_day_color`;
    /// font attributes are shared. Unset tokens are left out.
    pub fn inline_text(&self, disabled: bool) -> StyleFragment {
        let color = if disabled {
            &self.text_disabled_color
        } else {
            &self.text_day_color
        };
        let mut fragment = StyleFragment::new();
        fragment.insert_opt("color", color.clone());
        fragment.insert_opt("fontFamily", self.text_day_font_family.clone());
        fragment.insert_opt("fontWeight", self.text_day_font_weight.clone());
        fragment.insert_opt("fontSize", self.text_day_font_size.clone());
        fragment
    }
}
