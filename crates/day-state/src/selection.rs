//! Selection state: which visual variant a day takes given the current
//! single or range selection, and which style slots that variant layers.
//!
//! Range precedence is an ordered rule table. Every rule is evaluated and the
//! last one that matches decides the variant, so a start == end range resolves
//! to [`DayVariant::RangeSingleDay`] rather than a start or end cap.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::date::CalendarDate;
use crate::error::{DayStateError, Result};
use crate::style::StyleFragment;
use crate::theme::{StyleOverrides, StyleSheet};

/// The selected start/end dates and whether range selection is on.
///
/// `end` is only consulted when `allow_range` is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
    pub allow_range: bool,
}

impl Selection {
    /// Single-select mode with `start` selected.
    pub fn single(start: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end: None,
            allow_range: false,
        }
    }

    /// Range mode with both ends selected.
    pub fn range(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            allow_range: true,
        }
    }

    /// Range mode with only the start selected so far.
    pub fn pending(start: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end: None,
            allow_range: true,
        }
    }

    /// Strict consistency check for boundary validation.
    ///
    /// # Errors
    /// `EndWithoutRange` if an end is set in single mode, `EndBeforeStart`
    /// if the range is inverted.
    pub fn validate(&self) -> Result<()> {
        match (self.start, self.end) {
            (_, Some(_)) if !self.allow_range => Err(DayStateError::EndWithoutRange),
            (Some(start), Some(end)) if end < start => {
                Err(DayStateError::EndBeforeStart { start, end })
            }
            _ => Ok(()),
        }
    }

    /// Total order used by the resolver: `end` is dropped in single mode and
    /// an inverted range is swapped so that `start <= end`.
    pub fn normalized(self) -> Self {
        if !self.allow_range {
            return Self { end: None, ..self };
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => {
                debug!(%start, %end, "inverted range selection, swapping ends");
                Self {
                    start: Some(end),
                    end: Some(start),
                    allow_range: true,
                }
            }
            _ => self,
        }
    }
}

/// The mutually exclusive visual state of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVariant {
    OutOfRange,
    Plain,
    SingleSelected,
    RangeStart,
    RangeEnd,
    RangeSingleDay,
    RangeMiddle,
    RangePendingStart,
}

impl DayVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            DayVariant::OutOfRange => "out_of_range",
            DayVariant::Plain => "plain",
            DayVariant::SingleSelected => "single_selected",
            DayVariant::RangeStart => "range_start",
            DayVariant::RangeEnd => "range_end",
            DayVariant::RangeSingleDay => "range_single_day",
            DayVariant::RangeMiddle => "range_middle",
            DayVariant::RangePendingStart => "range_pending_start",
        }
    }

    /// True for every variant that draws the selected-day label.
    pub fn is_selected(self) -> bool {
        !matches!(self, DayVariant::OutOfRange | DayVariant::Plain)
    }
}

/// Boolean facts about one day relative to a selection.
#[derive(Debug, Clone, Copy)]
struct Facts {
    range_mode: bool,
    has_start: bool,
    has_end: bool,
    is_start: bool,
    is_end: bool,
    start_is_end: bool,
    between: bool,
}

impl Facts {
    fn new(day: CalendarDate, selection: &Selection) -> Self {
        let end = if selection.allow_range {
            selection.end
        } else {
            None
        };
        Self {
            range_mode: selection.allow_range,
            has_start: selection.start.is_some(),
            has_end: end.is_some(),
            is_start: selection.start == Some(day),
            is_end: end == Some(day),
            start_is_end: selection.start.is_some() && selection.start == end,
            between: match (selection.start, end) {
                (Some(start), Some(end)) => day.is_strictly_between(start, end),
                _ => false,
            },
        }
    }
}

struct Rule {
    name: &'static str,
    applies: fn(&Facts) -> bool,
    variant: DayVariant,
}

const RULES: [Rule; 6] = [
    Rule {
        name: "single",
        applies: |f| !f.range_mode && f.has_start && f.is_start,
        variant: DayVariant::SingleSelected,
    },
    Rule {
        name: "range-start",
        applies: |f| f.range_mode && f.has_start && f.has_end && f.is_start,
        variant: DayVariant::RangeStart,
    },
    Rule {
        name: "range-end",
        applies: |f| f.range_mode && f.has_start && f.has_end && f.is_end,
        variant: DayVariant::RangeEnd,
    },
    Rule {
        name: "range-single-day",
        applies: |f| {
            f.range_mode && f.has_start && f.has_end && f.is_start && f.is_end && f.start_is_end
        },
        variant: DayVariant::RangeSingleDay,
    },
    Rule {
        name: "range-middle",
        applies: |f| f.range_mode && f.has_start && f.has_end && f.between,
        variant: DayVariant::RangeMiddle,
    },
    Rule {
        name: "range-pending-start",
        applies: |f| f.range_mode && f.has_start && !f.has_end && f.is_start,
        variant: DayVariant::RangePendingStart,
    },
];

/// Resolve the selection variant of an in-range day.
///
/// Never returns [`DayVariant::OutOfRange`]; days that match no rule are
/// [`DayVariant::Plain`].
pub fn resolve_selection(day: CalendarDate, selection: &Selection) -> DayVariant {
    let facts = Facts::new(day, selection);
    let mut variant = DayVariant::Plain;
    for rule in &RULES {
        if (rule.applies)(&facts) {
            trace!(%day, rule = rule.name, "selection rule matched");
            variant = rule.variant;
        }
    }
    variant
}

/// Style slots contributed by a selection variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStyle {
    /// Layers for the pressable surface, in order.
    pub container: Vec<StyleFragment>,
    /// Label color layer, if the variant changes it.
    pub label: Option<StyleFragment>,
    /// Selected-day prop layer, layered after `container` (single select only).
    pub selected_day_prop: Option<StyleFragment>,
}

/// Pick the style slots for `variant`. Unset overrides are skipped.
pub fn selection_style(
    variant: DayVariant,
    sheet: &StyleSheet,
    overrides: &StyleOverrides,
) -> SelectionStyle {
    let range = overrides.selected_range_style.as_ref();
    let slots: Vec<Option<&StyleFragment>> = match variant {
        DayVariant::OutOfRange => return SelectionStyle::default(),
        DayVariant::Plain => vec![Some(&sheet.day_button)],
        DayVariant::SingleSelected => vec![Some(&sheet.selected_day)],
        DayVariant::RangeStart => vec![
            Some(&sheet.start_day_wrapper),
            range,
            overrides.selected_range_start_style.as_ref(),
        ],
        DayVariant::RangeEnd => vec![
            Some(&sheet.end_day_wrapper),
            range,
            overrides.selected_range_end_style.as_ref(),
        ],
        DayVariant::RangeSingleDay => vec![
            Some(&sheet.selected_day),
            Some(&sheet.selected_day_background),
            range,
        ],
        DayVariant::RangeMiddle => vec![Some(&sheet.in_range_day), range],
        DayVariant::RangePendingStart => vec![
            Some(&sheet.selected_day),
            range,
            Some(
                overrides
                    .selected_range_start_style
                    .as_ref()
                    .unwrap_or(&sheet.selected_day_background),
            ),
        ],
    };

    let selected_day_prop = (variant == DayVariant::SingleSelected).then(|| {
        overrides
            .selected_day_style
            .as_ref()
            .unwrap_or(&sheet.selected_day_background)
            .clone()
    });

    SelectionStyle {
        container: slots.into_iter().flatten().cloned().collect(),
        label: variant
            .is_selected()
            .then(|| sheet.selected_day_label.clone()),
        selected_day_prop,
    }
}
