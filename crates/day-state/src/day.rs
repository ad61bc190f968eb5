//! Day resolution: the full pipeline for one cell, and style composition.
//!
//! Stages run in order and each consumes the previous one's result:
//! classify, then (in range only) custom style match, selection variant,
//! marked overlay, and finally composition into three style stacks:
//!
//! - `wrapper`: the outer box
//! - `surface`: the pressable box inside it (empty when out of range)
//! - `label`: the day number text

use serde::Serialize;
use tracing::{instrument, warn};

use crate::classify::{classify, OutOfRangeReason};
use crate::context::{DayContext, DayRequest};
use crate::custom_style::match_custom_style;
use crate::date::{days_in_month, CalendarDate};
use crate::error::Result;
use crate::marked::{apply_marked_overlay, MarkKind};
use crate::selection::{resolve_selection, selection_style, DayVariant};
use crate::style::{StyleFragment, StyleStack};

/// The render description of one day cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDay {
    /// `None` only when an invalid date triple was degraded.
    pub date: Option<CalendarDate>,
    /// Day-of-month ordinal, also the value passed to the press callback.
    pub day: u32,
    pub variant: DayVariant,
    pub reasons: Vec<OutOfRangeReason>,
    pub mark: Option<MarkKind>,
    pub wrapper: StyleStack,
    pub surface: StyleStack,
    pub label: StyleStack,
    pub text: String,
    pub pressable: bool,
}

/// Each stack of a [`ResolvedDay`] merged into a single fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlattenedStyles {
    pub wrapper: StyleFragment,
    pub surface: StyleFragment,
    pub label: StyleFragment,
}

impl ResolvedDay {
    pub fn is_out_of_range(&self) -> bool {
        self.variant == DayVariant::OutOfRange
    }

    /// Forward a tap to `on_press` with the day ordinal.
    ///
    /// Fires at most once and only for pressable days; returns whether it
    /// fired. Selection state is the caller's to update.
    pub fn press<F: FnOnce(u32)>(&self, on_press: F) -> bool {
        if self.pressable {
            on_press(self.day);
        }
        self.pressable
    }

    pub fn flatten_styles(&self) -> FlattenedStyles {
        FlattenedStyles {
            wrapper: self.wrapper.flatten(),
            surface: self.surface.flatten(),
            label: self.label.flatten(),
        }
    }
}

/// Resolve the state and style layers of `date`.
#[instrument(level = "trace", skip_all, fields(%date))]
pub fn resolve_day(date: CalendarDate, context: &DayContext) -> ResolvedDay {
    let selection = context.selection.normalized();
    let check = classify(
        date,
        &context.bounds,
        &context.disabled_dates,
        &selection,
        &context.duration_constraints,
    );
    if check.out_of_range() {
        return out_of_range(Some(date), date.day(), check.reasons(), context);
    }

    let custom = match_custom_style(date, &context.custom_date_styles);
    let variant = resolve_selection(date, &selection);
    let selected = selection_style(variant, &context.styles, &context.style_overrides);
    let overlay = apply_marked_overlay(
        date,
        &context.marked_dates,
        &context.date_format,
        &context.theme,
    );

    let mut wrapper = StyleStack::new();
    wrapper.push(&context.styles.day_wrapper);
    wrapper.push_opt(custom.container_style);

    let mut surface = StyleStack::new();
    surface.push_opt(custom.date_style);
    surface.extend(&selected.container);
    surface.push_opt(selected.selected_day_prop.as_ref());
    surface.push_opt(overlay.container.as_ref());

    let mut label = StyleStack::new();
    label.push(&context.styles.day_label);
    label.push_opt(selected.label.as_ref());
    label.push_opt(custom.text_style);
    label.push(&context.theme.inline_text(false));
    label.push_opt(overlay.text.as_ref());

    ResolvedDay {
        date: Some(date),
        day: date.day(),
        variant,
        reasons: Vec::new(),
        mark: overlay.kind,
        wrapper,
        surface,
        label,
        text: date.day().to_string(),
        pressable: true,
    }
}

/// Resolve a request, degrading an invalid date triple to an out-of-range
/// cell so a grid can still draw it.
#[instrument(level = "trace", skip_all, fields(year = request.year, month = request.month, day = request.day))]
pub fn resolve_request(request: &DayRequest) -> ResolvedDay {
    match request.date() {
        Ok(date) => resolve_day(date, &request.context),
        Err(err) => {
            warn!(error = %err, "unresolvable day rendered as out of range");
            out_of_range(
                None,
                request.day,
                vec![OutOfRangeReason::InvalidDate],
                &request.context,
            )
        }
    }
}

/// Resolve every day of a one-based month, in order.
///
/// # Errors
/// Returns `DayStateError::InvalidMonth` if the month does not exist.
pub fn resolve_month(year: i32, month: u32, context: &DayContext) -> Result<Vec<ResolvedDay>> {
    let len = days_in_month(year, month)?;
    (1..=len)
        .map(|day| CalendarDate::from_ymd(year, month, day).map(|date| resolve_day(date, context)))
        .collect()
}

fn out_of_range(
    date: Option<CalendarDate>,
    day: u32,
    reasons: Vec<OutOfRangeReason>,
    context: &DayContext,
) -> ResolvedDay {
    let mut wrapper = StyleStack::new();
    wrapper.push(&context.styles.day_wrapper);

    let mut label = StyleStack::new();
    label.push(&context.styles.disabled_text);
    label.push(&context.theme.inline_text(true));

    ResolvedDay {
        date,
        day,
        variant: DayVariant::OutOfRange,
        reasons,
        mark: None,
        wrapper,
        surface: StyleStack::new(),
        label,
        text: day.to_string(),
        pressable: false,
    }
}
