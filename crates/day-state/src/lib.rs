//! # day-state
//!
//! Deterministic state resolution for a single calendar day cell.
//!
//! Given a date and the picker's context (selected start/end, range mode,
//! min/max bounds, disabled dates, min/max range durations, per-date custom
//! styles and marked dates), [`resolve_day`] decides which mutually exclusive
//! [`DayVariant`] the day is in and which style layers apply, in a fixed
//! order. It is a pure function: no I/O, no caching, inputs are only borrowed.
//!
//! ```rust
//! use day_state::{resolve_day, CalendarDate, DayContext, DayVariant, Selection};
//!
//! let start = CalendarDate::from_ymd(2024, 3, 1).unwrap();
//! let end = CalendarDate::from_ymd(2024, 3, 5).unwrap();
//! let context = DayContext {
//!     selection: Selection::range(start, end),
//!     ..DayContext::default()
//! };
//!
//! let day = resolve_day(CalendarDate::from_ymd(2024, 3, 3).unwrap(), &context);
//! assert_eq!(day.variant, DayVariant::RangeMiddle);
//! assert!(day.pressable);
//! ```
//!
//! ## Modules
//!
//! - [`classify`] — out-of-range classification (bounds, disabled, durations)
//! - [`custom_style`] — first-match per-date style overrides
//! - [`selection`] — single/range selection variant and its style slots
//! - [`marked`] — marked-date overlay
//! - [`day`] — the full pipeline and style composition
//! - [`style`] — style fragments and ordered layering
//! - [`format`] — moment-style date patterns for marked-date keys
//! - [`date`], [`constraint`], [`theme`], [`context`] — input types
//! - [`error`] — Error types

pub mod classify;
pub mod constraint;
pub mod context;
pub mod custom_style;
pub mod date;
pub mod day;
pub mod error;
pub mod format;
pub mod marked;
pub mod selection;
pub mod style;
pub mod theme;

pub use classify::{classify, DateBounds, DisabledDates, OutOfRangeReason, RangeCheck};
pub use constraint::{AnchoredDuration, DurationConstraint, DurationConstraints};
pub use context::{DayContext, DayRequest};
pub use custom_style::{match_custom_style, CustomDateStyle, CustomStyleMatch};
pub use date::{days_in_month, CalendarDate, MonthBase};
pub use day::{resolve_day, resolve_month, resolve_request, FlattenedStyles, ResolvedDay};
pub use error::DayStateError;
pub use format::DateFormat;
pub use marked::{apply_marked_overlay, MarkKind, MarkedDate, MarkedDates, MarkedOverlay};
pub use selection::{resolve_selection, selection_style, DayVariant, Selection, SelectionStyle};
pub use style::{StyleFragment, StyleStack};
pub use theme::{DayTokens, StyleOverrides, StyleSheet, Theme};
