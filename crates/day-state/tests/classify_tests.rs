//! Tests for out-of-range classification: bounds, disabled dates, and
//! min/max range-duration constraints.

use day_state::{
    classify, AnchoredDuration, CalendarDate, DateBounds, DisabledDates, DurationConstraint,
    DurationConstraints, OutOfRangeReason, Selection,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn check_bounds(day: &str, bounds: &DateBounds) -> Vec<OutOfRangeReason> {
    classify(
        date(day),
        bounds,
        &DisabledDates::default(),
        &Selection::default(),
        &DurationConstraints::default(),
    )
    .reasons()
}

fn check_durations(day: &str, selection: &Selection, durations: &DurationConstraints) -> Vec<OutOfRangeReason> {
    classify(
        date(day),
        &DateBounds::default(),
        &DisabledDates::default(),
        selection,
        durations,
    )
    .reasons()
}

fn min_uniform(days: u32) -> DurationConstraints {
    DurationConstraints {
        min: Some(DurationConstraint::Uniform(days)),
        max: None,
    }
}

fn max_uniform(days: u32) -> DurationConstraints {
    DurationConstraints {
        min: None,
        max: Some(DurationConstraint::Uniform(days)),
    }
}

// ── Bounds ──────────────────────────────────────────────────────────────────

#[test]
fn no_bounds_means_unrestricted() {
    assert!(check_bounds("1900-01-01", &DateBounds::default()).is_empty());
    assert!(check_bounds("2999-12-31", &DateBounds::default()).is_empty());
}

#[test]
fn bounds_are_inclusive() {
    let bounds = DateBounds {
        min: Some(date("2024-03-05")),
        max: Some(date("2024-03-20")),
    };
    assert!(check_bounds("2024-03-05", &bounds).is_empty());
    assert!(check_bounds("2024-03-20", &bounds).is_empty());
    assert_eq!(check_bounds("2024-03-04", &bounds), vec![OutOfRangeReason::BeforeMin]);
    assert_eq!(check_bounds("2024-03-21", &bounds), vec![OutOfRangeReason::AfterMax]);
}

#[test]
fn inverted_bounds_report_both_flags() {
    let bounds = DateBounds {
        min: Some(date("2024-03-20")),
        max: Some(date("2024-03-05")),
    };
    assert_eq!(
        check_bounds("2024-03-10", &bounds),
        vec![OutOfRangeReason::AfterMax, OutOfRangeReason::BeforeMin]
    );
}

// ── Disabled ────────────────────────────────────────────────────────────────

#[test]
fn disabled_date_is_out_of_range() {
    let disabled: DisabledDates = [date("2024-03-08")].into_iter().collect();
    let check = classify(
        date("2024-03-08"),
        &DateBounds::default(),
        &disabled,
        &Selection::default(),
        &DurationConstraints::default(),
    );
    assert!(check.disabled);
    assert!(check.out_of_range());

    let other = classify(
        date("2024-03-09"),
        &DateBounds::default(),
        &disabled,
        &Selection::default(),
        &DurationConstraints::default(),
    );
    assert!(!other.out_of_range());
}

#[test]
fn disabled_dates_deserialize_from_iso_strings() {
    let disabled: DisabledDates = serde_json::from_str(r#"["2024-03-08","2024-03-01"]"#).unwrap();
    assert_eq!(disabled.len(), 2);
    assert!(disabled.contains(date("2024-03-01")));
}

#[test]
fn disabled_dates_deserialize_from_identities() {
    let march_first = date("2024-03-01");
    let json = format!("[{}, \"2024-03-08\"]", march_first.identity());
    let disabled: DisabledDates = serde_json::from_str(&json).unwrap();
    assert_eq!(disabled.len(), 2);
    assert!(disabled.contains(march_first));
    assert!(disabled.contains(date("2024-03-08")));
}

// ── Min duration ────────────────────────────────────────────────────────────

#[test]
fn min_duration_gates_days_before_offset() {
    let selection = Selection::pending(date("2024-03-01"));
    let durations = min_uniform(3);

    assert_eq!(
        check_durations("2024-03-02", &selection, &durations),
        vec![OutOfRangeReason::BeforeMinDuration]
    );
    assert_eq!(
        check_durations("2024-03-03", &selection, &durations),
        vec![OutOfRangeReason::BeforeMinDuration]
    );
    assert!(check_durations("2024-03-04", &selection, &durations).is_empty());
}

#[test]
fn min_duration_ignores_start_and_earlier_days() {
    let selection = Selection::pending(date("2024-03-10"));
    let durations = min_uniform(5);
    assert!(check_durations("2024-03-10", &selection, &durations).is_empty());
    assert!(check_durations("2024-03-01", &selection, &durations).is_empty());
}

#[test]
fn duration_constraints_need_range_mode_and_a_start() {
    let durations = min_uniform(3);
    let single = Selection::single(date("2024-03-01"));
    assert!(check_durations("2024-03-02", &single, &durations).is_empty());

    let nothing = Selection {
        allow_range: true,
        ..Selection::default()
    };
    assert!(check_durations("2024-03-02", &nothing, &durations).is_empty());
}

#[test]
fn zero_uniform_duration_is_not_a_constraint() {
    let selection = Selection::pending(date("2024-03-01"));
    assert!(check_durations("2024-03-02", &selection, &max_uniform(0)).is_empty());
    assert!(check_durations("2024-03-02", &selection, &min_uniform(0)).is_empty());
}

// ── Max duration ────────────────────────────────────────────────────────────

#[test]
fn max_duration_gates_days_past_offset() {
    let selection = Selection::pending(date("2024-03-01"));
    let durations = max_uniform(3);

    assert!(check_durations("2024-03-04", &selection, &durations).is_empty());
    assert_eq!(
        check_durations("2024-03-05", &selection, &durations),
        vec![OutOfRangeReason::AfterMaxDuration]
    );
    assert_eq!(
        check_durations("2024-04-30", &selection, &durations),
        vec![OutOfRangeReason::AfterMaxDuration]
    );
}

#[test]
fn min_and_max_are_independent() {
    let selection = Selection::pending(date("2024-03-01"));
    let durations = DurationConstraints {
        min: Some(DurationConstraint::Uniform(2)),
        max: Some(DurationConstraint::Uniform(4)),
    };
    assert_eq!(
        check_durations("2024-03-02", &selection, &durations),
        vec![OutOfRangeReason::BeforeMinDuration]
    );
    assert!(check_durations("2024-03-03", &selection, &durations).is_empty());
    assert!(check_durations("2024-03-05", &selection, &durations).is_empty());
    assert_eq!(
        check_durations("2024-03-06", &selection, &durations),
        vec![OutOfRangeReason::AfterMaxDuration]
    );
}

// ── Per-anchor durations ────────────────────────────────────────────────────

#[test]
fn per_anchor_duration_applies_only_to_matching_start() {
    let durations = DurationConstraints {
        min: Some(DurationConstraint::PerAnchor(vec![
            AnchoredDuration {
                anchor: date("2024-03-01"),
                days: 5,
            },
            AnchoredDuration {
                anchor: date("2024-03-10"),
                days: 2,
            },
        ])),
        max: None,
    };

    let from_first = Selection::pending(date("2024-03-01"));
    assert_eq!(
        check_durations("2024-03-05", &from_first, &durations),
        vec![OutOfRangeReason::BeforeMinDuration]
    );
    assert!(check_durations("2024-03-06", &from_first, &durations).is_empty());

    let from_tenth = Selection::pending(date("2024-03-10"));
    assert!(check_durations("2024-03-12", &from_tenth, &durations).is_empty());

    let unlisted = Selection::pending(date("2024-03-15"));
    assert!(check_durations("2024-03-16", &unlisted, &durations).is_empty());
}

#[test]
fn per_anchor_first_matching_entry_wins() {
    let constraint = DurationConstraint::PerAnchor(vec![
        AnchoredDuration {
            anchor: date("2024-03-01"),
            days: 7,
        },
        AnchoredDuration {
            anchor: date("2024-03-01"),
            days: 1,
        },
    ]);
    assert_eq!(constraint.days_for(date("2024-03-01")), Some(7));
}

#[test]
fn per_anchor_max_duration_gates_only_matching_start() {
    let durations = DurationConstraints {
        min: None,
        max: Some(DurationConstraint::PerAnchor(vec![
            AnchoredDuration {
                anchor: date("2024-03-01"),
                days: 3,
            },
            AnchoredDuration {
                anchor: date("2024-03-10"),
                days: 1,
            },
        ])),
    };

    let from_first = Selection::pending(date("2024-03-01"));
    assert!(check_durations("2024-03-04", &from_first, &durations).is_empty());
    assert_eq!(
        check_durations("2024-03-05", &from_first, &durations),
        vec![OutOfRangeReason::AfterMaxDuration]
    );

    let from_tenth = Selection::pending(date("2024-03-10"));
    assert!(check_durations("2024-03-11", &from_tenth, &durations).is_empty());
    assert_eq!(
        check_durations("2024-03-12", &from_tenth, &durations),
        vec![OutOfRangeReason::AfterMaxDuration]
    );

    let unlisted = Selection::pending(date("2024-03-15"));
    assert!(check_durations("2024-03-30", &unlisted, &durations).is_empty());
}

#[test]
fn duration_constraints_accept_both_wire_shapes() {
    let uniform: DurationConstraints = serde_json::from_str(r#"{"min": 3}"#).unwrap();
    assert_eq!(uniform.min, Some(DurationConstraint::Uniform(3)));
    assert_eq!(uniform.max, None);

    let anchored: DurationConstraints = serde_json::from_str(
        r#"{"max": [{"anchor": "2024-03-01", "days": 4}, {"anchor": 1709942400000, "days": 2}]}"#,
    )
    .unwrap();
    let Some(DurationConstraint::PerAnchor(entries)) = anchored.max else {
        panic!("expected per-anchor constraint");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].anchor, date("2024-03-01"));
    assert_eq!(entries[1].anchor, date("2024-03-09"));
    assert_eq!(entries[1].days, 2);
}

#[test]
fn anchored_entries_use_snake_case_keys_only() {
    let camel = serde_json::from_str::<DurationConstraints>(
        r#"{"min": [{"date": "2024-03-01", "minDuration": 3}]}"#,
    );
    assert!(camel.is_err());
}

#[test]
fn reasons_are_reported_together() {
    let bounds = DateBounds {
        min: None,
        max: Some(date("2024-03-03")),
    };
    let disabled: DisabledDates = [date("2024-03-06")].into_iter().collect();
    let check = classify(
        date("2024-03-06"),
        &bounds,
        &disabled,
        &Selection::pending(date("2024-03-01")),
        &max_uniform(2),
    );
    assert_eq!(
        check.reasons(),
        vec![
            OutOfRangeReason::AfterMax,
            OutOfRangeReason::Disabled,
            OutOfRangeReason::AfterMaxDuration,
        ]
    );
}
