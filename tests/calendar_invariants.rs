//! Calendar Generator Invariant Tests
//!
//! Tests for the date sequence generator:
//! - Stepping is calendar-component arithmetic with month-length
//!   rounding, never fixed-duration arithmetic
//! - Every step token produces its documented granularity
//! - Malformed bound values fall back silently to the defaults
//! - The hard row cap bounds open-ended ranges in both directions

use std::sync::Arc;

use gentable::cursor::{
    CalendarCursor, CalendarTable, GeneratorCursor, GeneratorTable, CALENDAR_ROW_CAP,
};
use gentable::planner::{ConstraintOffer, OrderingTerm, PlanRegistry};
use gentable::value::Value;

// =============================================================================
// Helper Functions
// =============================================================================

fn calendar_cursor(order_by: &[OrderingTerm], args: &[Value]) -> CalendarCursor {
    let table = CalendarTable::new(Arc::new(PlanRegistry::new()));
    let handle = table
        .negotiate(
            &[
                ConstraintOffer::eq(6),
                ConstraintOffer::eq(7),
                ConstraintOffer::eq(8),
            ],
            order_by,
        )
        .unwrap();
    let mut cursor = table.open(handle.token).unwrap();
    cursor.filter(args);
    cursor
}

fn text_args(start: &str, stop: &str, step: &str) -> Vec<Value> {
    vec![Value::from(start), Value::from(stop), Value::from(step)]
}

fn collect_dates(cursor: &mut CalendarCursor) -> Vec<String> {
    let mut rows = Vec::new();
    cursor.advance();
    while !cursor.exhausted() {
        match cursor.column(0) {
            Value::Text(s) => rows.push(s),
            other => panic!("date column produced {:?}", other),
        }
        cursor.advance();
    }
    rows
}

// =============================================================================
// Step Granularity Tests
// =============================================================================

#[test]
fn test_week_step() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-01-01", "2024-01-22", "week"));
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-01-01", "2024-01-08", "2024-01-15", "2024-01-22"]
    );
}

#[test]
fn test_biweek_step_is_fourteen_days() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-01-01", "2024-01-29", "biweek"));
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-01-01", "2024-01-15", "2024-01-29"]
    );
}

/// Month stepping lands on the same day-of-month where it exists and
/// rounds to the month's last day where it does not. Once rounded, the
/// sequence continues from the rounded day.
#[test]
fn test_month_step_rounds_at_short_months() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-01-31", "2024-05-01", "month"));
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-01-31", "2024-02-29", "2024-03-29", "2024-04-29"]
    );
}

#[test]
fn test_year_step_rounds_leap_day() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-02-29", "2026-03-01", "year"));
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-02-29", "2025-02-28", "2026-02-28"]
    );
}

#[test]
fn test_step_column_echoes_canonical_token() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-01-01", "2024-01-29", "biweek"));
    cursor.advance();
    assert_eq!(cursor.column(8), Value::from("biweek"));
}

// =============================================================================
// Direction Tests
// =============================================================================

#[test]
fn test_descending_month_sequence() {
    let mut cursor = calendar_cursor(
        &[OrderingTerm::desc(0)],
        &text_args("2024-01-15", "2024-04-15", "month"),
    );
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-04-15", "2024-03-15", "2024-02-15", "2024-01-15"]
    );
}

#[test]
fn test_direction_symmetry_for_daily_range() {
    let mut asc = calendar_cursor(&[], &text_args("2024-03-01", "2024-03-05", "day"));
    let mut desc = calendar_cursor(
        &[OrderingTerm::desc(0)],
        &text_args("2024-03-01", "2024-03-05", "day"),
    );

    let ascending = collect_dates(&mut asc);
    let mut descending = collect_dates(&mut desc);
    descending.reverse();
    assert_eq!(ascending, descending);
}

// =============================================================================
// Default and Fallback Tests
// =============================================================================

/// A bound that does not parse as `YYYY-MM-DD` keeps the default in
/// place rather than failing the scan.
#[test]
fn test_malformed_stop_falls_back_to_open_ended() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-01-01", "01/05/2024", "day"));

    // The default stop is open-ended, so only the row cap terminates
    let rows = collect_dates(&mut cursor);
    assert_eq!(rows.len() as i64, CALENDAR_ROW_CAP);
    assert_eq!(rows[0], "2024-01-01");
}

#[test]
fn test_unknown_step_token_falls_back_to_daily() {
    let mut cursor = calendar_cursor(&[], &text_args("2024-06-01", "2024-06-03", "decade"));
    assert_eq!(
        collect_dates(&mut cursor),
        vec!["2024-06-01", "2024-06-02", "2024-06-03"]
    );
}

#[test]
fn test_integer_bound_falls_back_to_default() {
    let mut cursor = calendar_cursor(
        &[],
        &[
            Value::from("2024-06-01"),
            Value::Integer(20240603),
            Value::from("day"),
        ],
    );
    let rows = collect_dates(&mut cursor);
    assert_eq!(rows.len() as i64, CALENDAR_ROW_CAP);
}

// =============================================================================
// Cap and Derived Column Tests
// =============================================================================

#[test]
fn test_row_cap_bounds_open_ended_range() {
    let mut cursor = calendar_cursor(&[], &text_args("2000-01-01", "9999-12-31", "day"));
    let rows = collect_dates(&mut cursor);
    assert_eq!(rows.len() as i64, CALENDAR_ROW_CAP);
}

#[test]
fn test_derived_columns_track_the_date() {
    // 2024-12-25 is a Wednesday in ISO week 52
    let mut cursor = calendar_cursor(&[], &text_args("2024-12-25", "2024-12-25", "day"));
    cursor.advance();
    assert_eq!(cursor.column(0), Value::from("2024-12-25"));
    assert_eq!(cursor.column(1), Value::Integer(4));
    assert_eq!(cursor.column(2), Value::Integer(25));
    assert_eq!(cursor.column(3), Value::Integer(52));
    assert_eq!(cursor.column(4), Value::Integer(12));
    assert_eq!(cursor.column(5), Value::Integer(2024));
}
