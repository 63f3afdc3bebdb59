//! Calendar sequence generator
//!
//! Schema: `(date, weekday, day, week, month, year, start HIDDEN,
//! stop HIDDEN, step HIDDEN)`. Produces a progression of calendar dates
//! from `start` to `stop` (inclusive) in steps of a named granularity.
//! The integer columns are derived from `date` by calendar arithmetic.
//!
//! Defaults: start = today, stop = the maximum representable date,
//! step = (1, day). Stepping is calendar-component arithmetic, not
//! fixed-duration arithmetic: month and year steps land on the same
//! day-of-month where it exists, with the calendar library's own
//! month-length rounding where it does not.

use std::sync::Arc;

use chrono::{Datelike, Days, Months, NaiveDate, Utc};

use crate::codec::{DateCodec, IsoDateCodec};
use crate::observability::Logger;
use crate::planner::{ConstraintOffer, OrderingTerm, Plan, PlanRegistry, PlanToken, PlannerResult};
use crate::schema::{ColumnDef, LogicalType, TableSchema};
use crate::value::Value;

use super::step::{CalendarStep, StepUnit};
use super::{negotiate_and_register, GeneratorCursor, GeneratorTable, PlanHandle};

/// Hard cap on rows per cursor (roughly 1000 years of daily rows), a
/// denial-of-service guard against open-ended ranges
pub const CALENDAR_ROW_CAP: i64 = 365_000;

/// Typed column index for the calendar schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarColumn {
    Date,
    Weekday,
    Day,
    Week,
    Month,
    Year,
    Start,
    Stop,
    Step,
}

impl CalendarColumn {
    /// Resolves a host column index
    pub fn from_index(index: usize) -> Option<CalendarColumn> {
        match index {
            0 => Some(CalendarColumn::Date),
            1 => Some(CalendarColumn::Weekday),
            2 => Some(CalendarColumn::Day),
            3 => Some(CalendarColumn::Week),
            4 => Some(CalendarColumn::Month),
            5 => Some(CalendarColumn::Year),
            6 => Some(CalendarColumn::Start),
            7 => Some(CalendarColumn::Stop),
            8 => Some(CalendarColumn::Step),
            _ => None,
        }
    }
}

/// Calendar sequence table, generic over the text<->date codec
pub struct CalendarTable<C: DateCodec + Clone = IsoDateCodec> {
    schema: TableSchema,
    registry: Arc<PlanRegistry>,
    codec: C,
}

impl CalendarTable {
    /// Creates the table with the default `YYYY-MM-DD` codec
    pub fn new(registry: Arc<PlanRegistry>) -> Self {
        Self::with_codec(registry, IsoDateCodec)
    }
}

impl<C: DateCodec + Clone> CalendarTable<C> {
    /// Creates the table with a custom codec
    pub fn with_codec(registry: Arc<PlanRegistry>, codec: C) -> Self {
        let schema = TableSchema::new(
            "calendar",
            vec![
                ColumnDef::visible("date", LogicalType::Text),
                ColumnDef::visible("weekday", LogicalType::Integer),
                ColumnDef::visible("day", LogicalType::Integer),
                ColumnDef::visible("week", LogicalType::Integer),
                ColumnDef::visible("month", LogicalType::Integer),
                ColumnDef::visible("year", LogicalType::Integer),
                ColumnDef::control("start", LogicalType::Text),
                ColumnDef::control("stop", LogicalType::Text),
                ColumnDef::control("step", LogicalType::Text),
            ],
        );
        Self {
            schema,
            registry,
            codec,
        }
    }
}

impl<C: DateCodec + Clone> GeneratorTable for CalendarTable<C> {
    type Cursor = CalendarCursor<C>;

    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn negotiate(
        &self,
        offers: &[ConstraintOffer],
        order_by: &[OrderingTerm],
    ) -> PlannerResult<PlanHandle> {
        negotiate_and_register(&self.schema, &self.registry, offers, order_by)
    }

    fn open(&self, token: PlanToken) -> PlannerResult<CalendarCursor<C>> {
        let plan = self.registry.take(token)?;
        Ok(CalendarCursor::new(plan, self.codec.clone()))
    }
}

/// Cursor over one calendar progression
pub struct CalendarCursor<C: DateCodec = IsoDateCodec> {
    plan: Plan,
    codec: C,
    filtered: bool,
    row_ordinal: i64,
    current: NaiveDate,
    start: NaiveDate,
    stop: NaiveDate,
    step: CalendarStep,
}

impl<C: DateCodec> CalendarCursor<C> {
    fn new(plan: Plan, codec: C) -> Self {
        Self {
            plan,
            codec,
            filtered: false,
            row_ordinal: 0,
            current: NaiveDate::default(),
            start: NaiveDate::default(),
            stop: NaiveDate::default(),
            step: CalendarStep::default(),
        }
    }

    /// Decodes a date bound, logging and keeping `default` on failure
    fn decode_bound(&self, arg: &Value, column: &'static str, default: NaiveDate) -> NaiveDate {
        match self.codec.decode(arg) {
            Ok(date) => date,
            Err(err) => {
                Logger::warn(
                    "ARG_DECODE_FALLBACK",
                    &[
                        ("table", "calendar"),
                        ("column", column),
                        ("reason", &err.to_string()),
                    ],
                );
                default
            }
        }
    }

    /// Moves `date` one step in the configured direction, as calendar
    /// component arithmetic. Saturates at the calendar edge; the row
    /// cap terminates the scan there.
    fn stepped(&self, date: NaiveDate) -> NaiveDate {
        let descending = self.plan.descending;
        let magnitude = self.step.magnitude;
        let days = |n: u32| Days::new(u64::from(n));
        let stepped = match self.step.unit {
            StepUnit::Day if descending => date.checked_sub_days(days(magnitude)),
            StepUnit::Day => date.checked_add_days(days(magnitude)),
            StepUnit::Week if descending => date.checked_sub_days(days(7 * magnitude)),
            StepUnit::Week => date.checked_add_days(days(7 * magnitude)),
            StepUnit::Month if descending => date.checked_sub_months(Months::new(magnitude)),
            StepUnit::Month => date.checked_add_months(Months::new(magnitude)),
            StepUnit::Year if descending => date.checked_sub_months(Months::new(12 * magnitude)),
            StepUnit::Year => date.checked_add_months(Months::new(12 * magnitude)),
        };
        stepped.unwrap_or(date)
    }
}

impl<C: DateCodec> GeneratorCursor for CalendarCursor<C> {
    fn filter(&mut self, args: &[Value]) {
        self.start = Utc::now().date_naive();
        self.stop = NaiveDate::MAX;
        self.step = CalendarStep::default();

        for consumed in &self.plan.consumed {
            let Some(arg) = args.get(consumed.arg_slot) else {
                continue;
            };
            match CalendarColumn::from_index(consumed.column) {
                Some(CalendarColumn::Start) => {
                    self.start = self.decode_bound(arg, "start", self.start);
                }
                Some(CalendarColumn::Stop) => {
                    self.stop = self.decode_bound(arg, "stop", self.stop);
                }
                Some(CalendarColumn::Step) => {
                    match arg.as_text().and_then(CalendarStep::parse) {
                        Some(step) => self.step = step,
                        None => {
                            // Explicit fallback to (1, day)
                            Logger::warn(
                                "ARG_DECODE_FALLBACK",
                                &[
                                    ("table", "calendar"),
                                    ("column", "step"),
                                    ("reason", "unrecognized step token"),
                                ],
                            );
                            self.step = CalendarStep::default();
                        }
                    }
                }
                _ => {}
            }
        }

        self.current = if self.plan.descending {
            self.stop
        } else {
            self.start
        };
        self.row_ordinal = 0;
        self.filtered = true;

        Logger::trace(
            "CURSOR_FILTERED",
            &[
                ("table", "calendar"),
                ("start", &self.codec.encode(self.start)),
                ("stop", &self.codec.encode(self.stop)),
                ("step", &self.step.token()),
                ("descending", if self.plan.descending { "true" } else { "false" }),
            ],
        );
    }

    fn advance(&mut self) {
        debug_assert!(self.filtered, "advance before filter");
        self.row_ordinal += 1;
        if self.row_ordinal > 1 {
            self.current = self.stepped(self.current);
        }
    }

    fn exhausted(&self) -> bool {
        if !self.filtered || self.row_ordinal > CALENDAR_ROW_CAP {
            return true;
        }
        if self.plan.descending {
            self.current < self.start
        } else {
            self.current > self.stop
        }
    }

    fn column(&self, index: usize) -> Value {
        let date = self.current;
        match CalendarColumn::from_index(index) {
            Some(CalendarColumn::Date) => Value::Text(self.codec.encode(date)),
            Some(CalendarColumn::Weekday) => {
                Value::Integer(i64::from(date.weekday().number_from_sunday()))
            }
            Some(CalendarColumn::Day) => Value::Integer(i64::from(date.day())),
            Some(CalendarColumn::Week) => Value::Integer(i64::from(date.iso_week().week())),
            Some(CalendarColumn::Month) => Value::Integer(i64::from(date.month())),
            Some(CalendarColumn::Year) => Value::Integer(i64::from(date.year())),
            Some(CalendarColumn::Start) => Value::Text(self.codec.encode(self.start)),
            Some(CalendarColumn::Stop) => Value::Text(self.codec.encode(self.stop)),
            Some(CalendarColumn::Step) => Value::Text(self.step.token()),
            None => Value::Null,
        }
    }

    fn rowid(&self) -> i64 {
        self.row_ordinal
    }
}
