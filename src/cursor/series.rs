//! Integer sequence generator
//!
//! Schema: `(value, start HIDDEN, stop HIDDEN, step HIDDEN)`. Produces
//! the arithmetic progression from `start` to `stop` (inclusive) in
//! increments of `step`, ascending or descending.
//!
//! Defaults: start = 0, stop = 0xffffffff, step = 1. A null bound
//! argument collapses the whole range to the explicitly empty
//! (start=1, stop=0): null means "produce nothing", not "use the
//! default".

use std::sync::Arc;

use crate::observability::Logger;
use crate::planner::{ConstraintOffer, OrderingTerm, Plan, PlanRegistry, PlanToken, PlannerResult};
use crate::schema::{ColumnDef, LogicalType, TableSchema};
use crate::value::Value;

use super::{negotiate_and_register, GeneratorCursor, GeneratorTable, PlanHandle};

/// Hard cap on rows per cursor, independent of the bound values
pub const SERIES_ROW_CAP: i64 = 10_000;

const DEFAULT_STOP: i64 = 0xffff_ffff;

/// Typed column index for the series schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColumn {
    Value,
    Start,
    Stop,
    Step,
}

impl SeriesColumn {
    /// Resolves a host column index
    pub fn from_index(index: usize) -> Option<SeriesColumn> {
        match index {
            0 => Some(SeriesColumn::Value),
            1 => Some(SeriesColumn::Start),
            2 => Some(SeriesColumn::Stop),
            3 => Some(SeriesColumn::Step),
            _ => None,
        }
    }
}

/// Integer sequence table
pub struct SeriesTable {
    schema: TableSchema,
    registry: Arc<PlanRegistry>,
}

impl SeriesTable {
    /// Creates the table against a shared plan registry
    pub fn new(registry: Arc<PlanRegistry>) -> Self {
        let schema = TableSchema::new(
            "series",
            vec![
                ColumnDef::visible("value", LogicalType::Integer),
                ColumnDef::control("start", LogicalType::Integer),
                ColumnDef::control("stop", LogicalType::Integer),
                ColumnDef::control("step", LogicalType::Integer),
            ],
        );
        Self { schema, registry }
    }
}

impl GeneratorTable for SeriesTable {
    type Cursor = SeriesCursor;

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

    fn open(&self, token: PlanToken) -> PlannerResult<SeriesCursor> {
        let plan = self.registry.take(token)?;
        Ok(SeriesCursor::new(plan))
    }
}

/// Cursor over one integer progression
#[derive(Debug)]
pub struct SeriesCursor {
    plan: Plan,
    filtered: bool,
    row_ordinal: i64,
    current: i64,
    start: i64,
    stop: i64,
    step: i64,
}

impl SeriesCursor {
    fn new(plan: Plan) -> Self {
        Self {
            plan,
            filtered: false,
            row_ordinal: 0,
            current: 0,
            start: 0,
            stop: 0,
            step: 0,
        }
    }
}

impl GeneratorCursor for SeriesCursor {
    fn filter(&mut self, args: &[Value]) {
        self.start = 0;
        self.stop = DEFAULT_STOP;
        self.step = 1;

        for consumed in &self.plan.consumed {
            let Some(arg) = args.get(consumed.arg_slot) else {
                continue;
            };
            match (SeriesColumn::from_index(consumed.column), arg.as_integer()) {
                (Some(SeriesColumn::Start), Some(v)) => self.start = v,
                (Some(SeriesColumn::Stop), Some(v)) => self.stop = v,
                (Some(SeriesColumn::Step), Some(v)) => self.step = v,
                _ => {}
            }
        }

        // A null bound means "produce nothing", not "use the default"
        if args.iter().any(Value::is_null) {
            self.start = 1;
            self.stop = 0;
        }

        self.current = if self.plan.descending {
            self.stop
        } else {
            self.start
        };
        if self.plan.descending && self.step > 0 {
            // Pull the seed down so the first emitted value is the true
            // top-of-range reachable from start in multiples of step
            let pulled = self.stop as i128
                - (self.stop as i128 - self.start as i128) % self.step as i128;
            self.current = pulled.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        }
        self.row_ordinal = 0;
        self.filtered = true;

        Logger::trace(
            "CURSOR_FILTERED",
            &[
                ("table", "series"),
                ("start", &self.start.to_string()),
                ("stop", &self.stop.to_string()),
                ("step", &self.step.to_string()),
                ("descending", if self.plan.descending { "true" } else { "false" }),
            ],
        );
    }

    fn advance(&mut self) {
        debug_assert!(self.filtered, "advance before filter");
        self.row_ordinal += 1;
        if self.row_ordinal > 1 {
            self.current = if self.plan.descending {
                self.current.saturating_sub(self.step)
            } else {
                self.current.saturating_add(self.step)
            };
        }
    }

    fn exhausted(&self) -> bool {
        if !self.filtered || self.row_ordinal > SERIES_ROW_CAP {
            return true;
        }
        if self.plan.descending {
            self.current < self.start
        } else {
            self.current > self.stop
        }
    }

    fn column(&self, index: usize) -> Value {
        match SeriesColumn::from_index(index) {
            Some(SeriesColumn::Value) => Value::Integer(self.current),
            Some(SeriesColumn::Start) => Value::Integer(self.start),
            Some(SeriesColumn::Stop) => Value::Integer(self.stop),
            Some(SeriesColumn::Step) => Value::Integer(self.step),
            None => Value::Null,
        }
    }

    fn rowid(&self) -> i64 {
        self.row_ordinal
    }
}
