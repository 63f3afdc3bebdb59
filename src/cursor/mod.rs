//! Sequence cursor subsystem for gentable
//!
//! Each generator type implements the same four-call host contract:
//!
//! 1. `negotiate` during optimization, possibly once per candidate plan
//! 2. `open` for the plan the optimizer actually selected
//! 3. `filter` once per cursor, with the argument values the plan asked
//!    for
//! 4. repeated `column` / `advance` / `exhausted` until exhausted
//!
//! # Cursor state machine
//!
//! Created -> Filtered -> Exhausted. `filter` seeds `current` at the
//! range's starting edge (lower bound ascending, upper bound descending)
//! with `row_ordinal = 0` meaning "not yet advanced". The first `advance`
//! only moves the ordinal: the starting edge itself is the first emitted
//! row. Every later `advance` moves `current` by one step in the
//! configured direction. Exhaustion is derived from `current`, the
//! bounds, and the hard row cap on every query; it is never a stored
//! flag.

mod calendar;
mod series;
mod step;

pub use calendar::{CalendarColumn, CalendarCursor, CalendarTable, CALENDAR_ROW_CAP};
pub use series::{SeriesColumn, SeriesCursor, SeriesTable, SERIES_ROW_CAP};
pub use step::{CalendarStep, StepUnit};

use crate::observability::Logger;
use crate::planner::{
    ConstraintOffer, OrderingTerm, Plan, PlanNegotiator, PlanRegistry, PlanToken, PlannerResult,
};
use crate::schema::TableSchema;
use crate::value::Value;

/// What the host keeps from a successful negotiation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanHandle {
    /// Token to open the cursor with
    pub token: PlanToken,
    /// Estimated result cardinality
    pub estimated_rows: i64,
    /// Estimated cost relative to competing access paths
    pub estimated_cost: f64,
    /// True if the host must not re-sort the output
    pub order_by_consumed: bool,
}

/// A generator exposed to the host as a table
pub trait GeneratorTable {
    /// Cursor type produced by `open`
    type Cursor: GeneratorCursor;

    /// Fixed column layout of this generator type
    fn schema(&self) -> &TableSchema;

    /// Negotiates one candidate plan and parks it in the registry
    fn negotiate(
        &self,
        offers: &[ConstraintOffer],
        order_by: &[OrderingTerm],
    ) -> PlannerResult<PlanHandle>;

    /// Opens a cursor over the plan registered under `token`
    fn open(&self, token: PlanToken) -> PlannerResult<Self::Cursor>;
}

/// Pull-based iteration over one opened plan
pub trait GeneratorCursor {
    /// Binds concrete argument values and seeds the iteration range.
    ///
    /// Invalid or missing values fall back to generator defaults; this
    /// call never fails.
    fn filter(&mut self, args: &[Value]);

    /// Moves to the next row. The first call after `filter` only counts
    /// the seeded starting edge; it does not move the position.
    fn advance(&mut self);

    /// True once iteration has run off the range or hit the row cap
    fn exhausted(&self) -> bool;

    /// Reads one column of the current row
    fn column(&self, index: usize) -> Value;

    /// Count of rows emitted so far; 0 before the first `advance`
    fn rowid(&self) -> i64;
}

/// Negotiates against `schema`, parks the plan, and returns the handle
/// the host keeps. Shared by both generator types.
fn negotiate_and_register(
    schema: &TableSchema,
    registry: &PlanRegistry,
    offers: &[ConstraintOffer],
    order_by: &[OrderingTerm],
) -> PlannerResult<PlanHandle> {
    let plan: Plan = PlanNegotiator::new(schema).negotiate(offers, order_by)?;
    let estimated_rows = plan.estimated_rows;
    let estimated_cost = plan.estimated_cost;
    let order_by_consumed = plan.order_consumed;
    let token = registry.put(plan);
    Logger::info(
        "PLAN_NEGOTIATED",
        &[
            ("table", schema.table_name()),
            ("token", &token.to_string()),
            ("estimated_rows", &estimated_rows.to_string()),
        ],
    );
    Ok(PlanHandle {
        token,
        estimated_rows,
        estimated_cost,
        order_by_consumed,
    })
}
