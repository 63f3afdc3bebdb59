//! Plan negotiation
//!
//! Produces deterministic, immutable plans from the constraints and
//! ordering the host offers for one candidate query.
//!
//! Negotiation rules (strict order):
//! 1. Unusable offers are skipped, never rejected
//! 2. Offers on visible columns are skipped; the host filters them
//!    post-hoc
//! 3. A control-column offer must be equality, otherwise the whole
//!    negotiation fails
//! 4. Accepted offers get dense argument slots in encounter order
//! 5. A single-term ordering is consumed by the generator; multi-term
//!    orderings are left to the host

use serde::{Deserialize, Serialize};

use crate::schema::TableSchema;

use super::constraint::{ConstraintOffer, ConsumedConstraint, OrderingTerm};
use super::errors::{PlannerError, PlannerResult};

/// Row estimate when both range bounds are constrained
pub const BOUNDED_ROW_ESTIMATE: i64 = 1000;

/// Row estimate when the range is open-ended; large enough that the
/// optimizer avoids this access path unless nothing better exists
pub const UNBOUNDED_ROW_ESTIMATE: i64 = 2_147_483_647;

/// Immutable outcome of one negotiation (no runtime state)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Accepted constraints with their argument slots, in slot order
    pub consumed: Vec<ConsumedConstraint>,
    /// Whether iteration runs from the upper bound downward
    pub descending: bool,
    /// Whether the generator satisfies the requested ordering itself
    pub order_consumed: bool,
    /// Estimated result cardinality
    pub estimated_rows: i64,
    /// Estimated cost relative to competing access paths
    pub estimated_cost: f64,
}

impl Plan {
    /// Returns the argument slot bound to the given column, if any
    pub fn arg_slot_for(&self, column: usize) -> Option<usize> {
        self.consumed
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.arg_slot)
    }

    /// Returns the number of argument values the cursor will receive
    pub fn arg_count(&self) -> usize {
        self.consumed.len()
    }
}

/// Negotiates host offers against one generator schema
pub struct PlanNegotiator<'a> {
    schema: &'a TableSchema,
}

impl<'a> PlanNegotiator<'a> {
    /// Creates a negotiator for the given schema
    pub fn new(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Negotiates a plan, or fails the whole candidate.
    ///
    /// This method is deterministic: same offers in the same order
    /// produce the same plan.
    pub fn negotiate(
        &self,
        offers: &[ConstraintOffer],
        order_by: &[OrderingTerm],
    ) -> PlannerResult<Plan> {
        // 1-4. Walk offers in host order, assigning dense slots
        let mut consumed: Vec<ConsumedConstraint> = Vec::new();
        for offer in offers {
            if !offer.usable {
                continue;
            }
            let descriptor = self
                .schema
                .column(offer.column)
                .ok_or_else(|| PlannerError::unknown_column(offer.column))?;
            if !descriptor.is_control() {
                // Visible column: host must filter post-hoc
                continue;
            }
            if !offer.op.is_equality() {
                return Err(PlannerError::unsupported_constraint(
                    offer.column,
                    descriptor.name,
                    offer.op.symbol(),
                ));
            }
            let arg_slot = consumed.len();
            consumed.push(ConsumedConstraint {
                column: offer.column,
                op: offer.op,
                arg_slot,
            });
        }

        // 5. Exactly one ordering term is consumable; record direction
        let (descending, order_consumed) = match order_by {
            [term] => (term.direction.is_descending(), true),
            _ => (false, false),
        };

        // 6. Bounded ranges are cheap to enumerate, open-ended ones are
        //    not; a step constraint lowers the bounded cost further
        let has = |name: &str| {
            consumed.iter().any(|c| {
                self.schema
                    .column(c.column)
                    .map_or(false, |d| d.name == name)
            })
        };
        let (estimated_rows, estimated_cost) = if has("start") && has("stop") {
            let cost = 2.0 - if has("step") { 1.0 } else { 0.0 };
            (BOUNDED_ROW_ESTIMATE, cost)
        } else {
            (UNBOUNDED_ROW_ESTIMATE, UNBOUNDED_ROW_ESTIMATE as f64)
        };

        Ok(Plan {
            consumed,
            descending,
            order_consumed,
            estimated_rows,
            estimated_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constraint::{ConstraintOp, SortDirection};
    use crate::schema::{ColumnDef, LogicalType};

    fn series_schema() -> TableSchema {
        TableSchema::new(
            "series",
            vec![
                ColumnDef::visible("value", LogicalType::Integer),
                ColumnDef::control("start", LogicalType::Integer),
                ColumnDef::control("stop", LogicalType::Integer),
                ColumnDef::control("step", LogicalType::Integer),
            ],
        )
    }

    #[test]
    fn test_slots_dense_in_encounter_order() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        // stop offered before start; slots follow encounter order
        let plan = negotiator
            .negotiate(
                &[ConstraintOffer::eq(2), ConstraintOffer::eq(1)],
                &[],
            )
            .unwrap();
        assert_eq!(plan.arg_count(), 2);
        assert_eq!(plan.arg_slot_for(2), Some(0));
        assert_eq!(plan.arg_slot_for(1), Some(1));
    }

    #[test]
    fn test_visible_column_skipped_not_rejected() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        let plan = negotiator
            .negotiate(
                &[
                    ConstraintOffer::new(0, ConstraintOp::Gt),
                    ConstraintOffer::eq(1),
                ],
                &[],
            )
            .unwrap();
        assert_eq!(plan.arg_count(), 1);
        assert_eq!(plan.arg_slot_for(0), None);
        assert_eq!(plan.arg_slot_for(1), Some(0));
    }

    #[test]
    fn test_unusable_offer_skipped() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        let plan = negotiator
            .negotiate(
                &[
                    ConstraintOffer::eq(1).unusable(),
                    ConstraintOffer::eq(2),
                ],
                &[],
            )
            .unwrap();
        assert_eq!(plan.arg_count(), 1);
        assert_eq!(plan.arg_slot_for(1), None);
        assert_eq!(plan.arg_slot_for(2), Some(0));
    }

    #[test]
    fn test_non_equality_on_control_rejected() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        for op in [ConstraintOp::Gt, ConstraintOp::Le, ConstraintOp::Like] {
            let result =
                negotiator.negotiate(&[ConstraintOffer::new(1, op)], &[]);
            let err = result.unwrap_err();
            assert_eq!(err.code().code(), "GEN_PLAN_UNSUPPORTED_CONSTRAINT");
        }
    }

    #[test]
    fn test_unknown_column_rejected() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        let result = negotiator.negotiate(&[ConstraintOffer::eq(11)], &[]);
        let err = result.unwrap_err();
        assert_eq!(err.code().code(), "GEN_PLAN_UNKNOWN_COLUMN");
        assert_eq!(err.column(), Some(11));
    }

    #[test]
    fn test_single_ordering_consumed_with_direction() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        let plan = negotiator
            .negotiate(&[], &[OrderingTerm::desc(0)])
            .unwrap();
        assert!(plan.order_consumed);
        assert!(plan.descending);

        let plan = negotiator
            .negotiate(&[], &[OrderingTerm::asc(0)])
            .unwrap();
        assert!(plan.order_consumed);
        assert!(!plan.descending);
    }

    #[test]
    fn test_multi_ordering_not_consumed() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        let plan = negotiator
            .negotiate(
                &[],
                &[OrderingTerm::desc(0), OrderingTerm::asc(1)],
            )
            .unwrap();
        assert!(!plan.order_consumed);
        assert!(!plan.descending);
        assert_eq!(
            OrderingTerm::asc(1).direction,
            SortDirection::Asc
        );
    }

    #[test]
    fn test_bounded_estimates() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        // start + stop, no step
        let plan = negotiator
            .negotiate(&[ConstraintOffer::eq(1), ConstraintOffer::eq(2)], &[])
            .unwrap();
        assert_eq!(plan.estimated_rows, BOUNDED_ROW_ESTIMATE);
        assert_eq!(plan.estimated_cost, 2.0);

        // start + stop + step lowers cost
        let plan = negotiator
            .negotiate(
                &[
                    ConstraintOffer::eq(1),
                    ConstraintOffer::eq(2),
                    ConstraintOffer::eq(3),
                ],
                &[],
            )
            .unwrap();
        assert_eq!(plan.estimated_rows, BOUNDED_ROW_ESTIMATE);
        assert_eq!(plan.estimated_cost, 1.0);
    }

    #[test]
    fn test_unbounded_estimates() {
        let schema = series_schema();
        let negotiator = PlanNegotiator::new(&schema);

        // start alone is not enough
        let plan = negotiator
            .negotiate(&[ConstraintOffer::eq(1)], &[])
            .unwrap();
        assert_eq!(plan.estimated_rows, UNBOUNDED_ROW_ESTIMATE);

        let plan = negotiator.negotiate(&[], &[]).unwrap();
        assert_eq!(plan.estimated_rows, UNBOUNDED_ROW_ESTIMATE);
    }
}
