//! Explain output for negotiated plans
//!
//! Produces a deterministic, serializable description of either an
//! accepted plan or a rejection.

use serde::Serialize;

use crate::schema::TableSchema;

use super::errors::PlannerError;
use super::negotiator::Plan;

/// Explain rendering of one negotiation outcome
#[derive(Debug, Clone, Serialize)]
pub struct ExplainPlan {
    /// Whether negotiation succeeded
    pub accepted: bool,
    /// Accepted constraints as `<column> <op> argv[<slot>]`
    pub constraints: Vec<String>,
    /// Whether the generator satisfies the ordering itself
    pub order_consumed: bool,
    /// Iteration direction
    pub descending: bool,
    /// Estimated result cardinality (if accepted)
    pub estimated_rows: Option<i64>,
    /// Estimated cost (if accepted)
    pub estimated_cost: Option<f64>,
    /// Rejection reason (if rejected)
    pub rejection_reason: Option<String>,
    /// Rejection error code (if rejected)
    pub rejection_code: Option<String>,
}

impl ExplainPlan {
    /// Creates explain output from an accepted plan
    pub fn from_plan(plan: &Plan, schema: &TableSchema) -> Self {
        let constraints = plan
            .consumed
            .iter()
            .map(|c| c.describe(schema))
            .collect();

        Self {
            accepted: true,
            constraints,
            order_consumed: plan.order_consumed,
            descending: plan.descending,
            estimated_rows: Some(plan.estimated_rows),
            estimated_cost: Some(plan.estimated_cost),
            rejection_reason: None,
            rejection_code: None,
        }
    }

    /// Creates explain output from a planning error
    pub fn from_error(err: &PlannerError) -> Self {
        Self {
            accepted: false,
            constraints: Vec::new(),
            order_consumed: false,
            descending: false,
            estimated_rows: None,
            estimated_cost: None,
            rejection_reason: Some(err.message().to_string()),
            rejection_code: Some(err.code().code().to_string()),
        }
    }
}
