//! Plan negotiation subsystem for gentable
//!
//! The host engine offers a set of candidate constraints and an ordering
//! for each query. Negotiation decides which of those the generator can
//! satisfy itself, assigns each accepted constraint a dense argument
//! slot, estimates cost and cardinality for the optimizer, and produces
//! an immutable `Plan`.
//!
//! # Design Principles
//!
//! - Deterministic: same offers in the same order produce the same plan
//! - Immutable: a `Plan` never changes after negotiation
//! - Single-use: a plan is registered under an opaque token, taken back
//!   exactly once by the cursor that opens with it, then discarded
//! - Strict: a non-equality operator on a control column fails the whole
//!   negotiation; no partial plan is ever returned

mod constraint;
mod errors;
mod explain;
mod negotiator;
mod registry;

pub use constraint::{
    ConstraintOffer, ConstraintOp, ConsumedConstraint, OrderingTerm, SortDirection,
};
pub use errors::{PlannerError, PlannerErrorCode, PlannerResult, Severity};
pub use explain::ExplainPlan;
pub use negotiator::{
    Plan, PlanNegotiator, BOUNDED_ROW_ESTIMATE, UNBOUNDED_ROW_ESTIMATE,
};
pub use registry::{PlanRegistry, PlanToken};
