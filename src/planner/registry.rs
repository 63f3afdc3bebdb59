//! Process-wide plan registry
//!
//! Planning and iteration are separate host calls that may interleave
//! across concurrent queries, so negotiated plans are parked here under
//! an opaque token until the matching cursor opens.
//!
//! Entries are single-use: `take` removes on read. A second `take` for
//! the same token is a contract violation by the host, surfaced as a
//! FATAL `GEN_PLAN_NOT_FOUND`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::errors::{PlannerError, PlannerResult};
use super::negotiator::Plan;

/// Opaque identifier correlating a plan with the cursor that consumes it
pub type PlanToken = u64;

/// Token-keyed store of negotiated plans
#[derive(Debug)]
pub struct PlanRegistry {
    next_token: AtomicU64,
    plans: Mutex<HashMap<PlanToken, Plan>>,
}

impl PlanRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            next_token: AtomicU64::new(1),
            plans: Mutex::new(HashMap::new()),
        }
    }

    /// Stores a plan and returns its token.
    ///
    /// Tokens are monotonic; no two live plans ever share one.
    pub fn put(&self, plan: Plan) -> PlanToken {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let mut plans = self.plans.lock().expect("plan registry poisoned");
        plans.insert(token, plan);
        token
    }

    /// Removes and returns the plan registered under `token`.
    ///
    /// Fails with `GEN_PLAN_NOT_FOUND` if the token was never issued or
    /// was already consumed.
    pub fn take(&self, token: PlanToken) -> PlannerResult<Plan> {
        let mut plans = self.plans.lock().expect("plan registry poisoned");
        plans
            .remove(&token)
            .ok_or_else(|| PlannerError::plan_not_found(token))
    }

    /// Number of plans currently parked (planned but not yet opened)
    pub fn len(&self) -> usize {
        self.plans.lock().expect("plan registry poisoned").len()
    }

    /// Returns true if no plans are parked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlanRegistry {
    fn default() -> Self {
        Self::new()
    }
}
