//! Planner error types
//!
//! Error codes:
//! - GEN_PLAN_UNSUPPORTED_CONSTRAINT (REJECT)
//! - GEN_PLAN_UNKNOWN_COLUMN (REJECT)
//! - GEN_PLAN_NOT_FOUND (FATAL)
//!
//! REJECT errors make one candidate access path unusable; the host falls
//! back to another plan. FATAL errors are internal contract violations
//! (a plan token taken twice, or never registered) and are never caused
//! by user input.

use std::fmt;

/// Severity levels for planner errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Candidate plan rejected; host falls back
    Reject,
    /// Internal invariant violated
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Planner-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerErrorCode {
    /// Non-equality operator offered on a control column
    UnsupportedConstraint,
    /// Constraint targets a column index outside the schema
    UnknownColumn,
    /// No plan registered under the requested token
    PlanNotFound,
}

impl PlannerErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            PlannerErrorCode::UnsupportedConstraint => "GEN_PLAN_UNSUPPORTED_CONSTRAINT",
            PlannerErrorCode::UnknownColumn => "GEN_PLAN_UNKNOWN_COLUMN",
            PlannerErrorCode::PlanNotFound => "GEN_PLAN_NOT_FOUND",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            PlannerErrorCode::UnsupportedConstraint | PlannerErrorCode::UnknownColumn => {
                Severity::Reject
            }
            PlannerErrorCode::PlanNotFound => Severity::Fatal,
        }
    }
}

impl fmt::Display for PlannerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Planner error with full context
#[derive(Debug, Clone)]
pub struct PlannerError {
    /// Error code
    code: PlannerErrorCode,
    /// Human-readable message
    message: String,
    /// Offending column index if applicable
    column: Option<usize>,
}

impl PlannerError {
    /// Create an unsupported constraint error
    pub fn unsupported_constraint(column: usize, column_name: &str, symbol: &str) -> Self {
        Self {
            code: PlannerErrorCode::UnsupportedConstraint,
            message: format!(
                "operator '{}' is not supported on control column '{}'",
                symbol, column_name
            ),
            column: Some(column),
        }
    }

    /// Create an unknown column error
    pub fn unknown_column(column: usize) -> Self {
        Self {
            code: PlannerErrorCode::UnknownColumn,
            message: format!("constraint targets unknown column index {}", column),
            column: Some(column),
        }
    }

    /// Create a plan-not-found error
    pub fn plan_not_found(token: u64) -> Self {
        Self {
            code: PlannerErrorCode::PlanNotFound,
            message: format!("no plan registered under token {}", token),
            column: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> PlannerErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending column index if applicable
    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for PlannerError {}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
