//! CLI-specific error types
//!
//! All CLI errors are fatal to the invocation.

use std::fmt;

use crate::planner::PlannerError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Unknown generator table name
    UnknownTable,
    /// The negotiator rejected the offered constraints
    PlanRejected,
    /// Output could not be serialized
    OutputError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTable => "GEN_CLI_UNKNOWN_TABLE",
            Self::PlanRejected => "GEN_CLI_PLAN_REJECTED",
            Self::OutputError => "GEN_CLI_OUTPUT_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown table
    pub fn unknown_table(name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownTable,
            format!("unknown table '{}'; expected series or calendar", name),
        )
    }

    /// Plan rejected by the negotiator
    pub fn plan_rejected(err: PlannerError) -> Self {
        Self::new(CliErrorCode::PlanRejected, err.to_string())
    }

    /// Output serialization failure
    pub fn output_error(err: serde_json::Error) -> Self {
        Self::new(CliErrorCode::OutputError, err.to_string())
    }

    /// Returns the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
