//! Constraint model
//!
//! Pure data describing what the host offers for one candidate query:
//! per-column predicates and a requested ordering. The negotiator is the
//! only consumer; the only behavior here is the operator symbol table and
//! the debug rendering of accepted constraints.

use serde::{Deserialize, Serialize};

use crate::schema::TableSchema;

/// Constraint operator as offered by the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintOp {
    Eq,
    Gt,
    Le,
    Lt,
    Ge,
    Match,
    Like,
    Glob,
    Regexp,
    Ne,
    Is,
    IsNot,
    IsNull,
    IsNotNull,
    Function,
    /// Operator code this crate does not recognize
    Unknown,
}

impl ConstraintOp {
    /// Returns true if this is the equality operator
    pub fn is_equality(&self) -> bool {
        matches!(self, ConstraintOp::Eq)
    }

    /// Returns the SQL symbol for explain output
    pub fn symbol(&self) -> &'static str {
        match self {
            ConstraintOp::Eq => "=",
            ConstraintOp::Gt => ">",
            ConstraintOp::Le => "<=",
            ConstraintOp::Lt => "<",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Match => "MATCH",
            ConstraintOp::Like => "LIKE",
            ConstraintOp::Glob => "GLOB",
            ConstraintOp::Regexp => "REGEX",
            ConstraintOp::Ne => "!=",
            ConstraintOp::Is => "IS",
            ConstraintOp::IsNot => "IS NOT",
            ConstraintOp::IsNull => "IS NULL",
            ConstraintOp::IsNotNull => "IS NOT NULL",
            ConstraintOp::Function => "f()",
            ConstraintOp::Unknown => "<op>",
        }
    }
}

/// One constraint offered by the host for a candidate query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintOffer {
    /// Target column index in the table schema
    pub column: usize,
    /// Offered operator
    pub op: ConstraintOp,
    /// Whether the host allows this constraint to be consumed
    pub usable: bool,
}

impl ConstraintOffer {
    /// Creates a usable offer
    pub fn new(column: usize, op: ConstraintOp) -> Self {
        Self {
            column,
            op,
            usable: true,
        }
    }

    /// Creates a usable equality offer
    pub fn eq(column: usize) -> Self {
        Self::new(column, ConstraintOp::Eq)
    }

    /// Marks the offer unusable (the host will not supply its argument)
    pub fn unusable(mut self) -> Self {
        self.usable = false;
        self
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Returns true for descending order
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Desc)
    }
}

/// One term of the ordering requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingTerm {
    /// Column index the host wants sorted
    pub column: usize,
    /// Requested direction
    pub direction: SortDirection,
}

impl OrderingTerm {
    pub fn asc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

/// A constraint accepted during negotiation, bound to an argument slot.
///
/// Slots are dense and ordered by encounter order: the host supplies
/// `argv[arg_slot]` at cursor filter time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedConstraint {
    /// Target column index
    pub column: usize,
    /// Accepted operator (always equality on control columns)
    pub op: ConstraintOp,
    /// Assigned argument slot, 0-based
    pub arg_slot: usize,
}

impl ConsumedConstraint {
    /// Renders `<column> <op> argv[<slot>]` for explain and log output
    pub fn describe(&self, schema: &TableSchema) -> String {
        let name = schema
            .column(self.column)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| format!("col[{}]", self.column));
        format!("{} {} argv[{}]", name, self.op.symbol(), self.arg_slot)
    }
}
