//! Table schema subsystem for gentable
//!
//! Declares the fixed, position-addressed column layout of each generator
//! table. Control columns carry no output value; they exist only to
//! receive constraint arguments (start/stop/step).
//!
//! # Invariants
//!
//! - Column order is fixed for the lifetime of a generator type
//! - Visible columns precede control columns
//! - Column index is column identity

mod columns;

pub use columns::{ColumnDef, LogicalType, TableSchema, Visibility};
