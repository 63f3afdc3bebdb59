//! Observability subsystem for gentable
//!
//! Structured, synchronous logging for the two places the engine wants
//! eyes on a generator: plan negotiation and cursor filtering.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on iteration
//! 3. No async or background threads
//! 4. Deterministic output (sorted fields, one line per event)

mod logger;

pub use logger::{Logger, Severity};
