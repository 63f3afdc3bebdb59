//! CLI module for gentable
//!
//! Provides command-line access to the generators:
//! - series: enumerate an integer progression
//! - calendar: enumerate a calendar of dates
//! - explain: show the negotiated plan without iterating
//!
//! Each command runs the full host contract: negotiate, open the cursor
//! by token, filter with the supplied arguments, then iterate.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};
