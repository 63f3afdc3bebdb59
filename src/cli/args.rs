//! CLI argument definitions using clap
//!
//! Commands:
//! - gentable series [--start N] [--stop N] [--step N] [--desc]
//! - gentable calendar [--start DATE] [--stop DATE] [--step UNIT] [--desc]
//! - gentable explain <table> [bounds...]

use clap::{Parser, Subcommand};

/// gentable - generator-backed virtual tables with constraint pushdown
#[derive(Parser, Debug)]
#[command(name = "gentable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate an integer progression
    Series {
        /// Lower bound (default 0)
        #[arg(long)]
        start: Option<i64>,

        /// Inclusive upper bound (default 0xffffffff)
        #[arg(long)]
        stop: Option<i64>,

        /// Increment (default 1)
        #[arg(long)]
        step: Option<i64>,

        /// Iterate from the upper bound downward
        #[arg(long)]
        desc: bool,
    },

    /// Enumerate a calendar of dates
    Calendar {
        /// First date, YYYY-MM-DD (default today)
        #[arg(long)]
        start: Option<String>,

        /// Inclusive last date, YYYY-MM-DD (default open-ended)
        #[arg(long)]
        stop: Option<String>,

        /// Step token: day, week, biweek, month or year (default day)
        #[arg(long)]
        step: Option<String>,

        /// Iterate from the upper bound downward
        #[arg(long)]
        desc: bool,
    },

    /// Show the negotiated plan for a table without iterating
    Explain {
        /// Generator table: series or calendar
        table: String,

        /// Constrain the start bound
        #[arg(long)]
        start: Option<String>,

        /// Constrain the stop bound
        #[arg(long)]
        stop: Option<String>,

        /// Constrain the step
        #[arg(long)]
        step: Option<String>,

        /// Request descending order
        #[arg(long)]
        desc: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
