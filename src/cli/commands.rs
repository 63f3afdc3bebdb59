//! CLI command implementations
//!
//! Each generator command drives the full host contract against a fresh
//! registry: negotiate the offered bounds, open the cursor by token,
//! filter, then iterate and print one JSON object per visible row.

use std::sync::Arc;

use crate::cursor::{CalendarTable, GeneratorCursor, GeneratorTable, SeriesTable};
use crate::planner::{
    ConstraintOffer, ExplainPlan, OrderingTerm, PlanNegotiator, PlanRegistry,
};
use crate::schema::TableSchema;
use crate::value::Value;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Series {
            start,
            stop,
            step,
            desc,
        } => series(start, stop, step, desc),
        Command::Calendar {
            start,
            stop,
            step,
            desc,
        } => calendar(start, stop, step, desc),
        Command::Explain {
            table,
            start,
            stop,
            step,
            desc,
        } => explain(&table, start, stop, step, desc),
    }
}

fn series(
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
    desc: bool,
) -> CliResult<()> {
    let table = SeriesTable::new(Arc::new(PlanRegistry::new()));

    let mut offers = Vec::new();
    let mut args = Vec::new();
    for (column, value) in [(1, start), (2, stop), (3, step)] {
        if let Some(v) = value {
            offers.push(ConstraintOffer::eq(column));
            args.push(Value::Integer(v));
        }
    }

    let handle = table
        .negotiate(&offers, &order_by(desc))
        .map_err(CliError::plan_rejected)?;
    let mut cursor = table.open(handle.token).map_err(CliError::plan_rejected)?;
    cursor.filter(&args);
    emit_rows(table.schema(), &mut cursor)
}

fn calendar(
    start: Option<String>,
    stop: Option<String>,
    step: Option<String>,
    desc: bool,
) -> CliResult<()> {
    let table = CalendarTable::new(Arc::new(PlanRegistry::new()));

    let mut offers = Vec::new();
    let mut args = Vec::new();
    for (column, value) in [(6, start), (7, stop), (8, step)] {
        if let Some(v) = value {
            offers.push(ConstraintOffer::eq(column));
            args.push(Value::Text(v));
        }
    }

    let handle = table
        .negotiate(&offers, &order_by(desc))
        .map_err(CliError::plan_rejected)?;
    let mut cursor = table.open(handle.token).map_err(CliError::plan_rejected)?;
    cursor.filter(&args);
    emit_rows(table.schema(), &mut cursor)
}

fn explain(
    table: &str,
    start: Option<String>,
    stop: Option<String>,
    step: Option<String>,
    desc: bool,
) -> CliResult<()> {
    let registry = Arc::new(PlanRegistry::new());
    let (schema, control_base) = match table {
        "series" => (SeriesTable::new(registry).schema().clone(), 1),
        "calendar" => (CalendarTable::new(registry).schema().clone(), 6),
        other => return Err(CliError::unknown_table(other)),
    };

    let mut offers = Vec::new();
    for (offset, present) in [start.is_some(), stop.is_some(), step.is_some()]
        .into_iter()
        .enumerate()
    {
        if present {
            offers.push(ConstraintOffer::eq(control_base + offset));
        }
    }

    let explain = match PlanNegotiator::new(&schema).negotiate(&offers, &order_by(desc)) {
        Ok(plan) => ExplainPlan::from_plan(&plan, &schema),
        Err(err) => ExplainPlan::from_error(&err),
    };
    let output = serde_json::to_string_pretty(&explain).map_err(CliError::output_error)?;
    println!("{}", output);
    Ok(())
}

fn order_by(desc: bool) -> Vec<OrderingTerm> {
    if desc {
        vec![OrderingTerm::desc(0)]
    } else {
        Vec::new()
    }
}

/// Prints one JSON object per row, visible columns only
fn emit_rows<C: GeneratorCursor>(schema: &TableSchema, cursor: &mut C) -> CliResult<()> {
    cursor.advance();
    while !cursor.exhausted() {
        let mut row = serde_json::Map::new();
        for (index, column) in schema.columns().iter().enumerate() {
            if column.is_control() {
                continue;
            }
            row.insert(column.name.to_string(), to_json(cursor.column(index)));
        }
        let line = serde_json::to_string(&row).map_err(CliError::output_error)?;
        println!("{}", line);
        cursor.advance();
    }
    Ok(())
}

fn to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => serde_json::Value::from(i),
        Value::Text(s) => serde_json::Value::from(s),
    }
}
