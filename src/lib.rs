//! gentable - generator-backed virtual tables with constraint pushdown
//!
//! Lets a relational query engine treat a procedurally generated row
//! sequence (a calendar of dates, or an arithmetic integer progression)
//! as a table. The host offers its constraints and ordering once per
//! candidate plan; the negotiator decides what the generator can satisfy
//! itself, parks the decision in a token-keyed registry, and the cursor
//! that later opens with that token replays it over a bounded lazy
//! sequence of rows.

pub mod cli;
pub mod codec;
pub mod cursor;
pub mod observability;
pub mod planner;
pub mod schema;
pub mod value;
