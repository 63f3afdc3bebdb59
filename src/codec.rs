//! Text <-> calendar-instant codec
//!
//! Dates are exchanged with the host exclusively as fixed-format text.
//! The codec is the single seam for that exchange: cursors decode bound
//! arguments through it and encode the `date` column back through it.
//!
//! Decode failures are recovered by the caller (generator defaults are
//! substituted); they never propagate to the host.

use chrono::NaiveDate;
use thiserror::Error;

use crate::value::Value;

/// Fixed exchange format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date argument that could not be decoded
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("malformed date text '{0}'")]
    MalformedDate(String),

    #[error("expected text value, got {0}")]
    WrongKind(&'static str),
}

/// Converts between host text values and calendar dates
pub trait DateCodec {
    /// Decodes a host value into a calendar date
    fn decode(&self, value: &Value) -> Result<NaiveDate, DecodeError>;

    /// Encodes a calendar date as host text
    fn encode(&self, date: NaiveDate) -> String;
}

/// The `YYYY-MM-DD` codec used by default
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateCodec;

impl DateCodec for IsoDateCodec {
    fn decode(&self, value: &Value) -> Result<NaiveDate, DecodeError> {
        let text = value
            .as_text()
            .ok_or_else(|| DecodeError::WrongKind(value.kind()))?;
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| DecodeError::MalformedDate(text.to_string()))
    }

    fn encode(&self, date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }
}
