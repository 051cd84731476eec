use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single table cell. `None` and NaN both count as missing.
pub type Cell = Option<f64>;

/// Returns true when the cell holds the null marker (absent or NaN).
#[inline(always)]
pub fn is_missing(cell: Cell) -> bool {
    cell.map_or(true, f64::is_nan)
}

/// A row-index entry. Most indices are dates, but text and integer labels
/// are accepted so string-formatted and positional indices work too.
///
/// Serialised with the variant as the key (`{"date": "2024-01-02"}`,
/// `{"text": "2024-01-02"}`) so a date-like text label stays text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Date(NaiveDate),
    Int(i64),
    Text(String),
}

impl Label {
    /// The variant name, used to tell apart labels that print the same.
    pub fn kind(&self) -> &'static str {
        match self {
            Label::Date(_) => "date",
            Label::Int(_) => "int",
            Label::Text(_) => "text",
        }
    }

    /// The canonical string form: `YYYY-MM-DD` for dates.
    pub fn to_text(&self) -> Label {
        match self {
            Label::Text(_) => self.clone(),
            other => Label::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Label::Int(i) => write!(f, "{}", i),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<NaiveDate> for Label {
    fn from(d: NaiveDate) -> Self { Label::Date(d) }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self { Label::Int(i) }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self { Label::Text(s.to_string()) }
}

impl From<String> for Label {
    fn from(s: String) -> Self { Label::Text(s) }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("axis must be 0 (per column) or 1 (per row), got {0}")]
pub struct AxisError(pub i64);

/// The direction a table is reduced along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One sum per row, across all columns (pandas `axis=1`).
    #[default]
    Row,
    /// One sum per column, down all rows (pandas `axis=0`).
    Column,
}

impl Axis {
    /// Maps the integer axis convention used by dataframe libraries.
    pub fn from_pandas(axis: i64) -> Result<Self, AxisError> {
        match axis {
            0 => Ok(Axis::Column),
            1 => Ok(Axis::Row),
            other => Err(AxisError(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}
