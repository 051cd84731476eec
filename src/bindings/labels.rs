//! Index labels as they arrive from Python, and how each becomes a [`Label`].
//!
//! `datetime` is a subclass of `date`, and `bool` of `int`, so the caller
//! classifies the most specific type first and this module decides what
//! each kind maps to.
#![cfg_attr(not(feature = "python"), allow(dead_code))]

use crate::store::Label;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum LabelError {
    #[error("bool index labels are not supported, got {0}")]
    Bool(bool),
    #[error("index labels must be date, datetime, int or str")]
    Unsupported,
}

/// A Python index entry, classified by its most specific type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PyLabel {
    Bool(bool),
    /// A naive `datetime` (or pandas `Timestamp`).
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Int(i64),
    /// A `str`, or the `str()` of a timezone-aware datetime.
    Text(String),
}

/// Python's `str(datetime)`: microseconds only when non-zero.
fn python_datetime_str(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%d %H:%M:%S").to_string();
    match dt.nanosecond() / 1_000 {
        0 => base,
        micros => format!("{}.{:06}", base, micros),
    }
}

/// Datetimes keep their time of day as text, so they are never collapsed
/// onto the calendar date they fall on.
pub(crate) fn to_label(value: PyLabel) -> Result<Label, LabelError> {
    match value {
        PyLabel::Bool(b) => Err(LabelError::Bool(b)),
        PyLabel::DateTime(dt) => Ok(Label::Text(python_datetime_str(&dt))),
        PyLabel::Date(d) => Ok(Label::Date(d)),
        PyLabel::Int(i) => Ok(Label::Int(i)),
        PyLabel::Text(s) => Ok(Label::Text(s)),
    }
}
