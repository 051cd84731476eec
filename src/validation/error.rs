//! Defines the error types for the validation module.
use crate::store::{Axis, Label};
use std::fmt;
use thiserror::Error;

/// The specific category of a validation error.
///
// Lets callers branch on the failure without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    SumMismatch,
    DateMissing,
    LabelMismatch,
    NullMismatch,
}

/// Which of the two compared tables held the unexpected missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// A failed check. Every variant carries the offending value or position.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("failed sum test on {axis} '{label}': value should be {target} but sum equals {actual}")]
    SumMismatch { axis: Axis, label: Label, target: f64, actual: f64 },

    #[error("{date} is not in the index")]
    DateNotInIndex { date: Label },

    #[error("Columns and indexes are different: {detail}")]
    LabelMismatch { detail: String },

    #[error(
        "Element in {missing_in} is null at (row '{row}', column '{column}'), but corresponding element in {} is not",
        .missing_in.other()
    )]
    NullMismatch { row: Label, column: String, missing_in: Side },
}

impl ValidationError {
    pub fn error_type(&self) -> ValidationErrorType {
        match self {
            ValidationError::SumMismatch { .. } => ValidationErrorType::SumMismatch,
            ValidationError::DateNotInIndex { .. } => ValidationErrorType::DateMissing,
            ValidationError::LabelMismatch { .. } => ValidationErrorType::LabelMismatch,
            ValidationError::NullMismatch { .. } => ValidationErrorType::NullMismatch,
        }
    }
}
