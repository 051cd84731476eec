//! Validation helpers for labelled numeric tables.
//!
//! Three independent checks, each a pure pass over borrowed data:
//! - [`check_sum`]: every row or column sums to a target.
//! - [`check_date`]: a date (default: the previous business day) is in an index.
//! - [`check_null_alignment`]: two tables share labels and their gaps coincide.
//!
//! A failed check returns a [`ValidationError`] naming the offending value.

pub mod config;
pub mod store;
pub mod validation;

mod bindings;

pub use config::{CheckPlan, DateOptions, SumOptions, MAX_DECIMALS};
pub use store::{is_missing, Axis, AxisError, Cell, Column, Label, Table, TableError};
pub use validation::{
    check_date, check_date_today, check_null_alignment, check_sum, previous_business_day, Clock,
    FixedClock, SystemClock, ValidationError, ValidationErrorType, Validator,
};
