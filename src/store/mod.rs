//! Core data structures: labels, cells and the in-memory table.
pub mod table;
pub mod types;

pub use table::{Column, Table, TableError};
pub use types::{is_missing, Axis, AxisError, Cell, Label};
