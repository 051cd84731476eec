//! In-memory labelled table: a row index plus named columns of cells.
use super::types::{Cell, Label};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("column '{column}' has {column_len} values but the index has {index_len} rows")]
    LengthMismatch { column: String, index_len: usize, column_len: usize },
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}

/// A named column; `values[i]` belongs to row `index[i]` of its table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

/// Wire shape used for deserialisation before the invariants are checked.
#[derive(Deserialize)]
struct RawTable {
    index: Vec<Label>,
    #[serde(default)]
    columns: Vec<Column>,
}

/// An ordered set of named columns sharing one row index.
///
/// Every column holds exactly one cell per index entry and column names are
/// unique; all constructors (including deserialisation) enforce both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    index: Vec<Label>,
    columns: Vec<Column>,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Table::from_columns(raw.index, raw.columns)
    }
}

impl Table {
    /// A table with the given row index and no columns.
    pub fn new(index: Vec<Label>) -> Self {
        Self { index, columns: Vec::new() }
    }

    /// Builds a table from whole columns, checking each one like [`Self::with_column`].
    pub fn from_columns(index: Vec<Label>, columns: Vec<Column>) -> Result<Self, TableError> {
        columns
            .into_iter()
            .try_fold(Self::new(index), |table, col| table.with_column(col.name, col.values))
    }

    /// Builds a table where every cell holds `value`.
    pub fn filled<S: Into<String>>(
        index: Vec<Label>,
        names: impl IntoIterator<Item = S>,
        value: Cell,
    ) -> Result<Self, TableError> {
        let rows = index.len();
        names
            .into_iter()
            .try_fold(Self::new(index), |table, name| table.with_column(name, vec![value; rows]))
    }

    /// Appends a column, rejecting duplicates and length mismatches.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Cell>) -> Result<Self, TableError> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(TableError::LengthMismatch {
                column: name,
                index_len: self.index.len(),
                column_len: values.len(),
            });
        }
        if self.column(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Row labels in table order.
    pub fn index(&self) -> &[Label] { &self.index }
    /// Columns in insertion order.
    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn n_rows(&self) -> usize { self.index.len() }
    pub fn n_cols(&self) -> usize { self.columns.len() }

    /// True when there is no cell at all (no rows or no columns).
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Looks a column up by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Position of the first row carrying `label`.
    pub fn position_of_row(&self, label: &Label) -> Option<usize> {
        self.index.iter().position(|l| l == label)
    }

    /// The cell at (`row`, `column`), or `None` if either label is unknown.
    pub fn cell(&self, row: &Label, column: &str) -> Option<Cell> {
        let pos = self.position_of_row(row)?;
        self.column(column).map(|c| c.values[pos])
    }

    /// Label -> row position, for repeated lookups. First occurrence wins.
    pub(crate) fn row_lookup(&self) -> HashMap<&Label, usize> {
        let mut lookup = HashMap::with_capacity(self.index.len());
        for (pos, label) in self.index.iter().enumerate() {
            lookup.entry(label).or_insert(pos);
        }
        lookup
    }

    pub(crate) fn row_set(&self) -> HashSet<&Label> {
        self.index.iter().collect()
    }

    pub(crate) fn column_set(&self) -> HashSet<&str> {
        self.column_names().collect()
    }
}
