// FFI Facade: exposes the checks to Python test suites as the `_checks` module.
// Tables cross the boundary as an index list plus an ordered
// `{column: [float | None]}` dict; failures surface as `AssertionError`.

use super::labels::{self, LabelError, PyLabel};
use crate::config::{DateOptions, SumOptions};
use crate::store::{Axis, Cell, Label, Table};
use crate::validation::{self, SystemClock, ValidationError};
use chrono::{NaiveDate, NaiveDateTime};
use pyo3::exceptions::{PyAssertionError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDate, PyDateTime, PyDict, PyInt, PyString};

/// Classifies by most specific type first: `bool` before `int`, `datetime` before `date`.
fn classify(obj: &Bound<'_, PyAny>) -> PyResult<PyLabel> {
    if obj.is_instance_of::<PyBool>() {
        return Ok(PyLabel::Bool(obj.extract()?));
    }
    if obj.is_instance_of::<PyDateTime>() {
        // Timezone-aware values have no naive form; keep their str().
        return match obj.extract::<NaiveDateTime>() {
            Ok(dt) => Ok(PyLabel::DateTime(dt)),
            Err(_) => Ok(PyLabel::Text(obj.str()?.to_string())),
        };
    }
    if obj.is_instance_of::<PyDate>() {
        return Ok(PyLabel::Date(obj.extract()?));
    }
    if obj.is_instance_of::<PyInt>() {
        return Ok(PyLabel::Int(obj.extract()?));
    }
    if obj.is_instance_of::<PyString>() {
        return Ok(PyLabel::Text(obj.extract()?));
    }
    Err(PyTypeError::new_err(LabelError::Unsupported.to_string()))
}

fn to_label(obj: &Bound<'_, PyAny>) -> PyResult<Label> {
    labels::to_label(classify(obj)?).map_err(|e| PyTypeError::new_err(e.to_string()))
}

fn to_index(items: &[Bound<'_, PyAny>]) -> PyResult<Vec<Label>> {
    items.iter().map(to_label).collect()
}

fn to_table(index: &[Bound<'_, PyAny>], columns: &Bound<'_, PyDict>) -> PyResult<Table> {
    let mut table = Table::new(to_index(index)?);
    for (name, values) in columns.iter() {
        let name: String = name.extract()?;
        let values: Vec<Cell> = values.extract()?;
        table = table
            .with_column(name, values)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
    }
    Ok(table)
}

fn assertion(e: ValidationError) -> PyErr {
    PyAssertionError::new_err(e.to_string())
}

/// Returns True if every row (axis=1) or column (axis=0) sums to `target`.
#[pyfunction]
#[pyo3(signature = (index, columns, target=1.0, absolute=true, axis=1))]
fn check_df_sum<'py>(
    index: Vec<Bound<'py, PyAny>>,
    columns: &Bound<'py, PyDict>,
    target: f64,
    absolute: bool,
    axis: i64,
) -> PyResult<bool> {
    let axis = Axis::from_pandas(axis).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let table = to_table(&index, columns)?;
    let opts = SumOptions { target, absolute, axis, ..Default::default() };
    validation::check_sum(&table, &opts).map_err(assertion)?;
    Ok(true)
}

/// Returns True if `date` (default: previous business day) is in `idx`.
#[pyfunction]
#[pyo3(signature = (idx, date=None, string=false))]
fn check_date<'py>(
    idx: Vec<Bound<'py, PyAny>>,
    date: Option<Bound<'py, PyAny>>,
    string: bool,
) -> PyResult<bool> {
    let index = to_index(&idx)?;
    let date = date.as_ref().map(to_label).transpose()?;
    let opts = DateOptions { as_string: string };
    validation::check_date(&index, date, &opts, &SystemClock).map_err(assertion)?;
    Ok(true)
}

/// Returns True if both tables share labels and their missing cells coincide.
#[pyfunction]
fn df_value_comparison<'py>(
    a_index: Vec<Bound<'py, PyAny>>,
    a_columns: &Bound<'py, PyDict>,
    b_index: Vec<Bound<'py, PyAny>>,
    b_columns: &Bound<'py, PyDict>,
) -> PyResult<bool> {
    let a = to_table(&a_index, a_columns)?;
    let b = to_table(&b_index, b_columns)?;
    validation::check_null_alignment(&a, &b).map_err(assertion)?;
    Ok(true)
}

#[pyfunction]
fn previous_business_day(date: NaiveDate) -> NaiveDate {
    validation::previous_business_day(date)
}

// --- Module Definition ---
/// Defines the `_checks` Python module.
#[pymodule]
fn _checks(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check_df_sum, m)?)?;
    m.add_function(wrap_pyfunction!(check_date, m)?)?;
    m.add_function(wrap_pyfunction!(df_value_comparison, m)?)?;
    m.add_function(wrap_pyfunction!(previous_business_day, m)?)?;
    Ok(())
}
