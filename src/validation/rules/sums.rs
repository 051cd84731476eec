//! Rule for aggregate sums along an axis (e.g. portfolio weights summing to 1).

use crate::config::{SumOptions, MAX_DECIMALS};
use crate::store::{is_missing, Axis, Cell, Label, Table};
use crate::validation::error::ValidationError;
use tracing::{debug, warn};

/// Rounds to `decimals` places, capped at [`MAX_DECIMALS`]. Values too large
/// to scale already have no fractional digits left and pass through.
#[inline]
fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = x * scale;
    if scaled.is_finite() { scaled.round() / scale } else { x }
}

/// Sums the non-missing cells, optionally by magnitude. All-missing sums to 0.
fn reduce<'a>(cells: impl Iterator<Item = &'a Cell>, absolute: bool) -> f64 {
    cells
        .filter(|c| !is_missing(**c))
        .filter_map(|c| *c)
        .map(|v| if absolute { v.abs() } else { v })
        .sum()
}

/// Checks that every row (or column) of `table` sums to `opts.target`.
///
/// Each sum is rounded to `opts.decimals` places before it is compared with
/// the equally rounded target. The first offending row or column fails the
/// check. A table without cells passes trivially.
pub fn check_sum(table: &Table, opts: &SumOptions) -> Result<(), ValidationError> {
    debug!(
        rows = table.n_rows(),
        cols = table.n_cols(),
        target = opts.target,
        absolute = opts.absolute,
        axis = %opts.axis,
        "running sum check"
    );

    if table.is_empty() {
        return Ok(());
    }

    let expected = round_to(opts.target, opts.decimals);
    let check = |label: Label, total: f64| {
        let actual = round_to(total, opts.decimals);
        if actual == expected {
            Ok(())
        } else {
            warn!(axis = %opts.axis, %label, actual, expected, "sum check failed");
            Err(ValidationError::SumMismatch { axis: opts.axis, label, target: opts.target, actual })
        }
    };

    match opts.axis {
        Axis::Row => {
            for (pos, label) in table.index().iter().enumerate() {
                let total = reduce(table.columns().iter().map(|c| &c.values[pos]), opts.absolute);
                check(label.clone(), total)?;
            }
        }
        Axis::Column => {
            for col in table.columns() {
                let total = reduce(col.values.iter(), opts.absolute);
                check(Label::Text(col.name.clone()), total)?;
            }
        }
    }

    debug!("sum check passed");
    Ok(())
}
