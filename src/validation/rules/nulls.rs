//! Rule for label equality and missing-value alignment between two tables.
//!
//! Typical use: a signal table derived from a price table must have a value
//! exactly where the prices do, i.e. `f(A) = B` preserves the gaps.

use crate::store::{is_missing, Table};
use crate::validation::error::{Side, ValidationError};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, warn};

/// Describes the labels present on only one side, or `None` if the sets agree.
///
/// When a label on one side prints the same as a label on the other, every
/// label is rendered with `qualified` so the two can be told apart.
fn set_difference<T, F>(kind: &str, a: &HashSet<T>, b: &HashSet<T>, qualified: F) -> Option<String>
where
    T: Eq + Hash + Display + Ord,
    F: Fn(&T) -> String,
{
    if a == b {
        return None;
    }
    let mut only_a: Vec<&T> = a.difference(b).collect();
    let mut only_b: Vec<&T> = b.difference(a).collect();
    only_a.sort();
    only_b.sort();

    let printed_a: HashSet<String> = only_a.iter().map(|l| l.to_string()).collect();
    let clash = only_b.iter().any(|l| printed_a.contains(&l.to_string()));

    let render = |labels: &[&T]| {
        labels
            .iter()
            .map(|l| if clash { qualified(*l) } else { format!("'{}'", l) })
            .collect::<Vec<_>>()
            .join(", ")
    };
    Some(format!("{} only in A: [{}]; only in B: [{}]", kind, render(&only_a[..]), render(&only_b[..])))
}

/// Checks that `a` and `b` share row and column labels and that a cell is
/// missing in `a` exactly when it is missing in `b`.
///
/// Label order may differ; cells are matched by label. Values themselves
/// are never compared.
pub fn check_null_alignment(a: &Table, b: &Table) -> Result<(), ValidationError> {
    debug!(rows = a.n_rows(), cols = a.n_cols(), "running null alignment check");

    let mismatches: Vec<String> = [
        set_difference("columns", &a.column_set(), &b.column_set(), |c| format!("'{}'", c)),
        set_difference("rows", &a.row_set(), &b.row_set(), |l| format!("{} '{}'", l.kind(), l)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !mismatches.is_empty() {
        let detail = mismatches.join("; ");
        warn!(%detail, "label sets differ");
        return Err(ValidationError::LabelMismatch { detail });
    }

    let b_rows = b.row_lookup();

    for col_a in a.columns() {
        // Both lookups are guaranteed by the label check above.
        let Some(col_b) = b.column(&col_a.name) else { continue };

        for (pos_a, row) in a.index().iter().enumerate() {
            let Some(&pos_b) = b_rows.get(row) else { continue };

            let missing_in = match (is_missing(col_a.values[pos_a]), is_missing(col_b.values[pos_b])) {
                (true, false) => Side::A,
                (false, true) => Side::B,
                _ => continue,
            };

            warn!(%row, column = %col_a.name, %missing_in, "null positions differ");
            return Err(ValidationError::NullMismatch {
                row: row.clone(),
                column: col_a.name.clone(),
                missing_in,
            });
        }
    }

    debug!("null alignment check passed");
    Ok(())
}
