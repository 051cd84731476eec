//! The central validator that runs a batch of checks and reports every failure.
use super::error::ValidationError;
use super::rules::dates::{self, Clock, SystemClock};
use super::rules::{nulls, sums};
use crate::config::{CheckPlan, DateOptions, SumOptions};
use crate::store::{Label, Table};
use tracing::debug;

enum Check<'a> {
    Sum { table: &'a Table, opts: SumOptions },
    Date { index: &'a [Label], date: Option<Label>, opts: DateOptions },
    NullAlignment { a: &'a Table, b: &'a Table },
}

/// A batch of checks over borrowed tables.
///
/// Each check is fail-fast on its own, but `validate` runs all of them so a
/// caller sees every broken table at once rather than only the first.
pub struct Validator<'a, C: Clock = SystemClock> {
    checks: Vec<Check<'a>>,
    plan: CheckPlan,
    clock: C,
}

impl<'a> Validator<'a, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<'a> Default for Validator<'a, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: Clock> Validator<'a, C> {
    /// Creates a validator whose default dates are resolved against `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { checks: Vec::new(), plan: CheckPlan::default(), clock }
    }

    /// Supplies the options used by [`Self::sum`] and [`Self::date`].
    pub fn with_plan(mut self, plan: CheckPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn sum(mut self, table: &'a Table) -> Self {
        let opts = self.plan.sum.clone().unwrap_or_default();
        self.checks.push(Check::Sum { table, opts });
        self
    }

    pub fn sum_with(mut self, table: &'a Table, opts: SumOptions) -> Self {
        self.checks.push(Check::Sum { table, opts });
        self
    }

    pub fn date(mut self, index: &'a [Label], date: Option<Label>) -> Self {
        let opts = self.plan.date.clone().unwrap_or_default();
        self.checks.push(Check::Date { index, date, opts });
        self
    }

    pub fn null_alignment(mut self, a: &'a Table, b: &'a Table) -> Self {
        self.checks.push(Check::NullAlignment { a, b });
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Executes all registered checks.
    ///
    /// # Returns
    /// - `Ok(())` if every check passes.
    /// - `Err(Vec<ValidationError>)` with one entry per failed check, in
    ///   registration order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        debug!(checks = self.checks.len(), "running validator");

        let errors: Vec<ValidationError> = self
            .checks
            .iter()
            .filter_map(|check| {
                let result = match check {
                    Check::Sum { table, opts } => sums::check_sum(table, opts),
                    Check::Date { index, date, opts } => {
                        dates::check_date(index, date.clone(), opts, &self.clock)
                    }
                    Check::NullAlignment { a, b } => nulls::check_null_alignment(a, b),
                };
                result.err()
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Axis;
    use crate::validation::error::ValidationErrorType;
    use chrono::NaiveDate;
    use crate::validation::rules::dates::FixedClock;

    fn dates_index() -> Vec<Label> {
        (1..=5)
            .map(|d| Label::Date(NaiveDate::from_ymd_opt(2024, 1, d).unwrap()))
            .collect()
    }

    #[test]
    fn test_all_checks_pass() {
        let index = dates_index();
        let weights = Table::filled(index.clone(), ["A", "B"], Some(0.5)).unwrap();
        let signals = Table::filled(index.clone(), ["A", "B"], Some(-1.0)).unwrap();
        // Saturday -> Friday 2024-01-05.
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());

        let v = Validator::with_clock(clock)
            .sum(&weights)
            .date(&index, None)
            .null_alignment(&weights, &signals);
        assert_eq!(v.len(), 3);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_collects_every_failure() {
        let index = dates_index();
        let bad_weights = Table::filled(index.clone(), ["A", "B"], Some(0.4)).unwrap();
        let other = Table::filled(index[..4].to_vec(), ["A", "B"], Some(0.5)).unwrap();
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        let errors = Validator::with_clock(clock)
            .sum(&bad_weights)
            .date(&index, None)
            .null_alignment(&bad_weights, &other)
            .validate()
            .unwrap_err();

        let kinds: Vec<_> = errors.iter().map(|e| e.error_type()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorType::SumMismatch,
                ValidationErrorType::DateMissing,
                ValidationErrorType::LabelMismatch,
            ]
        );
    }

    #[test]
    fn test_plan_options_apply() {
        let index = dates_index();
        let per_column = Table::new(index.clone())
            .with_column("A", vec![Some(0.2); 5])
            .unwrap();
        let plan = CheckPlan::from_json(r#"{"sum": {"axis": "column"}, "date": {"as_string": true}}"#).unwrap();
        let text_index: Vec<Label> = index.iter().map(Label::to_text).collect();

        let v = Validator::new()
            .with_plan(plan)
            .sum(&per_column)
            .date(&text_index, Some(index[2].clone()));
        assert!(v.validate().is_ok());

        let row_wise = Validator::new().sum_with(&per_column, SumOptions::default().axis(Axis::Row));
        // One failed check, reported once.
        assert_eq!(row_wise.validate().unwrap_err().len(), 1);
    }

    #[test]
    fn test_empty_validator_passes() {
        let v = Validator::new();
        assert!(v.is_empty());
        assert!(v.validate().is_ok());
    }
}
