//! Rule for date membership in a row index (e.g. "did yesterday's prices land?").

use crate::config::DateOptions;
use crate::store::Label;
use crate::validation::error::ValidationError;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use tracing::{debug, warn};

/// Source of "today" for the default-date behaviour.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Monday to Friday. No holiday calendar is applied.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The latest business day strictly before `date`.
///
/// Saturates at `NaiveDate::MIN` when the calendar has no earlier weekday.
pub fn previous_business_day(date: NaiveDate) -> NaiveDate {
    let back = match date.weekday() {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    };
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// Checks that `date` (default: the previous business day per `clock`) is in `index`.
///
/// With `opts.as_string` the date is compared by its canonical text form,
/// which is what an index of `"YYYY-MM-DD"` strings needs.
pub fn check_date(
    index: &[Label],
    date: Option<Label>,
    opts: &DateOptions,
    clock: &impl Clock,
) -> Result<(), ValidationError> {
    let date = date.unwrap_or_else(|| Label::Date(previous_business_day(clock.today())));
    let date = if opts.as_string { date.to_text() } else { date };

    debug!(%date, index_len = index.len(), as_string = opts.as_string, "running date check");

    if index.contains(&date) {
        Ok(())
    } else {
        warn!(%date, "date not found in index");
        Err(ValidationError::DateNotInIndex { date })
    }
}

/// [`check_date`] against the host's current date.
pub fn check_date_today(
    index: &[Label],
    date: Option<Label>,
    opts: &DateOptions,
) -> Result<(), ValidationError> {
    check_date(index, date, opts, &SystemClock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Ten consecutive weekdays starting Monday 2024-01-01.
    fn weekdays() -> Vec<Label> {
        let mut out = Vec::new();
        let mut d = ymd(2024, 1, 1);
        while out.len() < 10 {
            if is_business_day(d) {
                out.push(Label::Date(d));
            }
            d = d.succ_opt().unwrap();
        }
        out
    }

    #[rstest]
    #[case(ymd(2024, 1, 9), ymd(2024, 1, 8))] // Tue -> Mon
    #[case(ymd(2024, 1, 8), ymd(2024, 1, 5))] // Mon -> Fri
    #[case(ymd(2024, 1, 7), ymd(2024, 1, 5))] // Sun -> Fri
    #[case(ymd(2024, 1, 6), ymd(2024, 1, 5))] // Sat -> Fri
    #[case(ymd(2024, 1, 5), ymd(2024, 1, 4))] // Fri -> Thu
    #[case(ymd(2024, 3, 1), ymd(2024, 2, 29))] // across a leap day
    fn test_previous_business_day(#[case] today: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(previous_business_day(today), expected);
        assert!(is_business_day(expected));
    }

    #[test]
    fn test_explicit_date_membership() {
        let index = weekdays();
        let clock = FixedClock(ymd(2024, 6, 1));
        let day5 = index[4].clone();
        assert!(check_date(&index, Some(day5), &DateOptions::default(), &clock).is_ok());

        let absent = Label::Date(ymd(2024, 1, 6)); // a Saturday
        let err = check_date(&index, Some(absent.clone()), &DateOptions::default(), &clock).unwrap_err();
        assert_eq!(err, ValidationError::DateNotInIndex { date: absent });
        assert_eq!(err.to_string(), "2024-01-06 is not in the index");
    }

    #[test]
    fn test_default_date_is_previous_business_day() {
        let index = weekdays();
        // Saturday 2024-01-13: previous business day is Friday 2024-01-12, the last entry.
        let clock = FixedClock(ymd(2024, 1, 13));
        assert!(check_date(&index, None, &DateOptions::default(), &clock).is_ok());

        // Wednesday 2024-01-17 needs Tuesday 2024-01-16, which is not present.
        let clock = FixedClock(ymd(2024, 1, 17));
        let err = check_date(&index, None, &DateOptions::default(), &clock).unwrap_err();
        assert_eq!(err, ValidationError::DateNotInIndex { date: Label::Date(ymd(2024, 1, 16)) });
    }

    #[test]
    fn test_default_matches_explicit() {
        let index = weekdays();
        let clock = FixedClock(ymd(2024, 1, 10));
        let explicit = Some(Label::Date(previous_business_day(clock.today())));
        assert_eq!(
            check_date(&index, None, &DateOptions::default(), &clock),
            check_date(&index, explicit, &DateOptions::default(), &clock),
        );
    }

    #[test]
    fn test_as_string_against_text_index() {
        let index: Vec<Label> = weekdays().iter().map(Label::to_text).collect();
        let clock = FixedClock(ymd(2024, 1, 9));
        let as_string = DateOptions { as_string: true };

        assert!(check_date(&index, None, &as_string, &clock).is_ok());
        assert!(check_date(&index, Some(Label::Date(ymd(2024, 1, 3))), &as_string, &clock).is_ok());

        // Without conversion the date label never equals a text label.
        assert!(check_date(&index, None, &DateOptions::default(), &clock).is_err());
    }

    #[test]
    fn test_previous_business_day_at_calendar_start() {
        for offset in 0..4 {
            let date = NaiveDate::MIN + Days::new(offset);
            assert!(previous_business_day(date) <= date);
        }
        assert_eq!(previous_business_day(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_text_index_reloaded_from_json() {
        let index = vec![Label::Text("2024-01-02".into())];
        let reloaded: Vec<Label> = serde_json::from_str(&serde_json::to_string(&index).unwrap()).unwrap();
        let clock = FixedClock(ymd(2024, 1, 3));
        let as_string = DateOptions { as_string: true };

        assert!(check_date(&index, None, &as_string, &clock).is_ok());
        assert!(check_date(&reloaded, None, &as_string, &clock).is_ok());
    }

    #[test]
    fn test_system_clock_is_a_calendar_date() {
        let today = SystemClock.today();
        assert!(previous_business_day(today) < today);
    }
}
