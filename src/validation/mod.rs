//! Assertion-style checks over in-memory tables.
//!
//! Each rule is a pure, single-pass function returning `Ok(())` or the first
//! `ValidationError` it finds. The `Validator` batches several rules and
//! collects every failure.

// Publicly export the primary components for use by other modules.
pub use self::error::{Side, ValidationError, ValidationErrorType};
pub use self::rules::dates::{
    check_date, check_date_today, is_business_day, previous_business_day, Clock, FixedClock, SystemClock,
};
pub use self::rules::nulls::check_null_alignment;
pub use self::rules::sums::check_sum;
pub use self::validator::Validator;

// --- MODULE DECLARATIONS ---
mod error;
mod validator;
pub mod rules {
    pub mod dates;
    pub mod nulls;
    pub mod sums;
}
