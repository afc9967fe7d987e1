//! Source of the evaluation date.

use chrono::NaiveDate;

pub trait ClockPort {
    /// Current calendar date, truncated to midnight.
    fn today(&self) -> NaiveDate;
}
