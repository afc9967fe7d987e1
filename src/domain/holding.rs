//! Holding period between purchase and evaluation.

use chrono::NaiveDate;

/// Calendar days per year used by the simple-interest daily rate.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Mean calendar year length used when annualizing with compounding.
pub const MEAN_DAYS_PER_YEAR: f64 = 365.24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldingPeriod {
    pub purchase_date: NaiveDate,
    pub as_of: NaiveDate,
}

impl HoldingPeriod {
    pub fn new(purchase_date: NaiveDate, as_of: NaiveDate) -> Self {
        Self {
            purchase_date,
            as_of,
        }
    }

    /// Whole days elapsed. Negative when the purchase date is after `as_of`.
    pub fn days(&self) -> i64 {
        (self.as_of - self.purchase_date).num_days()
    }

    pub fn years(&self) -> f64 {
        self.days() as f64 / MEAN_DAYS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_year_is_365_days() {
        let period = HoldingPeriod::new(date(2023, 1, 1), date(2024, 1, 1));
        assert_eq!(period.days(), 365);
    }

    #[test]
    fn leap_year_is_366_days() {
        let period = HoldingPeriod::new(date(2024, 1, 1), date(2025, 1, 1));
        assert_eq!(period.days(), 366);
    }

    #[test]
    fn same_day_is_zero() {
        let period = HoldingPeriod::new(date(2024, 6, 15), date(2024, 6, 15));
        assert_eq!(period.days(), 0);
        assert_eq!(period.years(), 0.0);
    }

    #[test]
    fn future_purchase_is_negative() {
        let period = HoldingPeriod::new(date(2024, 7, 1), date(2024, 6, 1));
        assert_eq!(period.days(), -30);
    }

    #[test]
    fn years_uses_mean_year_length() {
        let period = HoldingPeriod::new(date(2020, 1, 1), date(2020, 1, 1) + chrono::Days::new(3652));
        assert!((period.years() - 3652.0 / 365.24).abs() < 1e-12);
    }
}
