//! Annualized return an open position has earned so far.

use super::error::TargetReturnError;
use super::holding::{HoldingPeriod, MEAN_DAYS_PER_YEAR};
use super::target::Side;

/// `((gain + cost) / cost) ^ (365.24 / days) - 1`, where gain is signed by side.
pub fn current_annualized_return(
    period: &HoldingPeriod,
    current_price: f64,
    cost_basis: f64,
    side: Side,
) -> Result<f64, TargetReturnError> {
    let days = period.days();
    if days <= 0 {
        return Err(TargetReturnError::UndefinedResult {
            reason: format!("cannot annualize over a holding period of {days} days"),
        });
    }

    let total_return = match side {
        Side::Long => current_price - cost_basis,
        Side::Short => cost_basis - current_price,
    };
    let annualized =
        ((total_return + cost_basis) / cost_basis).powf(MEAN_DAYS_PER_YEAR / days as f64) - 1.0;
    tracing::debug!(days, total_return, annualized, "computed annualized return");

    if !annualized.is_finite() {
        return Err(TargetReturnError::UndefinedResult {
            reason: format!(
                "annualized return of price {current_price} against cost basis {cost_basis} is not finite"
            ),
        });
    }
    Ok(annualized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn held_for(days: u64) -> HoldingPeriod {
        let purchase = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        HoldingPeriod::new(purchase, purchase + Days::new(days))
    }

    #[test]
    fn flat_price_is_zero_return() {
        let r = current_annualized_return(&held_for(100), 50.0, 50.0, Side::Long).unwrap();
        assert!(r.abs() < 1e-12);
    }

    #[test]
    fn doubling_over_two_mean_years() {
        let period = HoldingPeriod::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(730),
        );
        let r = current_annualized_return(&period, 200.0, 100.0, Side::Long).unwrap();
        let expected = 2.0_f64.powf(365.24 / 730.0) - 1.0;
        assert!((r - expected).abs() < 1e-12);
    }

    #[test]
    fn short_gains_when_price_falls() {
        let long = current_annualized_return(&held_for(365), 90.0, 100.0, Side::Long).unwrap();
        let short = current_annualized_return(&held_for(365), 90.0, 100.0, Side::Short).unwrap();
        assert!(long < 0.0);
        assert!(short > 0.0);
    }

    #[test]
    fn zero_days_is_undefined() {
        let err = current_annualized_return(&held_for(0), 110.0, 100.0, Side::Long).unwrap_err();
        assert!(matches!(err, TargetReturnError::UndefinedResult { .. }));
    }

    #[test]
    fn zero_cost_basis_is_undefined() {
        let err = current_annualized_return(&held_for(30), 10.0, 0.0, Side::Long).unwrap_err();
        assert!(matches!(err, TargetReturnError::UndefinedResult { .. }));
    }
}
