//! Target sale price needed to match a risk-free benchmark.
//!
//! The default [`ReturnModel::Simple`] applies the annual rate linearly over
//! the holding period:
//!
//! ```text
//! target = (days * (rate / 365.0) + 1) * cost_basis
//! ```
//!
//! [`ReturnModel::Compound`] compounds once per mean year instead:
//!
//! ```text
//! target = (1 + rate) ^ (days / 365.24) * cost_basis
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::TargetReturnError;
use super::holding::{DAYS_PER_YEAR, HoldingPeriod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnModel {
    #[default]
    Simple,
    Compound,
}

impl FromStr for ReturnModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ReturnModel::Simple),
            "compound" => Ok(ReturnModel::Compound),
            other => Err(format!("unknown model '{other}' (expected simple or compound)")),
        }
    }
}

impl fmt::Display for ReturnModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnModel::Simple => write!(f, "simple"),
            ReturnModel::Compound => write!(f, "compound"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Long,
    Short,
}

/// Growth factor under the simple-interest model. Never fails.
pub fn simple_growth_factor(days: i64, risk_free_rate: f64) -> f64 {
    let daily_rate = risk_free_rate / DAYS_PER_YEAR;
    days as f64 * daily_rate + 1.0
}

pub fn compound_growth_factor(period: &HoldingPeriod, risk_free_rate: f64) -> f64 {
    (risk_free_rate + 1.0).powf(period.years())
}

/// Minimum price at which closing the position matches the benchmark rate.
pub fn target_price(
    period: &HoldingPeriod,
    risk_free_rate: f64,
    cost_basis: f64,
    model: ReturnModel,
    side: Side,
) -> Result<f64, TargetReturnError> {
    let growth = match model {
        ReturnModel::Simple => simple_growth_factor(period.days(), risk_free_rate),
        ReturnModel::Compound => compound_growth_factor(period, risk_free_rate),
    };
    let base = growth * cost_basis;
    tracing::debug!(
        days = period.days(),
        %model,
        growth,
        base,
        "computed base target"
    );

    // The simple model passes through whatever the inputs produce.
    if model == ReturnModel::Compound && base.is_nan() {
        return Err(TargetReturnError::UndefinedResult {
            reason: format!(
                "{model} growth of rate {risk_free_rate} over {} days is not a number",
                period.days()
            ),
        });
    }

    Ok(match side {
        Side::Long => base,
        Side::Short => 2.0 * cost_basis - base,
    })
}
