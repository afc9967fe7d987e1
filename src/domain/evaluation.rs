//! One calculation run: resolved inputs in, printable result out.

use std::fmt;

use chrono::NaiveDate;

use super::annualized::current_annualized_return;
use super::error::TargetReturnError;
use super::holding::HoldingPeriod;
use super::inputs::PositionInputs;
use super::target::target_price;

/// Outcome of the optional annualized-return report. An undefined rate never
/// suppresses the target price.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnualizedReturn {
    Rate(f64),
    Undefined(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub holding_days: i64,
    pub target_price: f64,
    pub annualized_return: Option<AnnualizedReturn>,
}

pub fn evaluate(
    inputs: &PositionInputs,
    as_of: NaiveDate,
) -> Result<Evaluation, TargetReturnError> {
    let period = HoldingPeriod::new(inputs.purchase_date, as_of);
    tracing::debug!(
        purchase_date = %inputs.purchase_date,
        %as_of,
        risk_free_rate = inputs.risk_free_rate,
        cost_basis = inputs.cost_basis,
        side = ?inputs.side,
        "evaluating position"
    );

    let target = target_price(
        &period,
        inputs.risk_free_rate,
        inputs.cost_basis,
        inputs.model,
        inputs.side,
    )?;

    let annualized_return = inputs.current_price.map(|price| {
        match current_annualized_return(&period, price, inputs.cost_basis, inputs.side) {
            Ok(rate) => AnnualizedReturn::Rate(rate),
            Err(TargetReturnError::UndefinedResult { reason }) => {
                tracing::warn!(%reason, "annualized return is undefined");
                AnnualizedReturn::Undefined(reason)
            }
            Err(e) => AnnualizedReturn::Undefined(e.to_string()),
        }
    });

    Ok(Evaluation {
        holding_days: period.days(),
        target_price: target,
        annualized_return,
    })
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Price of asset needed to close position/take profit: {:.2}",
            self.target_price
        )?;
        match &self.annualized_return {
            Some(AnnualizedReturn::Rate(r)) => {
                writeln!(f, "Current annualized return: {:.2}%", r * 100.0)?
            }
            Some(AnnualizedReturn::Undefined(reason)) => {
                writeln!(f, "Current annualized return: undefined ({reason})")?
            }
            None => {}
        }
        writeln!(f)
    }
}
