//! Input contract for a calculation.
//!
//! Values given on the command line win over the `[position]` section of an
//! optional config file. The purchase date, risk-free rate and cost basis have
//! no defaults: if neither source supplies one the calculation is rejected.

use chrono::NaiveDate;

use crate::domain::error::TargetReturnError;
use crate::domain::target::{ReturnModel, Side};
use crate::ports::config_port::ConfigPort;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const POSITION_SECTION: &str = "position";

#[derive(Debug, Clone, PartialEq)]
pub struct PositionInputs {
    pub purchase_date: NaiveDate,
    pub risk_free_rate: f64,
    pub cost_basis: f64,
    pub current_price: Option<f64>,
    pub side: Side,
    pub model: ReturnModel,
}

/// Values already type-coerced from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub purchase_date: Option<NaiveDate>,
    pub risk_free_rate: Option<f64>,
    pub cost_basis: Option<f64>,
    pub current_price: Option<f64>,
    pub short: bool,
    pub model: Option<ReturnModel>,
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD)"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> TargetReturnError {
    TargetReturnError::InvalidArgument {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn missing(field: &str) -> TargetReturnError {
    TargetReturnError::MissingArgument {
        field: field.to_string(),
    }
}

fn config_value(config: Option<&dyn ConfigPort>, key: &str) -> Option<String> {
    config
        .and_then(|c| c.get_string(POSITION_SECTION, key))
        .filter(|v| !v.trim().is_empty())
}

fn config_date(
    config: Option<&dyn ConfigPort>,
    key: &str,
) -> Result<Option<NaiveDate>, TargetReturnError> {
    config_value(config, key)
        .map(|raw| parse_date(&raw).map_err(|_| invalid(key, &raw, "expected YYYY-MM-DD")))
        .transpose()
}

fn config_f64(
    config: Option<&dyn ConfigPort>,
    key: &str,
) -> Result<Option<f64>, TargetReturnError> {
    config_value(config, key)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| invalid(key, &raw, "expected a floating point number"))
        })
        .transpose()
}

/// Merge command-line values with the config file and check that every
/// mandatory input is present.
pub fn resolve_inputs(
    overrides: &InputOverrides,
    config: Option<&dyn ConfigPort>,
) -> Result<PositionInputs, TargetReturnError> {
    let purchase_date = match overrides.purchase_date {
        Some(d) => d,
        None => {
            config_date(config, "purchase_date")?.ok_or_else(|| missing("purchase_date"))?
        }
    };
    let risk_free_rate = match overrides.risk_free_rate {
        Some(r) => r,
        None => {
            config_f64(config, "risk_free_rate")?.ok_or_else(|| missing("risk_free_rate"))?
        }
    };
    let cost_basis = match overrides.cost_basis {
        Some(c) => c,
        None => config_f64(config, "cost_basis")?.ok_or_else(|| missing("cost_basis"))?,
    };
    let current_price = match overrides.current_price {
        Some(p) => Some(p),
        None => config_f64(config, "current_price")?,
    };

    let short = if overrides.short {
        true
    } else {
        match config_value(config, "short") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| invalid("short", &raw, "expected true or false"))?,
            None => false,
        }
    };
    let side = if short { Side::Short } else { Side::Long };

    let model = match overrides.model {
        Some(m) => m,
        None => match config_value(config, "model") {
            Some(raw) => raw
                .parse::<ReturnModel>()
                .map_err(|reason| invalid("model", &raw, reason))?,
            None => ReturnModel::default(),
        },
    };

    Ok(PositionInputs {
        purchase_date,
        risk_free_rate,
        cost_basis,
        current_price,
        side,
        model,
    })
}
