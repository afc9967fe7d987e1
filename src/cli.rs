//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::system_clock::SystemClock;
use crate::domain::error::TargetReturnError;
use crate::domain::evaluation::{evaluate, Evaluation};
use crate::domain::inputs::{parse_date, resolve_inputs, InputOverrides};
use crate::domain::target::ReturnModel;
use crate::ports::clock_port::ClockPort;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(
    name = "targetreturn",
    version,
    about = "Calculate the minimal sale price that matches an annualized risk-free return \
             over the time an asset has been held"
)]
pub struct Cli {
    /// Purchase date of the asset, YYYY-MM-DD
    #[arg(short = 'd', long = "purchase_date", value_parser = parse_date)]
    pub purchase_date: Option<NaiveDate>,

    /// Annual risk-free rate as a decimal fraction, e.g. .03
    #[arg(short = 'r', long = "risk_free_rate", allow_negative_numbers = true)]
    pub risk_free_rate: Option<f64>,

    /// Cost basis of the asset
    #[arg(short = 'c', long = "cost_basis", allow_negative_numbers = true)]
    pub cost_basis: Option<f64>,

    /// Current price; also report the annualized return earned so far
    #[arg(short = 'p', long = "current_price", allow_negative_numbers = true)]
    pub current_price: Option<f64>,

    /// Treat the position as a short sale
    #[arg(long)]
    pub short: bool,

    /// Growth model: simple or compound
    #[arg(short = 'm', long)]
    pub model: Option<ReturnModel>,

    /// INI file with a [position] section supplying any of the values above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            purchase_date: self.purchase_date,
            risk_free_rate: self.risk_free_rate,
            cost_basis: self.cost_basis,
            current_price: self.current_price,
            short: self.short,
            model: self.model,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    run_with_clock(&cli, &SystemClock, &mut io::stdout().lock())
}

/// Resolve, evaluate and print. Errors go to stderr and become the exit code.
pub fn run_with_clock(cli: &Cli, clock: &dyn ClockPort, out: &mut dyn Write) -> ExitCode {
    let evaluation = match calculate(cli, clock) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match write!(out, "{evaluation}").and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to write result: {e}");
            ExitCode::from(1)
        }
    }
}

pub fn calculate(cli: &Cli, clock: &dyn ClockPort) -> Result<Evaluation, TargetReturnError> {
    let config = cli
        .config
        .as_ref()
        .map(FileConfigAdapter::from_file)
        .transpose()?;
    let inputs = resolve_inputs(
        &cli.overrides(),
        config.as_ref().map(|c| c as &dyn ConfigPort),
    )?;
    evaluate(&inputs, clock.today())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout only carries the result.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(verbose > 1)
        .try_init();
}
