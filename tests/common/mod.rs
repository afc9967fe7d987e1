#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use targetreturn::cli::Cli;
use targetreturn::ports::clock_port::ClockPort;

pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn on(y: i32, m: u32, d: u32) -> Self {
        Self(date(y, m, d))
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn parse_cli(args: &[&str]) -> Cli {
    use clap::Parser;
    Cli::try_parse_from(std::iter::once("targetreturn").chain(args.iter().copied())).unwrap()
}
