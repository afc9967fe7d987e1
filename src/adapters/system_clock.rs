//! Wall-clock adapter for [`ClockPort`].

use crate::ports::clock_port::ClockPort;
use chrono::{Local, NaiveDate};

/// Reads the local date at each call. The time of day is dropped so holding
/// periods are counted in whole calendar days.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
