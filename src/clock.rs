//! Source of "today" for the streak and task trackers.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Calendar date of the process-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
