//! Source of the reference instant used for date comparisons.
//!
//! Classification never reads the system clock itself. Commands ask a [`Clock`]
//! for `now` once and pass it down, so a single invocation sees one consistent
//! instant and tests can pin it with [`FixedClock`].

use chrono::{Local, NaiveDateTime};

/// Supplies the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
