use chrono::Datelike;

use crate::consts::MAX_YEAR;

/// Source of the current calendar year, used when the year segment is zero.
pub trait Clock {
    fn current_year(&self) -> u16;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> u16 {
        let year = chrono::Local::now().year();
        u16::try_from(year.clamp(1, i32::from(MAX_YEAR))).unwrap_or(MAX_YEAR)
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u16);

impl Clock for FixedClock {
    fn current_year(&self) -> u16 {
        self.0
    }
}
