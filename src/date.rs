use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use chrono::{Datelike, Days, NaiveDate};
use std::str::FromStr;

/// A complete Gregorian calendar date. Every value is a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    // Field order gives chronological `Ord`.
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Result of building a date from raw segment numbers without rejecting
/// day overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed {
    /// The date after any day overflow rolled into the following month.
    pub date: CalendarDate,
    /// Whether year, month and day read back unchanged from `date`.
    pub exact: bool,
}

impl CalendarDate {
    /// Creates a date from already validated components
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date the way a lenient calendar constructor does: a day past
    /// the end of the month rolls forward (Feb 31 2021 is Mar 3 2021).
    ///
    /// # Errors
    /// Returns `ParseError` if the year or month is out of range, or the day
    /// is zero or rolls past `MAX_YEAR`.
    pub fn compose(year: u16, month: u8, day: u8) -> Result<Composed, ParseError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let overflow = day
            .checked_sub(1)
            .ok_or(ParseError::InvalidDay { year, month, day })?;

        let rolled = NaiveDate::from_ymd_opt(i32::from(year_typed.get()), u32::from(month_typed.get()), 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(overflow))))
            .ok_or(ParseError::InvalidDay { year, month, day })?;
        let date = Self::try_from(rolled)?;

        Ok(Composed {
            date,
            exact: date.year() == year && date.month() == month && date.day() == day,
        })
    }

    /// Returns the year value as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month value as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day value as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the validated year
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the validated month
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the validated day
    pub const fn day_typed(&self) -> Day {
        self.day
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    // chrono keeps month and day well inside u8.
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year())
            .map_err(|_| ParseError::InvalidFormat(value.to_string()))?;
        Self::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(value: CalendarDate) -> Self {
        Self::from_ymd_opt(
            i32::from(value.year()),
            u32::from(value.month()),
            u32::from(value.day()),
        )
        .unwrap_or(Self::MIN)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
