//! The three digit buffers behind a date field and the pure transitions on
//! them: keystroke changes and focus-loss normalization.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAY_DIGITS, DAYS_IN_MONTH, DEFAULT_CENTURY_PIVOT, FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_DATE,
    MAX_MONTH, MONTH_DIGITS, YEAR_DIGITS,
};
use crate::date::Composed;
use crate::error::ConfigError;
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarDate, ParseError};

/// One of the three editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl SegmentRole {
    pub const ALL: [Self; 3] = [Self::Date, Self::Month, Self::Year];

    /// Number of digits that completes the segment.
    pub const fn max_len(self) -> usize {
        match self {
            Self::Date => DAY_DIGITS,
            Self::Month => MONTH_DIGITS,
            Self::Year => YEAR_DIGITS,
        }
    }

    /// Values above this are replaced by it. The year is never clamped.
    pub const fn max_value(self) -> Option<u8> {
        match self {
            Self::Date => Some(MAX_DATE),
            Self::Month => Some(MAX_MONTH),
            Self::Year => None,
        }
    }
}

/// Numeric value of a digit buffer. Empty reads as zero.
fn numeric(digits: &str) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}

/// Strips everything but ASCII digits, clamps an overflowing date or month
/// to its maximum and keeps at most `role.max_len()` digits.
pub fn sanitize(role: SegmentRole, raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let clamped = match role.max_value() {
        Some(max) if numeric(&digits) > u32::from(max) => max.to_string(),
        _ => digits,
    };
    clamped.chars().take(role.max_len()).collect()
}

/// Raw digit buffers for date, month and year.
///
/// Every buffer holds only ASCII digits and never more than its segment's
/// `max_len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSegments")]
pub struct DateSegments {
    date: String,
    month: String,
    year: String,
}

/// Wire form of `DateSegments`, sanitized on the way in.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawSegments {
    date: String,
    month: String,
    year: String,
}

impl From<RawSegments> for DateSegments {
    fn from(raw: RawSegments) -> Self {
        Self::new(&raw.date, &raw.month, &raw.year)
    }
}

/// Outcome of a keystroke on one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub segments: DateSegments,
    /// The changed segment is full and focus should move on.
    pub advance: bool,
}

impl DateSegments {
    /// Builds segments from arbitrary text, sanitizing each buffer.
    pub fn new(date: &str, month: &str, year: &str) -> Self {
        Self {
            date: sanitize(SegmentRole::Date, date),
            month: sanitize(SegmentRole::Month, month),
            year: sanitize(SegmentRole::Year, year),
        }
    }

    /// Day and month zero-padded to two digits, year as-is; all empty for `None`.
    pub fn from_date(value: Option<&CalendarDate>) -> Self {
        value.map_or_else(Self::default, |d| Self {
            date: format!("{:02}", d.day()),
            month: format!("{:02}", d.month()),
            year: d.year().to_string(),
        })
    }

    /// Returns the date buffer
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the month buffer
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the year buffer
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the buffer for `role`
    pub fn get(&self, role: SegmentRole) -> &str {
        match role {
            SegmentRole::Date => &self.date,
            SegmentRole::Month => &self.month,
            SegmentRole::Year => &self.year,
        }
    }

    fn get_mut(&mut self, role: SegmentRole) -> &mut String {
        match role {
            SegmentRole::Date => &mut self.date,
            SegmentRole::Month => &mut self.month,
            SegmentRole::Year => &mut self.year,
        }
    }

    /// Returns true if all three buffers are empty
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// Returns true if the buffer for `role` holds `role.max_len()` digits
    pub fn is_complete(&self, role: SegmentRole) -> bool {
        self.get(role).len() == role.max_len()
    }

    /// Returns true if every buffer is complete
    pub fn is_all_complete(&self) -> bool {
        SegmentRole::ALL.into_iter().all(|role| self.is_complete(role))
    }

    /// Applies raw text typed into `role`.
    ///
    /// A month change also pulls the date back to the last day of the new
    /// month. Until the year has four digits February allows the 29th.
    pub fn apply_change(&self, role: SegmentRole, raw: &str) -> Change {
        let mut segments = self.clone();
        let value = sanitize(role, raw);
        let advance = value.len() == role.max_len();
        *segments.get_mut(role) = value;

        if role == SegmentRole::Month {
            segments.date = clamp_date_to_month(&segments.date, &segments.month, &segments.year);
        }

        Change { segments, advance }
    }

    /// Focus-loss normalization.
    ///
    /// * date, month: zero becomes `01`, a single digit is zero-padded
    /// * year: zero becomes `current_year`, two or three digits are expanded
    ///   through `pivot`
    ///
    /// An empty buffer reads as zero, so the result never has an empty
    /// segment. Normalizing twice changes nothing.
    pub fn normalize(&self, current_year: u16, pivot: CenturyPivot) -> Self {
        let year = if numeric(&self.year) == 0 {
            format!("{current_year:04}")
        } else if (2..YEAR_DIGITS).contains(&self.year.len()) {
            pivot.expand(&self.year)
        } else {
            self.year.clone()
        };

        Self {
            date: pad_day_or_month(&self.date),
            month: pad_day_or_month(&self.month),
            year,
        }
    }

    /// Builds the candidate date, letting an overlong day roll into the next month.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` if any buffer is empty, or the
    /// component error if a value is out of range.
    pub fn compose(&self) -> Result<Composed, ParseError> {
        if self.date.is_empty() || self.month.is_empty() || self.year.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let year = u16::try_from(numeric(&self.year))
            .map_err(|_| ParseError::InvalidFormat(self.year.clone()))?;
        let month = u8::try_from(numeric(&self.month))
            .map_err(|_| ParseError::InvalidFormat(self.month.clone()))?;
        let day = u8::try_from(numeric(&self.date))
            .map_err(|_| ParseError::InvalidFormat(self.date.clone()))?;
        CalendarDate::compose(year, month, day)
    }
}

fn pad_day_or_month(digits: &str) -> String {
    if numeric(digits) == 0 {
        "01".to_owned()
    } else {
        format!("{digits:0>2}")
    }
}

fn clamp_date_to_month(date: &str, month: &str, year: &str) -> String {
    let month = numeric(month);
    if date.is_empty() || month == 0 || month > u32::from(MAX_MONTH) {
        return date.to_owned();
    }
    // Bounded by MAX_MONTH above.
    #[allow(clippy::cast_possible_truncation)]
    let month = month as u8;

    let full_year = (year.len() == YEAR_DIGITS)
        .then(|| u16::try_from(numeric(year)).ok())
        .flatten()
        .filter(|y| *y > 0);
    let last_day = match full_year {
        Some(y) => days_in_month(y, month),
        None if month == FEBRUARY => FEBRUARY_DAYS_LEAP,
        None => DAYS_IN_MONTH[month as usize],
    };

    if numeric(date) > u32::from(last_day) {
        last_day.to_string()
    } else {
        date.to_owned()
    }
}

/// Maps two-digit years onto a century: `YY < pivot` becomes `20YY`,
/// anything else `19YY`.
///
/// Three-digit input below 100 (`"024"`) follows the two-digit rule; other
/// three-digit years are taken literally and zero-padded (`"987"` is `0987`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct CenturyPivot(u8);

impl CenturyPivot {
    /// # Errors
    /// Returns `ConfigError::CenturyPivot` if `pivot` is above 100.
    pub const fn new(pivot: u8) -> Result<Self, ConfigError> {
        if pivot > 100 {
            return Err(ConfigError::CenturyPivot(pivot));
        }
        Ok(Self(pivot))
    }

    /// Returns the pivot as u8
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Expands a two- or three-digit year buffer to four digits.
    pub fn expand(self, digits: &str) -> String {
        let value = numeric(digits);
        if value < 100 {
            let century = if value < u32::from(self.0) { 2000 } else { 1900 };
            format!("{:04}", century + value)
        } else {
            format!("{value:04}")
        }
    }
}

impl Default for CenturyPivot {
    fn default() -> Self {
        Self(DEFAULT_CENTURY_PIVOT)
    }
}

impl TryFrom<u8> for CenturyPivot {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
