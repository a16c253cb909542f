use std::fmt;

use crate::{BOUNDS_SEPARATOR, CalendarDate};

/// Optional inclusive limits on the dates a field accepts.
/// A missing side is open. When both are present, minimum <= maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateBounds {
    minimum: Option<CalendarDate>,
    maximum: Option<CalendarDate>,
}

/// Error type for date bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum is after maximum.
    #[error("Invalid date bounds: minimum ({minimum}) is after maximum ({maximum})")]
    InvalidRange {
        minimum: CalendarDate,
        maximum: CalendarDate,
    },
}

impl DateBounds {
    /// Bounds that accept every date.
    pub const UNBOUNDED: Self = Self {
        minimum: None,
        maximum: None,
    };

    /// # Errors
    /// Returns `BoundsError::InvalidRange` if minimum > maximum.
    pub fn new(
        minimum: Option<CalendarDate>,
        maximum: Option<CalendarDate>,
    ) -> Result<Self, BoundsError> {
        if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
            if minimum > maximum {
                return Err(BoundsError::InvalidRange { minimum, maximum });
            }
        }
        Ok(Self { minimum, maximum })
    }

    /// Returns the earliest accepted date, if any
    pub const fn minimum(&self) -> Option<CalendarDate> {
        self.minimum
    }

    /// Returns the latest accepted date, if any
    pub const fn maximum(&self) -> Option<CalendarDate> {
        self.maximum
    }

    /// True when at least one side is set, i.e. a range check applies.
    pub const fn is_bounded(&self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.minimum.is_none_or(|min| min <= *date) && self.maximum.is_none_or(|max| *date <= max)
    }
}

/// Formats as `min/max` with an empty side for an open bound.
impl fmt::Display for DateBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(minimum) = self.minimum {
            write!(f, "{minimum}")?;
        }
        write!(f, "{BOUNDS_SEPARATOR}")?;
        if let Some(maximum) = self.maximum {
            write!(f, "{maximum}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn year_2020() -> DateBounds {
        DateBounds::new(Some(date("2020-01-01")), Some(date("2020-12-31"))).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted() {
        let result = DateBounds::new(Some(date("2021-01-01")), Some(date("2020-01-01")));
        assert!(matches!(result, Err(BoundsError::InvalidRange { .. })));
    }

    #[test]
    fn test_new_allows_single_day() {
        let day = date("2020-06-15");
        let bounds = DateBounds::new(Some(day), Some(day)).unwrap();
        assert!(bounds.contains(&day));
        assert!(!bounds.contains(&date("2020-06-16")));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = year_2020();
        assert!(bounds.contains(&date("2020-01-01")));
        assert!(bounds.contains(&date("2020-12-31")));
        assert!(bounds.contains(&date("2020-07-04")));
        assert!(!bounds.contains(&date("2019-12-31")));
        assert!(!bounds.contains(&date("2021-01-01")));
    }

    #[test]
    fn test_open_sides() {
        let from = DateBounds::new(Some(date("2020-01-01")), None).unwrap();
        assert!(from.is_bounded());
        assert!(from.contains(&date("9999-12-31")));
        assert!(!from.contains(&date("2019-12-31")));

        let until = DateBounds::new(None, Some(date("2020-01-01"))).unwrap();
        assert!(until.contains(&date("0001-01-01")));
        assert!(!until.contains(&date("2020-01-02")));

        assert!(!DateBounds::UNBOUNDED.is_bounded());
        assert!(DateBounds::UNBOUNDED.contains(&date("2020-01-01")));
    }

    #[test]
    fn test_display() {
        assert_eq!(year_2020().to_string(), "2020-01-01/2020-12-31");

        let open = DateBounds::new(None, Some(date("2020-12-31"))).unwrap();
        assert_eq!(open.minimum(), None);
        assert_eq!(open.to_string(), "/2020-12-31");

        let from = DateBounds::new(Some(date("2020-01-01")), None).unwrap();
        assert_eq!(from.maximum(), None);
        assert_eq!(from.to_string(), "2020-01-01/");

        assert_eq!(DateBounds::UNBOUNDED.to_string(), "/");
    }
}
