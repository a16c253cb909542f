//! Host-facing configuration of a date field.
//!
//! Field names follow the camelCase keys hosts already use, so a config can
//! be loaded straight from JSON:
//!
//! ```
//! use date_field::{DateFieldConfig, SegmentOrder};
//!
//! let config: DateFieldConfig = serde_json::from_str(
//!     r#"{ "order": "YMD", "minimumDate": "2020-01-01", "autoFocus": true }"#,
//! ).unwrap();
//! assert_eq!(config.order, SegmentOrder::YMD);
//! assert!(config.editable);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::order::{SegmentOrder, SubmitGate};
use crate::range::{BoundsError, DateBounds};
use crate::segments::{CenturyPivot, SegmentRole};
use crate::CalendarDate;

/// Label text per segment, also used as the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentLabels {
    pub date: String,
    pub month: String,
    pub year: String,
}

impl SegmentLabels {
    /// Returns the placeholder for `role`
    pub fn get(&self, role: SegmentRole) -> &str {
        match role {
            SegmentRole::Date => &self.date,
            SegmentRole::Month => &self.month,
            SegmentRole::Year => &self.year,
        }
    }
}

impl Default for SegmentLabels {
    fn default() -> Self {
        Self {
            date: "Date".to_owned(),
            month: "Month".to_owned(),
            year: "Year".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateFieldConfig {
    pub order: SegmentOrder,
    /// Initial date when no controlled `value` is given.
    pub default_value: Option<CalendarDate>,
    /// Controlled date; later changes arrive through `sync_value`.
    pub value: Option<CalendarDate>,
    pub minimum_date: Option<CalendarDate>,
    pub maximum_date: Option<CalendarDate>,
    /// Focus the first segment on mount.
    pub auto_focus: bool,
    pub editable: bool,
    pub labels: SegmentLabels,
    pub placeholder_text_color: Option<String>,
    pub test_id: Option<String>,
    pub century_pivot: CenturyPivot,
    pub submit_gate: SubmitGate,
}

impl Default for DateFieldConfig {
    fn default() -> Self {
        Self {
            order: SegmentOrder::default(),
            default_value: None,
            value: None,
            minimum_date: None,
            maximum_date: None,
            auto_focus: false,
            editable: true,
            labels: SegmentLabels::default(),
            placeholder_text_color: None,
            test_id: None,
            century_pivot: CenturyPivot::default(),
            submit_gate: SubmitGate::default(),
        }
    }
}

impl DateFieldConfig {
    /// Month-Date-Year field with defaults.
    pub fn mdy() -> Self {
        Self::default()
    }

    /// Year-Month-Date field with defaults.
    pub fn ymd() -> Self {
        Self {
            order: SegmentOrder::YMD,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `BoundsError::InvalidRange` if the minimum is after the maximum.
    pub fn bounds(&self) -> Result<DateBounds, BoundsError> {
        DateBounds::new(self.minimum_date, self.maximum_date)
    }

    /// The date the field starts with.
    pub fn initial_value(&self) -> Option<CalendarDate> {
        self.value.or(self.default_value)
    }

    /// # Errors
    /// Returns `ConfigError` if the bounds are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DateFieldConfig::default();
        assert_eq!(config.order, SegmentOrder::MDY);
        assert!(config.editable);
        assert!(!config.auto_focus);
        assert_eq!(config.labels.get(SegmentRole::Year), "Year");
        assert_eq!(config.century_pivot, CenturyPivot::default());
        assert_eq!(config.submit_gate, SubmitGate::LastSegment);
        assert!(!config.bounds().unwrap().is_bounded());
    }

    #[test]
    fn test_initial_value_prefers_controlled() {
        let a = CalendarDate::from_ymd(2020, 1, 1).unwrap();
        let b = CalendarDate::from_ymd(2021, 1, 1).unwrap();
        let config = DateFieldConfig {
            default_value: Some(a),
            value: Some(b),
            ..DateFieldConfig::default()
        };
        assert_eq!(config.initial_value(), Some(b));

        let config = DateFieldConfig {
            default_value: Some(a),
            ..DateFieldConfig::default()
        };
        assert_eq!(config.initial_value(), Some(a));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = DateFieldConfig {
            minimum_date: Some(CalendarDate::from_ymd(2021, 1, 1).unwrap()),
            maximum_date: Some(CalendarDate::from_ymd(2020, 1, 1).unwrap()),
            ..DateFieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Bounds(BoundsError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_from_json() {
        let config: DateFieldConfig = serde_json::from_str(
            r#"{
                "order": "YMD",
                "defaultValue": "2024-03-05",
                "minimumDate": "2020-01-01",
                "maximumDate": "2030-12-31",
                "editable": false,
                "labels": { "date": "Day" },
                "testId": "birthday",
                "centuryPivot": 30,
                "submitGate": "anySegment"
            }"#,
        )
        .unwrap();

        assert_eq!(config.order, SegmentOrder::YMD);
        assert_eq!(config.default_value.unwrap().to_string(), "2024-03-05");
        assert!(!config.editable);
        assert_eq!(config.labels.get(SegmentRole::Date), "Day");
        assert_eq!(config.labels.get(SegmentRole::Month), "Month");
        assert_eq!(config.test_id.as_deref(), Some("birthday"));
        assert_eq!(config.century_pivot.get(), 30);
        assert_eq!(config.submit_gate, SubmitGate::AnySegment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(serde_json::from_str::<DateFieldConfig>(r#"{ "order": "MMY" }"#).is_err());
        assert!(serde_json::from_str::<DateFieldConfig>(r#"{ "centuryPivot": 101 }"#).is_err());
        assert!(
            serde_json::from_str::<DateFieldConfig>(r#"{ "minimumDate": "2021-02-30" }"#).is_err()
        );
    }
}
