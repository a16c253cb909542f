use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::segments::{DateSegments, SegmentRole};

/// The order in which segments are shown and visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentOrder([SegmentRole; 3]);

impl SegmentOrder {
    /// Month, Date, Year.
    pub const MDY: Self = Self([SegmentRole::Month, SegmentRole::Date, SegmentRole::Year]);
    /// Year, Month, Date.
    pub const YMD: Self = Self([SegmentRole::Year, SegmentRole::Month, SegmentRole::Date]);
    /// Date, Month, Year.
    pub const DMY: Self = Self([SegmentRole::Date, SegmentRole::Month, SegmentRole::Year]);

    /// # Errors
    /// Returns `ConfigError::SegmentOrder` unless every role appears exactly once.
    pub fn new(roles: [SegmentRole; 3]) -> Result<Self, ConfigError> {
        let distinct = SegmentRole::ALL
            .into_iter()
            .all(|role| roles.contains(&role));
        if !distinct {
            return Err(ConfigError::SegmentOrder(format!("{roles:?}")));
        }
        Ok(Self(roles))
    }

    /// Returns the roles in display order
    pub const fn roles(&self) -> [SegmentRole; 3] {
        self.0
    }

    /// Returns the segment shown first
    pub const fn first(&self) -> SegmentRole {
        self.0[0]
    }

    /// Returns the segment shown last
    pub const fn last(&self) -> SegmentRole {
        self.0[2]
    }

    /// The segment after `role`, `None` at the end.
    pub fn next(&self, role: SegmentRole) -> Option<SegmentRole> {
        let position = self.0.iter().position(|r| *r == role)?;
        self.0.get(position + 1).copied()
    }
}

impl Default for SegmentOrder {
    fn default() -> Self {
        Self::MDY
    }
}

impl fmt::Display for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for role in self.0 {
            let letter = match role {
                SegmentRole::Date => 'D',
                SegmentRole::Month => 'M',
                SegmentRole::Year => 'Y',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for SegmentOrder {
    type Err = ConfigError;

    /// Parses three letters such as `MDY` or `ymd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let roles = s
            .trim()
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'D' => Ok(SegmentRole::Date),
                'M' => Ok(SegmentRole::Month),
                'Y' => Ok(SegmentRole::Year),
                _ => Err(ConfigError::SegmentOrder(s.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let roles: [SegmentRole; 3] = roles
            .try_into()
            .map_err(|_| ConfigError::SegmentOrder(s.to_owned()))?;
        Self::new(roles)
    }
}

impl Serialize for SegmentOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SegmentOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which segments must hold digits before a focus loss may submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitGate {
    /// The last segment in order must be non-empty: the year for `MDY`, the
    /// date for `YMD`.
    #[default]
    LastSegment,
    /// Any non-empty segment is enough.
    AnySegment,
}

impl SubmitGate {
    /// Returns true if `segments`, as typed, may be submitted on focus loss
    pub fn allows(self, order: &SegmentOrder, segments: &DateSegments) -> bool {
        match self {
            Self::LastSegment => !segments.get(order.last()).is_empty(),
            Self::AnySegment => !segments.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_order() {
        let mdy = SegmentOrder::MDY;
        assert_eq!(mdy.first(), SegmentRole::Month);
        assert_eq!(mdy.next(SegmentRole::Month), Some(SegmentRole::Date));
        assert_eq!(mdy.next(SegmentRole::Date), Some(SegmentRole::Year));
        assert_eq!(mdy.next(SegmentRole::Year), None);

        let ymd = SegmentOrder::YMD;
        assert_eq!(ymd.first(), SegmentRole::Year);
        assert_eq!(ymd.next(SegmentRole::Year), Some(SegmentRole::Month));
        assert_eq!(ymd.next(SegmentRole::Month), Some(SegmentRole::Date));
        assert_eq!(ymd.last(), SegmentRole::Date);
    }

    #[test]
    fn test_new_rejects_repeats() {
        let result = SegmentOrder::new([SegmentRole::Year, SegmentRole::Year, SegmentRole::Date]);
        assert!(matches!(result, Err(ConfigError::SegmentOrder(_))));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("MDY".parse::<SegmentOrder>().unwrap(), SegmentOrder::MDY);
        assert_eq!("ymd".parse::<SegmentOrder>().unwrap(), SegmentOrder::YMD);
        assert_eq!(SegmentOrder::DMY.to_string(), "DMY");
        assert!("MD".parse::<SegmentOrder>().is_err());
        assert!("MDYY".parse::<SegmentOrder>().is_err());
        assert!("MMY".parse::<SegmentOrder>().is_err());
        assert!("MXY".parse::<SegmentOrder>().is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&SegmentOrder::YMD).unwrap();
        assert_eq!(json, "\"YMD\"");
        let order: SegmentOrder = serde_json::from_str("\"DMY\"").unwrap();
        assert_eq!(order, SegmentOrder::DMY);
        let gate: SubmitGate = serde_json::from_str("\"anySegment\"").unwrap();
        assert_eq!(gate, SubmitGate::AnySegment);
    }

    #[test]
    fn test_last_segment_gate() {
        let year_only = DateSegments::new("", "", "2024");
        let date_only = DateSegments::new("05", "", "");
        let gate = SubmitGate::LastSegment;

        assert!(gate.allows(&SegmentOrder::MDY, &year_only));
        assert!(!gate.allows(&SegmentOrder::MDY, &date_only));
        assert!(gate.allows(&SegmentOrder::YMD, &date_only));
        assert!(!gate.allows(&SegmentOrder::YMD, &year_only));
    }

    #[test]
    fn test_any_segment_gate() {
        let gate = SubmitGate::AnySegment;
        assert!(gate.allows(&SegmentOrder::MDY, &DateSegments::new("05", "", "")));
        assert!(!gate.allows(&SegmentOrder::YMD, &DateSegments::default()));
    }
}
