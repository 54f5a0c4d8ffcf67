//! Distance display units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kilometres to statute miles.
pub const KM_TO_MILES: f64 = 0.621371;

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance unit: {0} (expected km or mi)")]
pub struct InvalidUnit(String);

/// The unit distances are displayed in.
///
/// Stored distances are always kilometres; the unit only affects
/// formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// Short label shown after a formatted value.
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }

    /// Convert a distance in kilometres into this unit.
    pub fn convert(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km * KM_TO_MILES,
        }
    }

    /// Format a distance given in kilometres, e.g. `"62.1 mi"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_tracker::domain::DistanceUnit;
    ///
    /// assert_eq!(DistanceUnit::Kilometers.format(100.0), "100.0 km");
    /// assert_eq!(DistanceUnit::Miles.format(100.0), "62.1 mi");
    /// ```
    pub fn format(self, km: f64) -> String {
        format!("{:.1} {}", self.convert(km), self.label())
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceUnit {
    type Err = InvalidUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            _ => Err(InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_kilometers() {
        assert_eq!(DistanceUnit::Kilometers.format(100.0), "100.0 km");
        assert_eq!(DistanceUnit::Kilometers.format(0.0), "0.0 km");
        assert_eq!(DistanceUnit::Kilometers.format(16800.0), "16800.0 km");
    }

    #[test]
    fn format_miles() {
        assert_eq!(DistanceUnit::Miles.format(100.0), "62.1 mi");
        assert_eq!(DistanceUnit::Miles.format(5500.0), "3417.5 mi");
        assert_eq!(DistanceUnit::Miles.format(0.0), "0.0 mi");
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(DistanceUnit::Kilometers.toggled(), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::Miles.toggled(), DistanceUnit::Kilometers);
    }

    #[test]
    fn default_is_kilometers() {
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
    }

    #[test]
    fn parse_units() {
        assert_eq!("km".parse::<DistanceUnit>(), Ok(DistanceUnit::Kilometers));
        assert_eq!("MI".parse::<DistanceUnit>(), Ok(DistanceUnit::Miles));
        assert_eq!(" miles ".parse::<DistanceUnit>(), Ok(DistanceUnit::Miles));
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn serde_uses_short_labels() {
        let json = serde_json::to_string(&DistanceUnit::Miles).unwrap();
        assert_eq!(json, "\"mi\"");

        let unit: DistanceUnit = serde_json::from_str("\"km\"").unwrap();
        assert_eq!(unit, DistanceUnit::Kilometers);
    }
}
