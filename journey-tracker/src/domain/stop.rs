//! Stop types.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// One waypoint in a journey.
///
/// Field names follow the camelCase keys of the stop data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Display name
    pub name: String,
    /// Kilometres travelled from the previous stop (0 for the first stop)
    pub distance_from_previous: f64,
    /// Whether a visa is needed to enter
    pub visa_required: bool,
    /// Transit time in minutes
    pub transit_time: u32,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(
        name: impl Into<String>,
        distance_from_previous: f64,
        visa_required: bool,
        transit_time: u32,
    ) -> Self {
        Self {
            name: name.into(),
            distance_from_previous,
            visa_required,
            transit_time,
        }
    }

    /// Transit time as a duration.
    pub fn transit_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.transit_time))
    }
}

/// Format a transit time in minutes, e.g. `"7 h 30 min"` or `"45 min"`.
///
/// # Examples
///
/// ```
/// use journey_tracker::domain::format_transit_time;
///
/// assert_eq!(format_transit_time(450), "7 h 30 min");
/// assert_eq!(format_transit_time(45), "45 min");
/// ```
pub fn format_transit_time(minutes: u32) -> String {
    let duration = Duration::minutes(i64::from(minutes));
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    if hours > 0 {
        format!("{} h {} min", hours, mins)
    } else {
        format!("{} min", mins)
    }
}
