//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DistanceUnit, JourneyState, window_indices};
use crate::session::{IntentOutcome, Notice};
use crate::tween::ProgressTween;

/// Request to change the distance unit.
#[derive(Debug, Deserialize)]
pub struct UnitRequest {
    /// Unit to switch to (`km` or `mi`); toggles when absent
    pub unit: Option<String>,
}

/// A stop in the visible window.
#[derive(Debug, Serialize)]
pub struct WindowStopResult {
    /// Position in the full journey
    pub index: usize,

    /// Stop name
    pub name: String,

    /// Kilometres from the previous stop
    pub distance_from_previous_km: f64,

    /// Distance from the previous stop in the display unit
    pub distance_display: String,

    /// Whether a visa is required
    pub visa_required: bool,

    /// Transit time in minutes
    pub transit_time_mins: u32,

    /// Whether this is the current stop
    pub is_current: bool,

    /// Whether this stop has already been passed
    pub is_visited: bool,
}

/// Snapshot of the journey state.
#[derive(Debug, Serialize)]
pub struct JourneySnapshot {
    /// Index of the current stop
    pub current_index: usize,

    /// Name of the current stop
    pub current_stop: String,

    /// Total number of stops
    pub stop_count: usize,

    /// Whether the current stop is the last one
    pub is_final: bool,

    /// Display unit
    pub unit: DistanceUnit,

    /// Whole percentage of distance covered (truncated)
    pub progress_percent: u8,

    /// Distances in kilometres
    pub covered_km: f64,
    pub remaining_km: f64,
    pub total_km: f64,

    /// Distances formatted in the display unit
    pub covered_display: String,
    pub remaining_display: String,
    pub total_display: String,

    /// Stops selected for preview
    pub window: Vec<WindowStopResult>,
}

impl JourneySnapshot {
    /// Create from the journey state.
    pub fn from_state(journey: &JourneyState) -> Self {
        let current = journey.current_index();
        let stops = journey.stops();

        let window = window_indices(stops.len(), current)
            .into_iter()
            .map(|index| {
                let stop = &stops[index];
                WindowStopResult {
                    index,
                    name: stop.name.clone(),
                    distance_from_previous_km: stop.distance_from_previous,
                    distance_display: journey.format_distance(stop.distance_from_previous),
                    visa_required: stop.visa_required,
                    transit_time_mins: stop.transit_time,
                    is_current: index == current,
                    is_visited: index < current,
                }
            })
            .collect();

        Self {
            current_index: current,
            current_stop: journey.current_stop().name.clone(),
            stop_count: stops.len(),
            is_final: journey.is_at_final_stop(),
            unit: journey.unit_preference(),
            progress_percent: journey.progress_percent(),
            covered_km: journey.covered_distance(),
            remaining_km: journey.remaining_distance(),
            total_km: journey.total_distance(),
            covered_display: journey.format_distance(journey.covered_distance()),
            remaining_display: journey.format_distance(journey.remaining_distance()),
            total_display: journey.format_distance(journey.total_distance()),
            window,
        }
    }
}

/// A notice in an intent response.
#[derive(Debug, Serialize)]
pub struct NoticeResult {
    /// Machine-readable notice kind
    pub kind: Notice,

    /// Human-readable message
    pub message: String,
}

impl From<Notice> for NoticeResult {
    fn from(notice: Notice) -> Self {
        Self {
            kind: notice,
            message: notice.message().to_string(),
        }
    }
}

/// Response to an intent (advance, reset, unit change).
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    /// Journey state after the intent
    pub journey: JourneySnapshot,

    /// Notice to show, if any
    pub notice: Option<NoticeResult>,

    /// Progress animation to play, if the position changed
    pub tween: Option<ProgressTween>,
}

impl IntentResponse {
    pub fn new(journey: &JourneyState, outcome: IntentOutcome) -> Self {
        Self {
            journey: JourneySnapshot::from_state(journey),
            notice: outcome.notice.map(NoticeResult::from),
            tween: outcome.tween,
        }
    }
}

/// Response for the animated progress value.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    /// Percentage currently shown by the progress animation
    pub displayed: u8,

    /// Percentage the journey is actually at
    pub target: u8,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
