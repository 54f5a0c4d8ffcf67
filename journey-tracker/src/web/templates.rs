//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{JourneyState, format_transit_time, window_indices};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The journey tracker page.
#[derive(Template)]
#[template(path = "journey.html")]
pub struct JourneyPageTemplate {
    pub journey: JourneyView,
    /// Notice to flash after an intent
    pub notice: Option<String>,
    /// Percentage the progress bar animates from
    pub bar_from: u8,
    /// Length of the progress bar animation
    pub animation_ms: u64,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Where a stop sits relative to the traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStatus {
    Visited,
    Current,
    Upcoming,
}

impl StopStatus {
    fn for_index(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StopStatus::Visited,
            std::cmp::Ordering::Equal => StopStatus::Current,
            std::cmp::Ordering::Greater => StopStatus::Upcoming,
        }
    }

    /// CSS class for the stop card.
    pub fn css_class(&self) -> &'static str {
        match self {
            StopStatus::Visited => "stop-visited",
            StopStatus::Current => "stop-current",
            StopStatus::Upcoming => "stop-upcoming",
        }
    }
}

/// A stop card in the preview list.
#[derive(Debug, Clone)]
pub struct StopCard {
    pub index: usize,
    pub name: String,
    pub distance_text: String,
    pub transit_text: String,
    pub visa_required: bool,
    pub status: StopStatus,
}

/// Everything the journey page shows.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub current_stop: String,
    pub current_index: usize,
    pub stop_count: usize,
    pub progress_percent: u8,
    pub covered: String,
    pub remaining: String,
    pub total: String,
    /// Label of the unit distances are shown in
    pub unit: String,
    /// Label of the unit the toggle switches to
    pub other_unit: String,
    /// Whether the next-stop control is offered
    pub show_next: bool,
    pub stops: Vec<StopCard>,
}

impl JourneyView {
    /// Build a view by querying the journey state.
    pub fn from_state(journey: &JourneyState) -> Self {
        let current = journey.current_index();
        let all_stops = journey.stops();

        let stops = window_indices(all_stops.len(), current)
            .into_iter()
            .map(|index| {
                let stop = &all_stops[index];
                StopCard {
                    index,
                    name: stop.name.clone(),
                    distance_text: format!(
                        "Distance from previous: {}",
                        journey.format_distance(stop.distance_from_previous)
                    ),
                    transit_text: format!(
                        "Transit time: {}",
                        format_transit_time(stop.transit_time)
                    ),
                    visa_required: stop.visa_required,
                    status: StopStatus::for_index(index, current),
                }
            })
            .collect();

        let unit = journey.unit_preference();

        Self {
            current_stop: format!("Current Stop: {}", journey.current_stop().name),
            current_index: current,
            stop_count: all_stops.len(),
            progress_percent: journey.progress_percent(),
            covered: journey.format_distance(journey.covered_distance()),
            remaining: journey.format_distance(journey.remaining_distance()),
            total: journey.format_distance(journey.total_distance()),
            unit: unit.label().to_string(),
            other_unit: unit.toggled().label().to_string(),
            show_next: !journey.is_at_final_stop(),
            stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistanceUnit, Stop};

    fn world_tour() -> JourneyState {
        JourneyState::new(vec![
            Stop::new("New York", 0.0, false, 0),
            Stop::new("London", 5500.0, false, 420),
            Stop::new("Dubai", 5500.0, true, 380),
            Stop::new("Singapore", 5800.0, false, 450),
        ])
        .unwrap()
    }

    #[test]
    fn view_at_start() {
        let view = JourneyView::from_state(&world_tour());

        assert_eq!(view.current_stop, "Current Stop: New York");
        assert_eq!(view.progress_percent, 0);
        assert_eq!(view.covered, "0.0 km");
        assert_eq!(view.remaining, "16800.0 km");
        assert_eq!(view.total, "16800.0 km");
        assert!(view.show_next);

        let statuses: Vec<_> = view.stops.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            [StopStatus::Current, StopStatus::Upcoming, StopStatus::Upcoming]
        );
    }

    #[test]
    fn view_card_text() {
        let mut journey = world_tour();
        journey.advance().unwrap();
        let view = JourneyView::from_state(&journey);

        let dubai = &view.stops[2];
        assert_eq!(dubai.index, 2);
        assert_eq!(dubai.name, "Dubai");
        assert_eq!(dubai.distance_text, "Distance from previous: 5500.0 km");
        assert_eq!(dubai.transit_text, "Transit time: 6 h 20 min");
        assert!(dubai.visa_required);
        assert_eq!(view.stops[0].status, StopStatus::Visited);
        assert_eq!(view.stops[1].status, StopStatus::Current);
    }

    #[test]
    fn view_in_miles() {
        let mut journey = world_tour();
        journey.set_unit_preference(DistanceUnit::Miles);
        let view = JourneyView::from_state(&journey);

        assert_eq!(view.unit, "mi");
        assert_eq!(view.other_unit, "km");
        assert_eq!(view.total, "10439.0 mi");
        assert_eq!(
            view.stops[1].distance_text,
            "Distance from previous: 3417.5 mi"
        );
    }

    #[test]
    fn view_hides_next_at_final_stop() {
        let mut journey = world_tour();
        while journey.advance().is_ok() {}
        let view = JourneyView::from_state(&journey);

        assert!(!view.show_next);
        assert_eq!(view.progress_percent, 100);
        assert_eq!(view.stops.len(), 4);
    }

    #[test]
    fn page_renders() {
        let mut journey = world_tour();
        journey.advance().unwrap();

        let html = JourneyPageTemplate {
            journey: JourneyView::from_state(&journey),
            notice: Some("Journey reset to start!".into()),
            bar_from: 0,
            animation_ms: 1000,
        }
        .render()
        .unwrap();

        assert!(html.contains("Current Stop: London"));
        assert!(html.contains("32%"));
        assert!(html.contains("Visa required!"));
        assert!(html.contains("Journey reset to start!"));
        assert!(html.contains("stop-current"));
    }

    #[test]
    fn page_without_next_button_at_final_stop() {
        let mut journey = world_tour();
        while journey.advance().is_ok() {}

        let html = JourneyPageTemplate {
            journey: JourneyView::from_state(&journey),
            notice: None,
            bar_from: 100,
            animation_ms: 1000,
        }
        .render()
        .unwrap();

        assert!(!html.contains("/journey/advance"));
        assert!(html.contains("Current Stop: Singapore"));
    }
}
