//! Journey progress state.
//!
//! A `JourneyState` is an ordered, non-empty list of stops plus the index of
//! the stop the traveller is currently at. The index only moves forward one
//! stop at a time via [`JourneyState::advance`], or jumps back to the start
//! via [`JourneyState::reset`].

use tracing::debug;

use super::{AlreadyAtFinalStopError, DistanceUnit, EmptyJourneyError, Stop, select_window};

/// Progress through an ordered sequence of stops.
///
/// # Invariants
///
/// - At least one stop
/// - `0 <= current_index < stops.len()`
/// - `total_distance` is the sum of every stop's `distance_from_previous`
#[derive(Debug, Clone)]
pub struct JourneyState {
    stops: Vec<Stop>,
    current_index: usize,
    unit: DistanceUnit,
    total_distance: f64,
}

impl JourneyState {
    /// Constructs a journey positioned at the first stop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `stops` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_tracker::domain::{JourneyState, Stop};
    ///
    /// let journey = JourneyState::new(vec![
    ///     Stop::new("New York", 0.0, false, 0),
    ///     Stop::new("London", 5500.0, false, 420),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(journey.current_index(), 0);
    /// assert_eq!(journey.total_distance(), 5500.0);
    ///
    /// assert!(JourneyState::new(vec![]).is_err());
    /// ```
    pub fn new(stops: Vec<Stop>) -> Result<Self, EmptyJourneyError> {
        if stops.is_empty() {
            return Err(EmptyJourneyError);
        }

        let total_distance = stops.iter().map(|s| s.distance_from_previous).sum();

        Ok(Self {
            stops,
            current_index: 0,
            unit: DistanceUnit::default(),
            total_distance,
        })
    }

    /// Move to the next stop, returning its index.
    ///
    /// # Errors
    ///
    /// Returns `Err` if already at the final stop. The state is unchanged.
    pub fn advance(&mut self) -> Result<usize, AlreadyAtFinalStopError> {
        if self.is_at_final_stop() {
            return Err(AlreadyAtFinalStopError {
                index: self.current_index,
            });
        }

        self.current_index += 1;
        debug!(
            index = self.current_index,
            stop = %self.current_stop().name,
            "advanced to next stop"
        );
        Ok(self.current_index)
    }

    /// Return to the first stop.
    pub fn reset(&mut self) {
        self.current_index = 0;
        debug!("journey reset to first stop");
    }

    /// Set the unit used by [`JourneyState::format_distance`].
    pub fn set_unit_preference(&mut self, unit: DistanceUnit) {
        self.unit = unit;
    }

    /// The unit distances are displayed in.
    pub fn unit_preference(&self) -> DistanceUnit {
        self.unit
    }

    /// All stops in order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Index of the current stop.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The stop the traveller is at.
    pub fn current_stop(&self) -> &Stop {
        &self.stops[self.current_index]
    }

    /// Index of the final stop.
    pub fn final_index(&self) -> usize {
        self.stops.len() - 1
    }

    /// Whether the current stop is the last one.
    pub fn is_at_final_stop(&self) -> bool {
        self.current_index == self.final_index()
    }

    /// Distance travelled to reach the current stop, in kilometres.
    pub fn covered_distance(&self) -> f64 {
        self.covered_distance_at(self.current_index)
    }

    /// Distance left to the final stop, in kilometres.
    pub fn remaining_distance(&self) -> f64 {
        self.total_distance - self.covered_distance()
    }

    /// Length of the whole journey, in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Whole percentage of the total distance covered, truncated.
    ///
    /// A journey with no distance at all reports 0 throughout.
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent_at(self.current_index)
    }

    /// The progress percentage the journey would report at `index`.
    ///
    /// Used to compute the start and end points of a progress animation.
    /// Indices past the final stop are treated as the final stop.
    pub fn progress_percent_at(&self, index: usize) -> u8 {
        if self.total_distance <= 0.0 {
            return 0;
        }
        let ratio = self.covered_distance_at(index) / self.total_distance;
        // Truncation toward zero, never rounding
        (ratio * 100.0).clamp(0.0, 100.0) as u8
    }

    /// Format a distance in kilometres using the current unit preference.
    pub fn format_distance(&self, km: f64) -> String {
        self.unit.format(km)
    }

    /// The stops to preview for the current position.
    pub fn visible_stops(&self) -> Vec<&Stop> {
        select_window(&self.stops, self.current_index)
    }

    fn covered_distance_at(&self, index: usize) -> f64 {
        let end = index.min(self.final_index());
        self.stops[..=end]
            .iter()
            .map(|s| s.distance_from_previous)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_tour() -> JourneyState {
        JourneyState::new(vec![
            Stop::new("New York", 0.0, false, 0),
            Stop::new("London", 5500.0, false, 420),
            Stop::new("Dubai", 5500.0, true, 380),
            Stop::new("Singapore", 5800.0, false, 450),
        ])
        .unwrap()
    }

    fn names(stops: &[&Stop]) -> Vec<String> {
        stops.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn empty_journey_rejected() {
        assert_eq!(JourneyState::new(vec![]).unwrap_err(), EmptyJourneyError);
    }

    #[test]
    fn starts_at_first_stop() {
        let journey = world_tour();

        assert_eq!(journey.current_index(), 0);
        assert_eq!(journey.current_stop().name, "New York");
        assert_eq!(journey.covered_distance(), 0.0);
        assert_eq!(journey.remaining_distance(), 16800.0);
        assert_eq!(journey.total_distance(), 16800.0);
        assert_eq!(journey.progress_percent(), 0);
        assert_eq!(journey.unit_preference(), DistanceUnit::Kilometers);
    }

    #[test]
    fn advance_once() {
        let mut journey = world_tour();

        assert_eq!(journey.advance(), Ok(1));
        assert_eq!(journey.current_stop().name, "London");
        assert_eq!(journey.covered_distance(), 5500.0);
        assert_eq!(journey.total_distance(), 16800.0);
        // 5500 / 16800 = 32.7%, truncated
        assert_eq!(journey.progress_percent(), 32);
        assert_eq!(
            names(&journey.visible_stops()),
            ["New York", "London", "Dubai"]
        );
    }

    #[test]
    fn advance_to_final_stop() {
        let mut journey = world_tour();

        assert_eq!(journey.advance(), Ok(1));
        assert_eq!(journey.advance(), Ok(2));
        // 11000 / 16800 = 65.47%
        assert_eq!(journey.progress_percent(), 65);
        assert!(!journey.is_at_final_stop());

        assert_eq!(journey.advance(), Ok(3));
        assert!(journey.is_at_final_stop());
        assert_eq!(journey.progress_percent(), 100);
        assert_eq!(journey.remaining_distance(), 0.0);
        assert_eq!(
            names(&journey.visible_stops()),
            ["New York", "London", "Dubai", "Singapore"]
        );
    }

    #[test]
    fn advance_past_final_stop_fails() {
        let mut journey = world_tour();
        for _ in 0..3 {
            journey.advance().unwrap();
        }

        for _ in 0..5 {
            assert_eq!(
                journey.advance(),
                Err(AlreadyAtFinalStopError { index: 3 })
            );
            assert_eq!(journey.current_index(), 3);
            assert_eq!(journey.progress_percent(), 100);
        }
    }

    #[test]
    fn reset_returns_to_start() {
        let mut journey = world_tour();
        journey.advance().unwrap();
        journey.advance().unwrap();

        journey.reset();

        assert_eq!(journey.current_index(), 0);
        assert_eq!(journey.progress_percent(), 0);
        assert_eq!(journey.covered_distance(), 0.0);
        assert_eq!(journey.advance(), Ok(1));
    }

    #[test]
    fn single_stop_journey_is_already_final() {
        let mut journey = JourneyState::new(vec![Stop::new("Home", 0.0, false, 0)]).unwrap();

        assert!(journey.is_at_final_stop());
        assert_eq!(journey.advance(), Err(AlreadyAtFinalStopError { index: 0 }));
        assert_eq!(journey.progress_percent(), 0);
        assert_eq!(names(&journey.visible_stops()), ["Home"]);
    }

    #[test]
    fn zero_distance_journey_reports_zero_progress() {
        let mut journey = JourneyState::new(vec![
            Stop::new("A", 0.0, false, 0),
            Stop::new("B", 0.0, false, 10),
            Stop::new("C", 0.0, false, 20),
        ])
        .unwrap();

        assert_eq!(journey.progress_percent(), 0);
        journey.advance().unwrap();
        assert_eq!(journey.progress_percent(), 0);
        journey.advance().unwrap();
        assert_eq!(journey.progress_percent(), 0);
        assert_eq!(journey.remaining_distance(), 0.0);
    }

    #[test]
    fn first_stop_distance_counts_as_covered() {
        let journey = JourneyState::new(vec![
            Stop::new("Origin", 100.0, false, 0),
            Stop::new("Destination", 300.0, false, 60),
        ])
        .unwrap();

        assert_eq!(journey.covered_distance(), 100.0);
        assert_eq!(journey.progress_percent(), 25);
    }

    #[test]
    fn progress_truncates_rather_than_rounds() {
        let journey = JourneyState::new(vec![
            Stop::new("A", 199.0, false, 0),
            Stop::new("B", 1.0, false, 0),
        ])
        .unwrap();

        // 199 / 200 = 99.5%
        assert_eq!(journey.progress_percent(), 99);
    }

    #[test]
    fn progress_percent_at_other_indices() {
        let journey = world_tour();

        assert_eq!(journey.progress_percent_at(0), 0);
        assert_eq!(journey.progress_percent_at(1), 32);
        assert_eq!(journey.progress_percent_at(3), 100);
        assert_eq!(journey.progress_percent_at(99), 100);
    }

    #[test]
    fn unit_preference_only_changes_formatting() {
        let mut journey = world_tour();
        journey.advance().unwrap();

        journey.set_unit_preference(DistanceUnit::Miles);

        assert_eq!(journey.unit_preference(), DistanceUnit::Miles);
        assert_eq!(journey.covered_distance(), 5500.0);
        assert_eq!(journey.format_distance(100.0), "62.1 mi");
        assert_eq!(journey.progress_percent(), 32);
        assert_eq!(
            names(&journey.visible_stops()),
            ["New York", "London", "Dubai"]
        );

        journey.set_unit_preference(DistanceUnit::Kilometers);
        assert_eq!(journey.format_distance(100.0), "100.0 km");
    }
}
