//! Visible window selection.
//!
//! The preview list never shows the whole journey. It shows every stop up
//! to and including the current one (at least the first two), then a single
//! lookahead stop. The rules are applied in a fixed order and the result at
//! small stop counts depends on that order, so they must not be simplified:
//!
//! 1. Take stops `0..=current`.
//! 2. If the journey has two or more stops and fewer than two were taken,
//!    replace them with the first two stops.
//! 3. Look ahead to index `max(current + 1, 2)`.
//! 4. Append that stop if it exists.

use super::Stop;

/// Indices of the stops to display for a journey of `len` stops.
///
/// Indices are strictly increasing. `current` is expected to be a valid
/// index; an out-of-range value is clamped to the last stop.
pub fn window_indices(len: usize, current: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let current = current.min(len - 1);

    let mut indices: Vec<usize> = (0..=current).collect();

    if len >= 2 && indices.len() < 2 {
        indices = vec![0, 1];
    }

    let lookahead = (current + 1).max(2);
    if lookahead < len {
        indices.push(lookahead);
    }

    indices
}

/// The stops to display for the given position.
///
/// # Examples
///
/// ```
/// use journey_tracker::domain::{Stop, select_window};
///
/// let stops = vec![
///     Stop::new("New York", 0.0, false, 0),
///     Stop::new("London", 5500.0, false, 420),
///     Stop::new("Dubai", 5500.0, true, 380),
///     Stop::new("Singapore", 5800.0, false, 450),
/// ];
///
/// let names: Vec<_> = select_window(&stops, 1).iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["New York", "London", "Dubai"]);
/// ```
pub fn select_window(stops: &[Stop], current: usize) -> Vec<&Stop> {
    window_indices(stops.len(), current)
        .into_iter()
        .map(|i| &stops[i])
        .collect()
}
