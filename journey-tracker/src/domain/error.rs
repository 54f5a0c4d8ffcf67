//! Domain error types.
//!
//! The journey core has exactly two failure modes: building a journey with
//! no stops, and advancing past the final stop. Everything else (malformed
//! input data) is rejected before it reaches the domain layer.

/// Returned when a journey is constructed from zero stops.
///
/// No valid journey state can exist without at least one stop, so this is
/// fatal to the session that tried to create it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("journey must have at least one stop")]
pub struct EmptyJourneyError;

/// Returned when `advance` is called while already at the final stop.
///
/// Recoverable: the journey state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("already at final stop (index {index})")]
pub struct AlreadyAtFinalStopError {
    /// Index of the final stop the journey is sitting on.
    pub index: usize,
}
