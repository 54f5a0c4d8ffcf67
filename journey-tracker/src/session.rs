//! Presentation adapter between user intents and the journey state.
//!
//! A `JourneySession` owns the single `JourneyState` for the running app.
//! Each intent mutates the state and reports what the presentation layer
//! should show on top of a fresh render: a transient notice and, for index
//! changes, the progress animation to play. Rendering itself always
//! re-queries the state afterwards.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::domain::{DistanceUnit, JourneyState};
use crate::tween::ProgressTween;

/// A short message shown after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The last advance landed on the final stop
    ReachedFinalStop,
    /// Advance was requested at the final stop
    AlreadyAtFinalStop,
    /// The journey went back to the first stop
    JourneyReset,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::ReachedFinalStop => "You have reached the final destination!",
            Notice::AlreadyAtFinalStop => "Already at final destination!",
            Notice::JourneyReset => "Journey reset to start!",
        }
    }
}

/// What an intent produced besides the state change itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentOutcome {
    pub notice: Option<Notice>,
    pub tween: Option<ProgressTween>,
}

/// The journey being tracked plus presentation settings.
#[derive(Debug, Clone)]
pub struct JourneySession {
    journey: JourneyState,
    animation: Duration,
}

impl JourneySession {
    /// Wrap a journey, animating progress changes over `animation`.
    pub fn new(journey: JourneyState, animation: Duration) -> Self {
        Self { journey, animation }
    }

    /// The underlying journey state.
    pub fn journey(&self) -> &JourneyState {
        &self.journey
    }

    /// How long progress changes are animated for.
    pub fn animation(&self) -> Duration {
        self.animation
    }

    /// Move to the next stop.
    pub fn advance(&mut self) -> IntentOutcome {
        let before = self.journey.progress_percent();

        match self.journey.advance() {
            Ok(index) => {
                info!(index, stop = %self.journey.current_stop().name, "advanced");
                let notice = self
                    .journey
                    .is_at_final_stop()
                    .then_some(Notice::ReachedFinalStop);
                IntentOutcome {
                    notice,
                    tween: Some(self.tween_from(before)),
                }
            }
            Err(e) => {
                info!(index = e.index, "advance ignored: {e}");
                IntentOutcome {
                    notice: Some(Notice::AlreadyAtFinalStop),
                    tween: None,
                }
            }
        }
    }

    /// Go back to the first stop.
    pub fn reset(&mut self) -> IntentOutcome {
        let before = self.journey.progress_percent();
        self.journey.reset();
        info!("journey reset");

        IntentOutcome {
            notice: Some(Notice::JourneyReset),
            tween: Some(self.tween_from(before)),
        }
    }

    /// Switch between kilometres and miles, returning the new unit.
    pub fn toggle_units(&mut self) -> DistanceUnit {
        let unit = self.journey.unit_preference().toggled();
        self.set_unit(unit);
        unit
    }

    /// Show distances in `unit`.
    pub fn set_unit(&mut self, unit: DistanceUnit) {
        self.journey.set_unit_preference(unit);
        info!(%unit, "distance unit changed");
    }

    fn tween_from(&self, before: u8) -> ProgressTween {
        ProgressTween::new(before, self.journey.progress_percent(), self.animation)
    }
}
