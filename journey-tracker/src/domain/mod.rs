//! Domain types for the journey tracker.
//!
//! This module contains the journey progress state machine and the
//! visible-window selection that drives the stop preview. All types enforce
//! their invariants at construction time; every query on a constructed
//! journey is a total function.

mod error;
mod journey;
mod stop;
mod unit;
mod window;

pub use error::{AlreadyAtFinalStopError, EmptyJourneyError};
pub use journey::JourneyState;
pub use stop::{Stop, format_transit_time};
pub use unit::{DistanceUnit, InvalidUnit, KM_TO_MILES};
pub use window::{select_window, window_indices};
