//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::session::JourneySession;
use crate::tween::ProgressAnimator;

/// Shared application state.
///
/// The journey lives behind a single mutex so intents are applied one at a
/// time, in arrival order.
#[derive(Clone)]
pub struct AppState {
    /// The journey being tracked
    pub session: Arc<Mutex<JourneySession>>,

    /// Progress bar animation
    pub animator: Arc<ProgressAnimator>,

    /// Length of the progress animation, echoed to the page
    pub animation: Duration,
}

impl AppState {
    /// Create a new app state.
    ///
    /// `tick` is the interval between animation frames.
    pub fn new(session: JourneySession, tick: Duration) -> Self {
        let initial = session.journey().progress_percent();
        let animation = session.animation();
        Self {
            session: Arc::new(Mutex::new(session)),
            animator: Arc::new(ProgressAnimator::new(initial, tick)),
            animation,
        }
    }
}
