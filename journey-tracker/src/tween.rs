//! Progress bar interpolation.
//!
//! Purely cosmetic: the displayed percentage slides from the old progress
//! value to the new one after an intent. The journey state has already
//! transitioned by the time a tween starts, and nothing here reads or writes
//! it. Cancelling a tween just freezes the displayed value.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// A linear interpolation between two progress percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressTween {
    /// Percentage shown when the tween starts.
    pub from: u8,
    /// Percentage shown once the tween finishes.
    pub to: u8,
    /// Time taken to get from one to the other.
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl ProgressTween {
    pub fn new(from: u8, to: u8, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// The percentage to display `elapsed` after the tween started.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use journey_tracker::tween::ProgressTween;
    ///
    /// let tween = ProgressTween::new(0, 32, Duration::from_secs(1));
    /// assert_eq!(tween.value_at(Duration::ZERO), 0);
    /// assert_eq!(tween.value_at(Duration::from_millis(500)), 16);
    /// assert_eq!(tween.value_at(Duration::from_secs(5)), 32);
    /// ```
    pub fn value_at(&self, elapsed: Duration) -> u8 {
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t).round().clamp(0.0, 100.0) as u8
    }

    /// Whether the tween has reached its end value.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Runs progress tweens on a fixed tick and publishes the displayed value.
///
/// At most one tween runs at a time; starting a new one cancels the old.
#[derive(Debug)]
pub struct ProgressAnimator {
    displayed: Arc<watch::Sender<u8>>,
    tick: Duration,
    running: Mutex<Option<JoinHandle<()>>>,
}

impl ProgressAnimator {
    /// Create an animator showing `initial` until the first tween.
    pub fn new(initial: u8, tick: Duration) -> Self {
        let (displayed, _) = watch::channel(initial);
        Self {
            displayed: Arc::new(displayed),
            tick,
            running: Mutex::new(None),
        }
    }

    /// The percentage currently displayed.
    pub fn displayed(&self) -> u8 {
        *self.displayed.borrow()
    }

    /// Subscribe to displayed-value changes.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.displayed.subscribe()
    }

    /// Start animating, replacing any tween already running.
    ///
    /// The start value is published immediately. Must be called from within
    /// a tokio runtime.
    pub async fn start(&self, tween: ProgressTween) {
        let mut running = self.running.lock().await;
        if let Some(handle) = running.take() {
            handle.abort();
        }

        self.displayed.send_replace(tween.from);

        let displayed = Arc::clone(&self.displayed);
        let tick = self.tick;
        *running = Some(tokio::spawn(async move {
            let started = Instant::now();
            let mut interval = tokio::time::interval(tick);
            loop {
                interval.tick().await;
                let elapsed = started.elapsed();
                let value = tween.value_at(elapsed);
                displayed.send_replace(value);
                trace!(value, "progress frame");
                if tween.is_finished(elapsed) {
                    break;
                }
            }
        }));
    }

    /// Stop the running tween, leaving the displayed value where it is.
    pub async fn cancel(&self) {
        if let Some(handle) = self.running.lock().await.take() {
            handle.abort();
        }
    }

    /// Jump straight to `value` without animating.
    pub async fn set(&self, value: u8) {
        self.cancel().await;
        self.displayed.send_replace(value);
    }
}
