//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::DistanceUnit;

/// Error returned when an environment override cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the journey tracker server.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Path to the JSON stop data file.
    pub stops_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// How long the progress bar takes to animate between values (milliseconds).
    pub progress_animation_ms: u64,

    /// Interval between animation frames (milliseconds).
    pub animation_tick_ms: u64,

    /// Unit distances are shown in when the server starts.
    pub default_unit: DistanceUnit,
}

impl TrackerConfig {
    /// Returns the progress animation length as a Duration.
    pub fn progress_animation(&self) -> Duration {
        Duration::from_millis(self.progress_animation_ms)
    }

    /// Returns the animation frame interval as a Duration.
    pub fn animation_tick(&self) -> Duration {
        Duration::from_millis(self.animation_tick_ms.max(1))
    }

    /// Defaults overridden by `JOURNEY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    ///
    /// Recognised keys: `JOURNEY_STOPS_PATH`, `JOURNEY_BIND_ADDR`,
    /// `JOURNEY_STATIC_DIR`, `JOURNEY_ANIMATION_MS`,
    /// `JOURNEY_ANIMATION_TICK_MS` and `JOURNEY_UNIT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("JOURNEY_STOPS_PATH") {
            config.stops_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("JOURNEY_STATIC_DIR") {
            config.static_dir = dir;
        }
        if let Some(addr) = lookup("JOURNEY_BIND_ADDR") {
            config.bind_addr = parse_value("JOURNEY_BIND_ADDR", addr)?;
        }
        if let Some(ms) = lookup("JOURNEY_ANIMATION_MS") {
            config.progress_animation_ms = parse_value("JOURNEY_ANIMATION_MS", ms)?;
        }
        if let Some(ms) = lookup("JOURNEY_ANIMATION_TICK_MS") {
            config.animation_tick_ms = parse_value("JOURNEY_ANIMATION_TICK_MS", ms)?;
        }
        if let Some(unit) = lookup("JOURNEY_UNIT") {
            config.default_unit = parse_value("JOURNEY_UNIT", unit)?;
        }

        Ok(config)
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        })
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            stops_path: PathBuf::from("data/stops.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
            progress_animation_ms: 1000, // 1 second
            animation_tick_ms: 16,       // ~60 frames per second
            default_unit: DistanceUnit::Kilometers,
        }
    }
}
