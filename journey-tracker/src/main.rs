use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use journey_tracker::config::TrackerConfig;
use journey_tracker::domain::JourneyState;
use journey_tracker::session::JourneySession;
use journey_tracker::stops::load_stops;
use journey_tracker::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match TrackerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load stops (fail fast if unavailable)
    let stops = match load_stops(&config.stops_path) {
        Ok(stops) => stops,
        Err(e) => {
            error!("failed to load stops: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut journey = match JourneyState::new(stops) {
        Ok(journey) => journey,
        Err(e) => {
            error!("cannot start journey: {e}");
            return ExitCode::FAILURE;
        }
    };
    journey.set_unit_preference(config.default_unit);

    info!(
        stops = journey.stops().len(),
        total_km = journey.total_distance(),
        "journey ready"
    );

    // Build app state
    let session = JourneySession::new(journey, config.progress_animation());
    let state = AppState::new(session, config.animation_tick());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Journey Tracker listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health           - Health check");
    info!("  GET  /journey          - Journey snapshot");
    info!("  POST /journey/advance  - Move to the next stop");
    info!("  POST /journey/reset    - Return to the first stop");
    info!("  POST /journey/units    - Toggle or set the distance unit");
    info!("  GET  /journey/progress - Animated progress value");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
