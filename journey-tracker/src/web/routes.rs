//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::DistanceUnit;
use crate::session::{IntentOutcome, JourneySession};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/journey", get(journey_snapshot))
        .route("/journey/advance", post(advance_journey))
        .route("/journey/reset", post(reset_journey))
        .route("/journey/units", post(change_units))
        .route("/journey/progress", get(displayed_progress))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Journey page.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.lock().await;
    render_page(&state, &session, IntentOutcome::default())
}

/// Current journey state as JSON.
async fn journey_snapshot(State(state): State<AppState>) -> Json<JourneySnapshot> {
    let session = state.session.lock().await;
    Json(JourneySnapshot::from_state(session.journey()))
}

/// Percentage the progress animation is currently showing.
async fn displayed_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let target = state.session.lock().await.journey().progress_percent();
    Json(ProgressResponse {
        displayed: state.animator.displayed(),
        target,
    })
}

/// Move to the next stop.
async fn advance_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.advance();
    respond(&state, &session, &headers, outcome).await
}

/// Return to the first stop.
async fn reset_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.reset();
    respond(&state, &session, &headers, outcome).await
}

/// Set the distance unit, or toggle it when none is given.
async fn change_units(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<UnitRequest>,
) -> Result<Response, AppError> {
    // Parse optional unit
    let unit = req
        .unit
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(str::parse::<DistanceUnit>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let mut session = state.session.lock().await;
    match unit {
        Some(unit) => session.set_unit(unit),
        None => {
            session.toggle_units();
        }
    }
    respond(&state, &session, &headers, IntentOutcome::default()).await
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("No route for {}", uri.path()),
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Start any animation the intent produced, then render the new state.
async fn respond(
    state: &AppState,
    session: &JourneySession,
    headers: &HeaderMap,
    outcome: IntentOutcome,
) -> Result<Response, AppError> {
    if let Some(tween) = outcome.tween {
        debug!(from = tween.from, to = tween.to, "animating progress");
        state.animator.start(tween).await;
    }

    // Return HTML or JSON based on Accept header
    if accepts_html(headers) {
        render_page(state, session, outcome)
    } else {
        Ok(Json(IntentResponse::new(session.journey(), outcome)).into_response())
    }
}

fn render_page(
    state: &AppState,
    session: &JourneySession,
    outcome: IntentOutcome,
) -> Result<Response, AppError> {
    let journey = JourneyView::from_state(session.journey());
    let bar_from = outcome
        .tween
        .map(|t| t.from)
        .unwrap_or(journey.progress_percent);

    let template = JourneyPageTemplate {
        journey,
        notice: outcome.notice.map(|n| n.message().to_string()),
        bar_from,
        animation_ms: u64::try_from(state.animation.as_millis()).unwrap_or(u64::MAX),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
