//! Web layer for the journey tracker.
//!
//! Renders the journey page and exposes the advance, reset and unit intents
//! over HTTP, as HTML for browsers and JSON for everything else.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
