//! Stop data loading.
//!
//! Stops are read once at startup from a JSON document of the form
//! `{"stops": [...]}` and validated before a journey is built from them.

mod error;
mod loader;

pub use error::StopsError;
pub use loader::{StopsFile, load_stops, parse_stops};
