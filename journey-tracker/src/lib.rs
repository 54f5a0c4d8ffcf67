//! Journey progress tracker.
//!
//! A web application that follows a traveller through an ordered list of
//! stops, showing how far they have come, how far is left, and a short
//! preview of the stops around them.

pub mod config;
pub mod domain;
pub mod session;
pub mod stops;
pub mod tween;
pub mod web;
