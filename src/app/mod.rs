//! Application wiring
//!
//! Command/state types and the controller loop that ties favorites, search,
//! and playback together for a presentation layer.

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{AppCommand, AppSnapshot};
