//! Shared application state and commands
//!
//! `AppCommand` is the unified command type sent by any presentation
//! surface. `AppSnapshot` is the shared state those surfaces render from.

use crate::data::types::Station;
use crate::player::PlaybackState;

/// Commands sent by presentation surfaces
#[derive(Debug)]
pub enum AppCommand {
    // Playback
    Play(Station),
    Stop,
    Pause,
    Resume,

    // Favorites
    AddFavorite(Station),
    RemoveFavorite(String),
    RenameFavorite { id: String, name: String },

    // Search
    SetFilter(String),
    /// Scroll-driven "need more" signal
    LoadMore,

    // Shutdown the controller loop
    Shutdown,

    /// Internal: page fetched on a worker thread (not sent by surfaces)
    InternalPageLoaded { seq: u64, stations: Vec<Station> },
}

/// Snapshot of app state, shared between the controller and all surfaces
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    pub playback: PlaybackState,
    /// Station currently loaded in the player
    pub current_station: Option<Station>,
    /// Favorites projection, sorted by name for display
    pub favorites: Vec<Station>,
    /// Accumulated search results for the active filter
    pub results: Vec<Station>,
    /// The last fetched page was empty; scrolling stops
    pub search_exhausted: bool,
    /// A page fetch is in flight
    pub is_searching: bool,
    /// Last caller-visible failure (favorites mutations, playback); kept
    /// until the next mutation outcome replaces it
    pub last_error: Option<String>,
}
