//! Wavedial — internet radio station browser
//!
//! Station directory search, locally persisted favorites, and playback
//! control. The presentation layer is not part of this crate: hosts embed
//! [`app::AppController`] behind its command channel, or use the components
//! ([`data::FavoritesStore`], [`search::SearchSession`], [`player::Player`])
//! directly.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod player;
pub mod providers;
pub mod search;
