//! Data persistence
//!
//! Station types, JSON file storage, and the favorites store.

pub mod favorites;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::{FavoritesStore, SubscriptionId};
pub use storage::{config_dir, data_path};
pub use types::Station;
