//! Station directory providers
//!
//! Remote directories that can be searched for stations.

pub mod radio_browser;
pub mod traits;
pub mod types;

// Re-exports
pub use radio_browser::RadioBrowserProvider;
pub use traits::StationProvider;
pub use types::SearchQuery;
