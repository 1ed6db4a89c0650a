//! Configuration constants

/// Application metadata
pub mod app {
    /// Application name (used for the config directory, user agent, etc.)
    pub const NAME: &str = "wavedial";
}

/// Provider-related configuration
pub mod providers {
    /// Default Radio Browser API server
    pub const RADIO_BROWSER_DEFAULT_SERVER: &str = "https://de1.api.radio-browser.info";

    /// Search results page size (offset pagination steps by this amount)
    pub const SEARCH_PAGE_SIZE: usize = 10;
}

/// Network configuration
pub mod network {
    /// User agent sent with every directory request
    pub const USER_AGENT: &str = concat!("wavedial/", env!("CARGO_PKG_VERSION"));

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
