//! Station provider trait
//!
//! Defines the interface that all station directory providers must implement.

use crate::data::types::Station;
use crate::error::Result;

use super::types::SearchQuery;

/// A source of radio station listings
pub trait StationProvider: Send + Sync {
    /// Display name for the provider (e.g., "Radio Browser")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "radio-browser")
    fn id(&self) -> &'static str;

    /// Fetch one page of stations
    ///
    /// `query.name` is passed through to the directory's own matching
    /// semantics; `limit`/`offset` select the page.
    fn search(&self, query: &SearchQuery) -> Result<Vec<Station>>;

    /// Look up a single station by its directory ID
    fn get_station(&self, id: &str) -> Result<Option<Station>>;
}
