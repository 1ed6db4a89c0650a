//! Radio Browser API provider
//!
//! Implementation of `StationProvider` for the Radio Browser directory
//! (<https://www.radio-browser.info/>).

use crate::config::providers::RADIO_BROWSER_DEFAULT_SERVER;
use crate::data::types::Station;
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::StationProvider;
use super::types::SearchQuery;

use serde::Deserialize;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct RbStation {
    stationuuid: String,
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    tags: String,
}

/// Convert an empty string to None
fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl From<RbStation> for Station {
    fn from(rb: RbStation) -> Self {
        Station::new(rb.stationuuid, rb.name, rb.url)
            .with_location(non_empty(&rb.country), non_empty(&rb.state))
            .with_tags(non_empty(&rb.tags))
    }
}

// =============================================================================
// RadioBrowserProvider
// =============================================================================

/// Radio Browser API provider
///
/// Searches the [Radio Browser](https://www.radio-browser.info/) directory,
/// a free community database of internet radio stations.
pub struct RadioBrowserProvider {
    client: HttpClient,
    base_url: String,
}

impl RadioBrowserProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Self::with_base_url(RADIO_BROWSER_DEFAULT_SERVER)
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl StationProvider for RadioBrowserProvider {
    fn name(&self) -> &'static str {
        "Radio Browser"
    }

    fn id(&self) -> &'static str {
        "radio-browser"
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Station>> {
        let limit = query.limit.to_string();
        let offset = query.offset.to_string();

        let mut params: Vec<(&str, &str)> = vec![("limit", &limit), ("offset", &offset)];
        if let Some(ref name) = query.name {
            params.push(("name", name));
        }

        let rb_stations: Vec<RbStation> = self
            .client
            .get_json_with_query(&self.url("/json/stations/search"), &params)?;

        Ok(rb_stations.into_iter().map(Station::from).collect())
    }

    fn get_station(&self, id: &str) -> Result<Option<Station>> {
        let url = self.url(&format!("/json/stations/byuuid/{}", id));
        let rb_stations: Vec<RbStation> = self.client.get_json(&url)?;
        Ok(rb_stations.into_iter().next().map(Station::from))
    }
}

// =============================================================================
// Tests
// =============================================================================
