//! Common data types
//!
//! The station record shared by search results, favorites, and playback.

use serde::{Deserialize, Serialize};

/// A radio station entry from the remote directory
///
/// `id` is the directory's opaque identifier (`stationuuid`), stable across
/// sessions. Once a station is favorited the record is a local copy: `name`
/// may be edited locally, everything else is immutable and never re-synced
/// from upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Opaque stable identifier assigned by the remote directory
    pub id: String,
    /// Display name (locally mutable once favorited)
    pub name: String,
    /// Stream URL
    pub url: String,
    /// Country the station broadcasts from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State/region within the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Comma-separated genre tags from the directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Station {
    /// Create a new station with minimal info
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            country: None,
            state: None,
            tags: None,
        }
    }

    /// Set country and state
    pub fn with_location(mut self, country: Option<String>, state: Option<String>) -> Self {
        self.country = country;
        self.state = state;
        self
    }

    /// Set genre tags
    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = tags;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_creation() {
        let station = Station::new("uuid-1", "Test Radio", "http://example.com/stream");
        assert_eq!(station.id, "uuid-1");
        assert_eq!(station.name, "Test Radio");
        assert_eq!(station.url, "http://example.com/stream");
        assert_eq!(station.country, None);
        assert_eq!(station.state, None);
        assert_eq!(station.tags, None);
    }

    #[test]
    fn test_station_builder() {
        let station = Station::new("uuid-2", "Test", "http://test.com")
            .with_location(Some("Germany".to_string()), Some("Bavaria".to_string()))
            .with_tags(Some("rock,pop".to_string()));

        assert_eq!(station.country, Some("Germany".to_string()));
        assert_eq!(station.state, Some("Bavaria".to_string()));
        assert_eq!(station.tags, Some("rock,pop".to_string()));
    }

    #[test]
    fn test_station_serde_skips_absent_fields() {
        let station = Station::new("uuid-3", "Minimal", "http://min.com");
        let json = serde_json::to_string(&station).unwrap();
        assert!(!json.contains("country"));
        assert!(!json.contains("state"));
        assert!(!json.contains("tags"));

        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, station);
    }

    #[test]
    fn test_station_deserialize_missing_optional_fields() {
        let json = r#"{"id": "uuid-4", "name": "Bare", "url": "http://bare.com"}"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.name, "Bare");
        assert_eq!(station.country, None);
    }
}
