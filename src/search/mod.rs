//! Station search
//!
//! `StationSearch` wraps a directory provider and is the error boundary for
//! page fetches; `SearchSession` owns accumulation, pagination, and the
//! stale-response guard.

pub mod session;

pub use session::{PageRequest, SearchSession, SessionPhase};

use crate::data::types::Station;
use crate::providers::{SearchQuery, StationProvider};
use std::sync::Arc;
use tracing::warn;

/// Paginated lookup against a remote station directory
///
/// Network and decoding failures are caught here and converted to an empty
/// page; callers cannot distinguish a failed fetch from a genuine
/// end-of-results. This mirrors the intended user-visible behavior:
/// scrolling simply stops.
#[derive(Clone)]
pub struct StationSearch {
    provider: Arc<dyn StationProvider>,
}

impl StationSearch {
    pub fn new(provider: Arc<dyn StationProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one page; failures yield an empty sequence
    pub fn query(&self, query: &SearchQuery) -> Vec<Station> {
        match self.provider.search(query) {
            Ok(stations) => stations,
            Err(e) => {
                warn!(provider = self.provider.id(), "station search failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};

    struct FailingProvider;

    impl StationProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "Failing Provider"
        }

        fn id(&self) -> &'static str {
            "failing"
        }

        fn search(&self, _query: &SearchQuery) -> Result<Vec<Station>> {
            Err(AppError::Storage("simulated outage".to_string()))
        }

        fn get_station(&self, _id: &str) -> Result<Option<Station>> {
            Ok(None)
        }
    }

    struct FixedProvider(Vec<Station>);

    impl StationProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "Fixed Provider"
        }

        fn id(&self) -> &'static str {
            "fixed"
        }

        fn search(&self, query: &SearchQuery) -> Result<Vec<Station>> {
            Ok(self
                .0
                .iter()
                .skip(query.offset)
                .take(query.limit)
                .cloned()
                .collect())
        }

        fn get_station(&self, id: &str) -> Result<Option<Station>> {
            Ok(self.0.iter().find(|s| s.id == id).cloned())
        }
    }

    #[test]
    fn test_failure_becomes_empty_page() {
        let search = StationSearch::new(Arc::new(FailingProvider));
        let page = search.query(&SearchQuery::new().name("jazz"));
        assert!(page.is_empty());
    }

    #[test]
    fn test_successful_page_passes_through() {
        let stations = vec![
            Station::new("1", "One", "http://one"),
            Station::new("2", "Two", "http://two"),
        ];
        let search = StationSearch::new(Arc::new(FixedProvider(stations)));

        let page = search.query(&SearchQuery::new().limit(1).offset(1));
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "2");
    }
}
