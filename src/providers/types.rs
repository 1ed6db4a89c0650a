//! Shared provider types

use crate::config::providers::SEARCH_PAGE_SIZE;

/// Parameters for one page fetch against a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Name filter, passed through to the directory (substring semantics
    /// are the directory's, opaque to this crate)
    pub name: Option<String>,
    /// Page size bound
    pub limit: usize,
    /// Page start (count of items already accumulated)
    pub offset: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            limit: SEARCH_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = SearchQuery::new();
        assert_eq!(query.name, None);
        assert_eq!(query.limit, SEARCH_PAGE_SIZE);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new().name("jazz").limit(10).offset(20);
        assert_eq!(query.name.as_deref(), Some("jazz"));
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 20);
    }
}
