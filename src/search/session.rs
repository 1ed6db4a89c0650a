//! Search session state machine
//!
//! One session spans the lifetime of an active name filter: it accumulates
//! fetched pages into an ordered list, serializes page fetches (at most one
//! in flight), and discards stale responses after a filter change via a
//! monotonic request sequence number.

use crate::config::providers::SEARCH_PAGE_SIZE;
use crate::data::types::Station;
use crate::providers::SearchQuery;
use tracing::debug;

/// A page fetch handed to a worker
///
/// `seq` ties the eventual response back to the session state that issued
/// it; `apply_page` rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub filter: String,
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    /// The provider query for this page
    pub fn query(&self) -> SearchQuery {
        let mut query = SearchQuery::new().limit(self.limit).offset(self.offset);
        if !self.filter.is_empty() {
            query = query.name(self.filter.clone());
        }
        query
    }
}

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No results yet, nothing in flight
    Idle,
    /// First page in flight
    Loading,
    /// At least one page accumulated, nothing in flight
    Populated,
    /// Follow-up page in flight
    LoadingMore,
    /// Last page was empty; only a filter change leaves this state
    Exhausted,
}

/// Accumulating state for one active filter value
pub struct SearchSession {
    filter: String,
    stations: Vec<Station>,
    exhausted: bool,
    page_size: usize,
    /// Bumped on every fetch start and every filter change
    seq: u64,
    /// Sequence number of the fetch currently in flight, if any
    in_flight: Option<u64>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::with_page_size(SEARCH_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            stations: Vec::new(),
            exhausted: false,
            page_size,
            seq: 0,
            in_flight: None,
        }
    }

    /// Change the active filter
    ///
    /// A different value resets the session: accumulated list cleared,
    /// offset back to 0, `exhausted` cleared, and any in-flight fetch
    /// invalidated (its response will fail the sequence check). Setting the
    /// same value again is a no-op.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.stations.clear();
        self.exhausted = false;
        self.in_flight = None;
        self.seq += 1;
    }

    /// Start the next page fetch
    ///
    /// Returns `None` while a fetch is already in flight (page fetches are
    /// serialized per session) or once the session is exhausted. The offset
    /// is always the accumulated count.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.exhausted {
            return None;
        }
        self.seq += 1;
        self.in_flight = Some(self.seq);
        Some(PageRequest {
            seq: self.seq,
            filter: self.filter.clone(),
            limit: self.page_size,
            offset: self.stations.len(),
        })
    }

    /// Apply a fetched page
    ///
    /// Returns `false` for stale responses (the filter changed, or the
    /// request was superseded); they are discarded without touching the
    /// accumulated list. An empty page marks the session exhausted; a failed
    /// fetch arrives here as an empty page and is indistinguishable by
    /// design.
    pub fn apply_page(&mut self, seq: u64, stations: Vec<Station>) -> bool {
        if self.in_flight != Some(seq) {
            debug!(seq, "discarding stale search page");
            return false;
        }
        self.in_flight = None;

        if stations.is_empty() {
            self.exhausted = true;
        } else {
            self.stations.extend(stations);
        }
        true
    }

    /// Current derived phase
    pub fn phase(&self) -> SessionPhase {
        if self.in_flight.is_some() {
            if self.stations.is_empty() {
                SessionPhase::Loading
            } else {
                SessionPhase::LoadingMore
            }
        } else if self.exhausted {
            SessionPhase::Exhausted
        } else if !self.stations.is_empty() {
            SessionPhase::Populated
        } else {
            SessionPhase::Idle
        }
    }

    /// Accumulated stations, in fetch order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Active filter value
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether the last fetched page was empty
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
