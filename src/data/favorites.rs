//! Favorites store
//!
//! Keyed-map CRUD over one persisted JSON record. Every mutation re-reads
//! the persisted file before mutating (no reliance on possibly-stale
//! in-memory state), persists synchronously, then notifies observers with
//! the full updated collection. The in-memory map is only a projection for
//! display; `find` always answers from the persisted state.

use crate::data::storage;
use crate::data::types::Station;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Favorites data file name
const FAVORITES_FILE: &str = "favorites.json";

/// Favorites file format version for migrations
const FAVORITES_VERSION: u32 = 1;

/// On-disk favorites record
///
/// Values are `Option<Station>` so that tombstone entries (`"id": null`)
/// written by older builds deserialize; read paths treat them identically to
/// absence. This store itself always deletes keys and never writes
/// tombstones.
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    stations: HashMap<String, Option<Station>>,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: FAVORITES_VERSION,
            stations: HashMap::new(),
        }
    }
}

/// Handle returned by [`FavoritesStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&HashMap<String, Station>) + Send>;

/// The user's saved stations, backed by one persisted JSON record
///
/// Constructed once with an explicit storage path and passed by handle to
/// all consumers; substitute a temp path for isolated tests.
pub struct FavoritesStore {
    path: PathBuf,
    stations: HashMap<String, Station>,
    observers: Vec<(u64, Observer)>,
    next_observer: u64,
}

impl FavoritesStore {
    /// Open the store at the default config location
    pub fn open() -> Result<Self> {
        let path = storage::data_path(FAVORITES_FILE)?;
        Ok(Self::open_at(path))
    }

    /// Open the store at a specific path
    ///
    /// A missing or malformed file yields an empty collection; malformed
    /// payloads are logged and treated as recoverable rather than fatal.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stations = read_collection(&path).unwrap_or_else(|e| {
            warn!("failed to read favorites from {:?}: {e}", path);
            HashMap::new()
        });
        Self {
            path,
            stations,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Storage path backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a station by id in the current persisted state
    ///
    /// Returns `None` if the station was never favorited or was removed.
    pub fn find(&self, id: &str) -> Option<Station> {
        match read_collection(&self.path) {
            Ok(stations) => stations.get(id).cloned(),
            Err(e) => {
                warn!("failed to read favorites from {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Insert or overwrite the entry for `station.id`
    pub fn add(&mut self, station: Station) -> Result<()> {
        let mut stations = read_collection(&self.path)?;
        stations.insert(station.id.clone(), station);
        self.persist(stations)
    }

    /// Remove the entry for `id` (absent id is a no-op)
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let mut stations = read_collection(&self.path)?;
        stations.remove(id);
        self.persist(stations)
    }

    /// Rename a favorited station
    ///
    /// Mutates only the `name` field. Fails with [`AppError::NotFavorited`]
    /// if `id` has no current entry, and with [`AppError::InvalidName`] if
    /// `new_name` is empty or whitespace; the collection is left unchanged
    /// in both cases. Calling twice with the same name is idempotent.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::InvalidName(
                "station name must not be empty".to_string(),
            ));
        }

        let mut stations = read_collection(&self.path)?;
        let station = stations
            .get_mut(id)
            .ok_or_else(|| AppError::NotFavorited(id.to_string()))?;
        station.name = new_name.to_string();
        self.persist(stations)
    }

    /// Persist the collection, update the projection, notify observers
    fn persist(&mut self, stations: HashMap<String, Station>) -> Result<()> {
        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            stations: stations
                .iter()
                .map(|(id, s)| (id.clone(), Some(s.clone())))
                .collect(),
        };
        storage::save_to(&self.path, &file)?;

        self.stations = stations;
        for (_, observer) in &self.observers {
            observer(&self.stations);
        }
        Ok(())
    }

    /// Register an observer called with the full collection after every
    /// successful mutation
    pub fn subscribe(
        &mut self,
        observer: impl Fn(&HashMap<String, Station>) + Send + 'static,
    ) -> SubscriptionId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        SubscriptionId(id)
    }

    /// Remove an observer; no further notifications are delivered to it
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(obs_id, _)| *obs_id != id.0);
    }

    /// All favorited stations (in-memory projection, no ordering guarantee)
    pub fn all(&self) -> Vec<&Station> {
        self.stations.values().collect()
    }

    /// Number of favorited stations
    pub fn count(&self) -> usize {
        self.stations.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Read the persisted collection, dropping tombstone entries
///
/// A malformed payload is recoverable: it is logged and replaced by an
/// empty collection. I/O failures other than "not found" propagate.
fn read_collection(path: &Path) -> Result<HashMap<String, Station>> {
    let file = match storage::load_from::<FavoritesFile>(path) {
        Ok(file) => file.unwrap_or_default(),
        Err(AppError::MalformedData(msg)) => {
            warn!("malformed favorites payload, starting empty: {msg}");
            FavoritesFile::default()
        }
        Err(e) => return Err(e),
    };

    Ok(file
        .stations
        .into_iter()
        .filter_map(|(id, station)| station.map(|s| (id, s)))
        .collect())
}
