//! Application controller
//!
//! Owns the favorites store, search session, and player, and processes
//! commands from all presentation surfaces through a single crossbeam
//! channel. The loop itself is the cooperative scheduling model: all state
//! mutations happen here, page fetches run on worker threads and report
//! back as `InternalPageLoaded` commands, and the session's sequence check
//! discards anything stale.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use tracing::warn;

use crate::data::favorites::FavoritesStore;
use crate::data::types::Station;
use crate::error::Result;
use crate::player::{PlaybackBackend, Player};
use crate::providers::StationProvider;
use crate::search::{PageRequest, SearchSession, StationSearch};

use super::state::{AppCommand, AppSnapshot};

pub struct AppController {
    cmd_rx: Receiver<AppCommand>,
    cmd_tx: Sender<AppCommand>,
    shared_state: Arc<Mutex<AppSnapshot>>,
    favorites: FavoritesStore,
    search: StationSearch,
    session: SearchSession,
    player: Player,
}

impl AppController {
    pub fn new(
        cmd_rx: Receiver<AppCommand>,
        cmd_tx: Sender<AppCommand>,
        shared_state: Arc<Mutex<AppSnapshot>>,
        favorites: FavoritesStore,
        provider: Arc<dyn StationProvider>,
        backend: Box<dyn PlaybackBackend>,
    ) -> Self {
        Self {
            cmd_rx,
            cmd_tx,
            shared_state,
            favorites,
            search: StationSearch::new(provider),
            session: SearchSession::new(),
            player: Player::new(backend),
        }
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    pub fn run(&mut self) {
        self.sync_snapshot();

        loop {
            // Process commands (blocking with timeout so we can poll player events)
            match self.cmd_rx.recv_timeout(Duration::from_millis(50)) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            }

            self.poll_player_events();
        }

        if let Err(e) = self.player.stop() {
            warn!("failed to stop playback on shutdown: {e}");
        }
    }

    /// Handle a single command. Returns true if the loop should exit.
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Shutdown => return true,

            AppCommand::Play(station) => {
                let result = self.player.play(station);
                self.report(result);
            }
            AppCommand::Stop => {
                let result = self.player.stop();
                self.report(result);
            }
            AppCommand::Pause => {
                let result = self.player.pause();
                self.report(result);
            }
            AppCommand::Resume => {
                let result = self.player.resume();
                self.report(result);
            }

            AppCommand::AddFavorite(station) => {
                let result = self.favorites.add(station);
                self.report(result);
            }
            AppCommand::RemoveFavorite(id) => {
                let result = self.favorites.remove(&id);
                self.report(result);
            }
            AppCommand::RenameFavorite { id, name } => {
                // Surfaced, never silently swallowed
                let result = self.favorites.rename(&id, &name);
                self.report(result);
            }

            AppCommand::SetFilter(filter) => {
                self.session.set_filter(filter);
                if let Some(req) = self.session.next_page() {
                    self.spawn_fetch(req);
                }
                self.sync_snapshot();
            }
            AppCommand::LoadMore => {
                // Ignored while a fetch is in flight or the session is exhausted
                if let Some(req) = self.session.next_page() {
                    self.spawn_fetch(req);
                    self.sync_snapshot();
                }
            }
            AppCommand::InternalPageLoaded { seq, stations } => {
                self.session.apply_page(seq, stations);
                self.sync_snapshot();
            }
        }
        false
    }

    /// Fetch one page on a worker thread and report back via the channel
    ///
    /// A failed fetch comes back as an empty page; the session treats it as
    /// exhaustion, which is the documented user-visible behavior.
    fn spawn_fetch(&self, req: PageRequest) {
        let search = self.search.clone();
        let cmd_tx = self.cmd_tx.clone();

        let spawned = std::thread::Builder::new()
            .name("page-fetch".into())
            .spawn(move || {
                let stations = search.query(&req.query());
                let _ = cmd_tx.send(AppCommand::InternalPageLoaded {
                    seq: req.seq,
                    stations,
                });
            });
        if let Err(e) = spawned {
            warn!("failed to spawn page-fetch thread: {e}");
        }
    }

    /// Record a mutation outcome and refresh the snapshot
    ///
    /// The outcome replaces `last_error` either way: a failure surfaces it,
    /// a success clears any previous one. Snapshot syncs that carry no
    /// outcome (page loads, event polls) leave it untouched.
    fn report(&mut self, result: Result<()>) {
        let error = result.err().map(|e| e.to_string());
        self.sync_snapshot();
        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
        state.last_error = error;
    }

    fn poll_player_events(&mut self) {
        let events = self.player.poll_events();
        if events.is_empty() {
            return;
        }
        self.sync_snapshot();
        for event in &events {
            if let crate::player::PlayerEvent::Error(msg) = event {
                let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
                state.last_error = Some(msg.clone());
            }
        }
    }

    /// Project current component state into the shared snapshot
    fn sync_snapshot(&mut self) {
        let mut favorites: Vec<Station> = self.favorites.all().into_iter().cloned().collect();
        favorites.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
        state.playback = self.player.state();
        state.current_station = self.player.current().cloned();
        state.favorites = favorites;
        state.results = self.session.stations().to_vec();
        state.search_exhausted = self.session.is_exhausted();
        state.is_searching = self.session.is_loading();
    }
}
