//! Playback control
//!
//! The audio device itself is an external collaborator, modeled by the
//! [`PlaybackBackend`] trait. [`Player`] enforces the single-handle rule: at
//! most one stream is active, and switching stations tears down the
//! previous handle before starting the new one.

use crate::data::types::Station;
use crate::error::Result;

/// Events emitted by a playback backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Started,
    Paused,
    Resumed,
    Stopped,
    /// The stream ended on its own (end-of-stream notification)
    Ended,
    Error(String),
}

/// Coarse playback state for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// An audio playback handle constructed from a stream URL
///
/// Implementations wrap whatever actually produces sound (an OS media
/// player, a browser audio element, a test double). Events are polled by
/// the owning loop rather than delivered by callback.
pub trait PlaybackBackend: Send {
    /// Start playing the given stream URL, replacing any current stream
    fn start(&mut self, url: &str) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    fn resume(&mut self) -> Result<()>;

    /// Stop and tear down the current stream (no-op when idle)
    fn stop(&mut self) -> Result<()>;

    /// Drain one pending event, if any
    fn poll_event(&mut self) -> Option<PlayerEvent>;
}

/// Single-stream playback manager
pub struct Player {
    backend: Box<dyn PlaybackBackend>,
    current: Option<Station>,
    state: PlaybackState,
}

impl Player {
    pub fn new(backend: Box<dyn PlaybackBackend>) -> Self {
        Self {
            backend,
            current: None,
            state: PlaybackState::Stopped,
        }
    }

    /// Play a station, tearing down the previous handle first
    ///
    /// On any failure the player is left stopped with no current station;
    /// it never reports the torn-down stream as still playing.
    pub fn play(&mut self, station: Station) -> Result<()> {
        if self.current.is_some() {
            self.current = None;
            self.state = PlaybackState::Stopped;
            self.backend.stop()?;
        }
        if let Err(e) = self.backend.start(&station.url) {
            self.current = None;
            self.state = PlaybackState::Stopped;
            return Err(e);
        }
        self.current = Some(station);
        self.state = PlaybackState::Playing;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            self.backend.pause()?;
            self.state = PlaybackState::Paused;
        }
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if self.state == PlaybackState::Paused {
            self.backend.resume()?;
            self.state = PlaybackState::Playing;
        }
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        if self.current.is_some() {
            self.backend.stop()?;
            self.current = None;
            self.state = PlaybackState::Stopped;
        }
        Ok(())
    }

    /// Drain backend events, updating state
    ///
    /// An `Ended` event clears the current station.
    pub fn poll_events(&mut self) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.backend.poll_event() {
            match event {
                PlayerEvent::Ended => {
                    self.current = None;
                    self.state = PlaybackState::Stopped;
                }
                PlayerEvent::Error(_) => {
                    self.current = None;
                    self.state = PlaybackState::Stopped;
                }
                PlayerEvent::Paused => self.state = PlaybackState::Paused,
                PlayerEvent::Resumed | PlayerEvent::Started => {
                    self.state = PlaybackState::Playing
                }
                PlayerEvent::Stopped => self.state = PlaybackState::Stopped,
            }
            events.push(event);
        }
        events
    }

    /// The station currently loaded, if any
    pub fn current(&self) -> Option<&Station> {
        self.current.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }
}
