//! Event source for the TUI loop
//!
//! Merges two inputs: completions coming back from the [`Worker`](super::Worker)
//! and terminal input. Completions win so the screen never lags behind the
//! backend by more than one poll.

use super::message::Message;
use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use tracing::debug;

/// Something the UI loop has to react to
#[derive(Debug, Clone)]
pub enum Event {
    /// Poll interval elapsed without input
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// A background task finished
    Backend(Message),
}

/// Polls worker messages, then the terminal
#[derive(Debug)]
pub struct Handler {
    tick_rate: Duration,
    messages: Receiver<Message>,
    disconnected: bool,
}

impl Handler {
    /// Create a handler reading worker results from `messages`
    #[must_use]
    pub const fn new(tick_rate_ms: u64, messages: Receiver<Message>) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            messages,
            disconnected: false,
        }
    }

    /// A finished task, if one is waiting
    pub fn next_backend(&mut self) -> Option<Message> {
        if self.disconnected {
            return None;
        }
        match self.messages.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                debug!("Worker channel disconnected");
                self.disconnected = true;
                None
            }
        }
    }

    /// Wait for the next event.
    ///
    /// Key releases and repeats come back as ticks so each press acts once.
    ///
    /// # Errors
    ///
    /// Returns an error if polling the terminal fails
    pub fn next(&mut self) -> Result<Event> {
        if let Some(message) = self.next_backend() {
            return Ok(Event::Backend(message));
        }

        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        })
    }

    /// Terminal poll timeout
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}
