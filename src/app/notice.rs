//! Transient user-facing notices

use std::collections::VecDeque;

/// How many ticks a notice stays on screen
pub const NOTICE_TICKS: u16 = 40;

/// Oldest notices are dropped beyond this many
const MAX_QUEUED: usize = 5;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Status information
    Info,
    /// A completed action
    Success,
    /// A rejected action the user can correct
    Warning,
    /// A failed backend call
    Error,
}

/// A message shown in the status bar for a while
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub text: String,
    remaining: u16,
}

impl Notice {
    /// Create a notice with the default lifetime
    #[must_use]
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            remaining: NOTICE_TICKS,
        }
    }

    /// Informational notice
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    /// Success notice
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    /// Warning notice
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    /// Error notice
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

/// Queue of notices; only the front one is displayed and ages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    /// An empty queue
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queue a notice
    pub fn push(&mut self, notice: Notice) {
        if self.queue.len() == MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
    }

    /// Notice currently on screen
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// Age the displayed notice by one tick, dropping it when it expires
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.remaining = front.remaining.saturating_sub(1);
            if front.remaining == 0 {
                self.queue.pop_front();
            }
        }
    }

    /// Drop the displayed notice
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    /// Number of queued notices
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterate queued notices, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }
}
