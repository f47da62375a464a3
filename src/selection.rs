//! Chat mode and group selection

use crate::error::{LobbyError, Result};
use std::fmt;
use tracing::debug;

/// Maximum number of agents in a group chat
pub const MAX_GROUP_SIZE: usize = 3;

/// Whether the user is assembling a one-on-one or a group session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatMode {
    /// One agent, chosen through the view dialog
    #[default]
    Single,
    /// Up to [`MAX_GROUP_SIZE`] agents, chosen by toggling
    Group,
}

impl ChatMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Group,
            Self::Group => Self::Single,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Single => "Single",
            Self::Group => "Group",
        };
        write!(f, "{s}")
    }
}

/// Outcome of a successful [`SelectionController::toggle_agent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The agent joined the selection
    Added,
    /// The agent left the selection
    Removed,
}

/// Owns the chat mode and the ordered set of selected agent names.
///
/// `toggle_agent` is the only way to grow the selection, so the size cap
/// holds no matter how the presentation layer gates its checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    mode: ChatMode,
    selected: Vec<String>,
}

impl SelectionController {
    /// Start in single mode with nothing selected
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: ChatMode::Single,
            selected: Vec::new(),
        }
    }

    /// Current chat mode
    #[must_use]
    pub const fn mode(&self) -> ChatMode {
        self.mode
    }

    /// Switch chat mode. The selection survives the switch.
    pub fn set_mode(&mut self, mode: ChatMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "Chat mode changed");
        }
        self.mode = mode;
    }

    /// Flip between single and group mode, returning the new mode
    pub fn toggle_mode(&mut self) -> ChatMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Add the agent if absent, remove it if present.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::SelectionLimitExceeded`] when adding would grow
    /// the selection past [`MAX_GROUP_SIZE`]; the selection is unchanged.
    pub fn toggle_agent(&mut self, name: &str) -> Result<Toggle> {
        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
            debug!(agent = name, "Agent deselected");
            return Ok(Toggle::Removed);
        }

        if self.selected.len() >= MAX_GROUP_SIZE {
            debug!(agent = name, "Selection full, add rejected");
            return Err(LobbyError::SelectionLimitExceeded {
                limit: MAX_GROUP_SIZE,
            });
        }

        self.selected.push(name.to_string());
        debug!(agent = name, count = self.selected.len(), "Agent selected");
        Ok(Toggle::Added)
    }

    /// Whether the agent is in the selection
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Whether the selection is at the cap
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.selected.len() >= MAX_GROUP_SIZE
    }

    /// Whether toggling this agent would be accepted
    #[must_use]
    pub fn can_toggle(&self, name: &str) -> bool {
        self.is_selected(name) || !self.is_full()
    }

    /// Selected agent names in insertion order
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Number of selected agents
    #[must_use]
    pub const fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop every selected agent
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
