//! The view/create agent dialog

use crate::agent::{Agent, DraftField};
use crate::error::{LobbyError, Result};
use tracing::debug;

/// What the agent dialog is showing, if anything.
///
/// The payload of an open dialog is the draft being displayed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    /// No dialog on screen
    #[default]
    Closed,
    /// Showing an existing catalog agent
    Viewing(Agent),
    /// Editing a new agent before submission
    Creating(Agent),
}

impl DialogState {
    /// Whether a dialog is on screen
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the dialog is creating a new agent
    #[must_use]
    pub const fn is_creating(&self) -> bool {
        matches!(self, Self::Creating(_))
    }

    /// The draft held by an open dialog
    #[must_use]
    pub const fn draft(&self) -> Option<&Agent> {
        match self {
            Self::Closed => None,
            Self::Viewing(agent) | Self::Creating(agent) => Some(agent),
        }
    }

    const fn draft_mut(&mut self) -> Option<&mut Agent> {
        match self {
            Self::Closed => None,
            Self::Viewing(agent) | Self::Creating(agent) => Some(agent),
        }
    }
}

/// Owns the dialog state and the field the user is typing into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentDialogController {
    state: DialogState,
    focus: DraftField,
}

impl AgentDialogController {
    /// A closed dialog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DialogState::Closed,
            focus: DraftField::Name,
        }
    }

    /// Current dialog state
    #[must_use]
    pub const fn state(&self) -> &DialogState {
        &self.state
    }

    /// Field that receives typed characters
    #[must_use]
    pub const fn focus(&self) -> DraftField {
        self.focus
    }

    /// Whether a dialog is on screen
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Show an existing agent. Any previous draft is replaced, not merged.
    pub fn open_for_view(&mut self, agent: Agent) {
        debug!(agent = %agent.name, "Opening agent dialog for view");
        self.state = DialogState::Viewing(agent);
        self.focus = DraftField::Name;
    }

    /// Start a blank draft for a new agent
    pub fn open_for_create(&mut self) {
        debug!("Opening agent dialog for create");
        self.state = DialogState::Creating(Agent::default());
        self.focus = DraftField::Name;
    }

    /// Replace one field of the open draft. No validation happens here.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::NoDialogOpen`] if the dialog is closed.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        let draft = self.state.draft_mut().ok_or(LobbyError::NoDialogOpen)?;
        *draft.field_mut(field) = value.into();
        Ok(())
    }

    /// Append a character to a field of the open draft
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::NoDialogOpen`] if the dialog is closed.
    pub fn push_char(&mut self, field: DraftField, c: char) -> Result<()> {
        let draft = self.state.draft_mut().ok_or(LobbyError::NoDialogOpen)?;
        draft.field_mut(field).push(c);
        Ok(())
    }

    /// Remove the last character of a field of the open draft
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::NoDialogOpen`] if the dialog is closed.
    pub fn pop_char(&mut self, field: DraftField) -> Result<()> {
        let draft = self.state.draft_mut().ok_or(LobbyError::NoDialogOpen)?;
        draft.field_mut(field).pop();
        Ok(())
    }

    /// Move typing focus to the next field
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Close the dialog. Already-submitted creations are not affected.
    pub fn close(&mut self) {
        if self.state.is_open() {
            debug!("Closing agent dialog");
        }
        self.state = DialogState::Closed;
        self.focus = DraftField::Name;
    }

    /// Hand the creation draft over for submission and close the dialog.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::NotCreating`] unless the dialog is creating, and
    /// [`LobbyError::MissingAgentName`] if the draft has a blank name. The
    /// dialog stays open in both cases.
    pub fn submit_create(&mut self) -> Result<Agent> {
        let DialogState::Creating(draft) = &self.state else {
            return Err(LobbyError::NotCreating);
        };
        if !draft.has_name() {
            return Err(LobbyError::MissingAgentName);
        }

        let DialogState::Creating(draft) = std::mem::take(&mut self.state) else {
            return Err(LobbyError::NotCreating);
        };
        self.focus = DraftField::Name;
        debug!(agent = %draft.name, "Submitting agent draft");
        Ok(draft)
    }
}
