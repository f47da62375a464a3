//! Error types for the selection and launch controllers

use thiserror::Error;

/// Recoverable conditions raised by the lobby controllers.
///
/// None of these are fatal: each leaves the controller that raised it in the
/// state it was in before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// A group already holds the maximum number of agents.
    #[error("You can select up to {limit} agents for group chat.")]
    SelectionLimitExceeded {
        /// The group-size cap that was hit.
        limit: usize,
    },

    /// A group launch was attempted with nothing selected.
    #[error("Please select at least one agent for group chat.")]
    EmptySelection,

    /// A single launch or creation was attempted without an agent name.
    #[error("An agent name is required.")]
    MissingAgentName,

    /// A dialog operation was attempted while no dialog is open.
    #[error("No agent dialog is open.")]
    NoDialogOpen,

    /// A creation was submitted while the dialog is not in creation mode.
    #[error("The agent dialog is not creating a new agent.")]
    NotCreating,

    /// Fetching the agent catalog from the backend failed.
    #[error("Failed to load agents: {0}")]
    UpstreamFetchFailed(String),

    /// Creating an agent on the backend failed.
    #[error("Error creating the agent: {0}")]
    UpstreamCreateFailed(String),
}

/// Convenience alias for controller results.
pub type Result<T> = std::result::Result<T, LobbyError>;
