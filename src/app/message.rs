//! Work requested by the app and the results that come back

use crate::agent::Agent;
use crate::catalog::RefreshTicket;
use crate::config::Identity;

/// A backend call the app wants made off the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Reload the catalog; the result is tagged with the ticket
    FetchCatalog(RefreshTicket),
    /// Register the signed-in user
    RegisterUser(Identity),
    /// Submit a new agent created in the dialog
    CreateAgent {
        /// Session epoch at submission time
        epoch: u64,
        /// The submitted draft
        draft: Agent,
        /// User the agent belongs to
        identity: Option<Identity>,
    },
}

/// Completion of a [`Task`], applied on the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Catalog fetched
    CatalogLoaded {
        /// Ticket of the refresh that produced this list
        ticket: RefreshTicket,
        /// Agents in display order
        agents: Vec<Agent>,
    },
    /// Catalog fetch failed
    CatalogFailed {
        /// Ticket of the failed refresh
        ticket: RefreshTicket,
        /// Human-readable cause
        error: String,
    },
    /// User registration accepted
    UserRegistered(String),
    /// User registration refused with `400`
    UserRejected(String),
    /// User registration failed for another reason
    UserFailed(String),
    /// Agent creation succeeded
    AgentCreated {
        /// Epoch the creation was submitted in
        epoch: u64,
        /// Name of the new agent
        name: String,
        /// Backend confirmation message
        message: String,
    },
    /// Agent creation failed
    AgentCreateFailed {
        /// Epoch the creation was submitted in
        epoch: u64,
        /// Human-readable cause
        error: String,
    },
}
