//! The list of agents available to pick from

use crate::agent::Agent;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Identifies one catalog refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// Sequence number of the refresh
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Agents fetched from the backend, unique by name.
///
/// Refreshes are numbered. A result only lands if it belongs to the most
/// recently started refresh, so a slow response cannot overwrite a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentCatalog {
    agents: Vec<Agent>,
    latest: u64,
    loading: bool,
}

impl AgentCatalog {
    /// An empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            agents: Vec::new(),
            latest: 0,
            loading: false,
        }
    }

    /// Replace the whole list. Later duplicates of a name are dropped.
    pub fn replace(&mut self, agents: Vec<Agent>) {
        let mut seen = HashSet::new();
        let before = agents.len();
        self.agents = agents
            .into_iter()
            .filter(|agent| seen.insert(agent.name.clone()))
            .collect();
        if self.agents.len() != before {
            warn!(
                dropped = before - self.agents.len(),
                "Catalog contained duplicate agent names"
            );
        }
    }

    /// Mark a new refresh as in flight and return its ticket
    pub const fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest += 1;
        self.loading = true;
        RefreshTicket(self.latest)
    }

    /// Apply a successful refresh. Returns `false` if the ticket is stale.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, agents: Vec<Agent>) -> bool {
        if ticket.0 != self.latest {
            debug!(ticket = ticket.0, latest = self.latest, "Dropping stale catalog");
            return false;
        }
        self.loading = false;
        self.replace(agents);
        debug!(count = self.agents.len(), "Catalog refreshed");
        true
    }

    /// Record a failed refresh; the current list is kept.
    /// Returns `false` if the ticket is stale.
    pub const fn fail_refresh(&mut self, ticket: RefreshTicket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        true
    }

    /// Whether the latest refresh has not completed yet
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Agent at a list position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    /// Agent with the given name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Iterate agents in display order
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Number of agents
    #[must_use]
    pub const fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
