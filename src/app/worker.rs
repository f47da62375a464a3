//! Runs backend tasks on background threads.
//!
//! Each task gets its own short-lived thread that performs one blocking call
//! and sends exactly one [`Message`] back. The UI thread drains the channel
//! and applies messages through [`App::apply`](super::App::apply), so the
//! app state only ever has one writer.

use super::message::{Message, Task};
use crate::api::{AgentService, Registration};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

/// Spawns task threads that report back over a channel
#[derive(Clone)]
pub struct Worker {
    service: Arc<dyn AgentService>,
    tx: Sender<Message>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").finish_non_exhaustive()
    }
}

impl Worker {
    /// Create a worker and the receiving end of its message channel
    #[must_use]
    pub fn new(service: Arc<dyn AgentService>) -> (Self, Receiver<Message>) {
        let (tx, rx) = mpsc::channel();
        (Self { service, tx }, rx)
    }

    /// Run a task on a new thread
    pub fn dispatch(&self, task: Task) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let message = execute(service.as_ref(), task);
            if tx.send(message).is_err() {
                debug!("Message receiver dropped before task completed");
            }
        })
    }

    /// Run every task on its own thread
    pub fn dispatch_all(&self, tasks: impl IntoIterator<Item = Task>) -> Vec<JoinHandle<()>> {
        tasks.into_iter().map(|task| self.dispatch(task)).collect()
    }
}

/// Perform a task synchronously and describe its outcome
pub fn execute(service: &dyn AgentService, task: Task) -> Message {
    match task {
        Task::FetchCatalog(ticket) => match service.fetch_agents() {
            Ok(agents) => {
                debug!(ticket = ticket.get(), count = agents.len(), "Fetched agents");
                Message::CatalogLoaded { ticket, agents }
            }
            Err(e) => {
                warn!(ticket = ticket.get(), "Failed to fetch agents: {e}");
                Message::CatalogFailed {
                    ticket,
                    error: e.to_string(),
                }
            }
        },
        Task::RegisterUser(identity) => match service.register_user(&identity) {
            Ok(Registration::Registered(message)) => Message::UserRegistered(message),
            Ok(Registration::Rejected(reason)) => Message::UserRejected(reason),
            Err(e) => Message::UserFailed(e.to_string()),
        },
        Task::CreateAgent {
            epoch,
            draft,
            identity,
        } => match service.create_agent(&draft, identity.as_ref()) {
            Ok(message) => {
                info!(agent = %draft.name, "Agent created");
                Message::AgentCreated {
                    epoch,
                    name: draft.name,
                    message,
                }
            }
            Err(e) => {
                warn!(agent = %draft.name, "Failed to create agent: {e}");
                Message::AgentCreateFailed {
                    epoch,
                    error: e.to_string(),
                }
            }
        },
    }
}
