//! Common test utilities shared across integration tests

pub mod service;

pub use service::FakeService;

use agora::App;
use agora::app::{Message, Task, Worker};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Agents most tests start from
pub const CATALOG: [(&str, &str); 5] = [
    ("Personal Trainer", "Builds workout plans"),
    ("Scientist", "Explains experiments"),
    ("Writer", "Drafts prose"),
    ("News Editor", "Summarizes the day"),
    ("Event Coordinator", "Plans events"),
];

/// Dispatch `tasks`, wait for every worker, and apply the results to `app`,
/// repeating until no follow-up tasks remain.
pub fn settle(
    app: &mut App,
    worker: &Worker,
    messages: &Receiver<Message>,
    tasks: Vec<Task>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pending = tasks;
    while !pending.is_empty() {
        let count = pending.len();
        for handle in worker.dispatch_all(pending) {
            handle.join().map_err(|_| "worker thread panicked")?;
        }

        pending = Vec::new();
        for _ in 0..count {
            let message = messages.recv_timeout(Duration::from_secs(5))?;
            pending.extend(app.apply(message));
        }
    }
    Ok(())
}

/// Move the list cursor onto the agent called `name`
pub fn move_to(app: &mut App, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..app.catalog.len() {
        if app.cursor_agent().is_some_and(|a| a.name == name) {
            return Ok(());
        }
        app.select_next();
    }
    Err(format!("agent {name} not in catalog").into())
}
