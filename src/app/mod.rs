//! Application state and logic

mod event;
mod message;
mod notice;
mod worker;

pub use event::{Event, Handler};
pub use message::{Message, Task};
pub use notice::{NOTICE_TICKS, Notice, NoticeLevel, Notices};
pub use worker::{Worker, execute};

use crate::agent::Agent;
use crate::catalog::AgentCatalog;
use crate::config::Config;
use crate::dialog::AgentDialogController;
use crate::error::LobbyError;
use crate::launch::{SessionRoute, launch};
use crate::selection::{ChatMode, SelectionController, Toggle};
use tracing::{debug, info, warn};

/// Main application state.
///
/// `App` is the single writer for every controller. Key handlers call its
/// intent methods; backend results arrive as [`Message`]s through
/// [`App::apply`]. Methods that need the backend return [`Task`]s instead of
/// calling it.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Agents available to pick from
    pub catalog: AgentCatalog,

    /// Chat mode and group selection
    pub selection: SelectionController,

    /// View/create dialog
    pub dialog: AgentDialogController,

    /// Status-bar notices
    pub notices: Notices,

    /// Highlighted row in the agent list
    pub cursor: usize,

    /// Route chosen by the last successful launch
    pub navigation: Option<SessionRoute>,

    /// Whether the application should quit
    pub should_quit: bool,

    epoch: u64,
}

impl App {
    /// Create a new application in its initial state
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            catalog: AgentCatalog::new(),
            selection: SelectionController::new(),
            dialog: AgentDialogController::new(),
            notices: Notices::new(),
            cursor: 0,
            navigation: None,
            should_quit: false,
            epoch: 0,
        }
    }

    /// Current session epoch; bumped by [`App::reset`]
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Tasks to run once the UI is up
    pub fn startup(&mut self) -> Vec<Task> {
        let mut tasks = vec![self.refresh_catalog()];
        if let Some(identity) = self.config.user.clone() {
            tasks.push(Task::RegisterUser(identity));
        }
        tasks
    }

    /// Start a catalog refresh
    pub const fn refresh_catalog(&mut self) -> Task {
        Task::FetchCatalog(self.catalog.begin_refresh())
    }

    /// Agent under the cursor
    #[must_use]
    pub fn cursor_agent(&self) -> Option<&Agent> {
        self.catalog.get(self.cursor)
    }

    /// Move the cursor down, wrapping
    pub const fn select_next(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    /// Move the cursor up, wrapping
    pub const fn select_prev(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            self.cursor = match self.cursor.checked_sub(1) {
                Some(prev) => prev,
                None => count - 1,
            };
        }
    }

    /// Flip between single and group mode
    pub fn toggle_group_mode(&mut self) {
        match self.selection.toggle_mode() {
            ChatMode::Group => self.notices.push(Notice::info(
                "GROUP CHAT mode enabled. Select the desired agents, then press c to start the group chat!",
            )),
            ChatMode::Single => self.notices.push(Notice::info("Single chat mode.")),
        }
    }

    /// Act on the row under the cursor: view it in single mode, toggle it in group mode
    pub fn activate_cursor(&mut self) {
        match self.selection.mode() {
            ChatMode::Single => {
                if let Some(agent) = self.cursor_agent().cloned() {
                    self.dialog.open_for_view(agent);
                }
            }
            ChatMode::Group => self.toggle_cursor_agent(),
        }
    }

    /// Toggle the agent under the cursor in the group selection
    pub fn toggle_cursor_agent(&mut self) {
        if self.selection.mode() != ChatMode::Group {
            debug!("Ignoring selection toggle outside group mode");
            return;
        }
        let Some(name) = self.cursor_agent().map(|agent| agent.name.clone()) else {
            return;
        };
        match self.selection.toggle_agent(&name) {
            Ok(Toggle::Added | Toggle::Removed) => {}
            Err(e) => self.notices.push(Notice::warning(e.to_string())),
        }
    }

    /// Open the dialog with a blank draft
    pub fn open_create_dialog(&mut self) {
        self.dialog.open_for_create();
    }

    /// Close the dialog without submitting
    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Type a character into the focused field of the creation draft
    pub fn dialog_input(&mut self, c: char) {
        if !self.dialog.state().is_creating() {
            return;
        }
        if let Err(e) = self.dialog.push_char(self.dialog.focus(), c) {
            debug!("Dropped dialog input: {e}");
        }
    }

    /// Delete the last character of the focused field of the creation draft
    pub fn dialog_backspace(&mut self) {
        if !self.dialog.state().is_creating() {
            return;
        }
        if let Err(e) = self.dialog.pop_char(self.dialog.focus()) {
            debug!("Dropped dialog backspace: {e}");
        }
    }

    /// Move focus to the next field of the creation draft
    pub const fn dialog_next_field(&mut self) {
        if self.dialog.state().is_creating() {
            self.dialog.focus_next();
        }
    }

    /// Press the dialog's button: chat when viewing, create when creating
    pub fn submit_dialog(&mut self) -> Option<Task> {
        if !self.dialog.state().is_creating() {
            if self.dialog.is_open() {
                let _ = self.launch();
            }
            return None;
        }

        match self.dialog.submit_create() {
            Ok(draft) => {
                info!(agent = %draft.name, "Submitting new agent");
                Some(Task::CreateAgent {
                    epoch: self.epoch,
                    draft,
                    identity: self.config.user.clone(),
                })
            }
            Err(e) => {
                self.notices.push(Notice::warning(e.to_string()));
                None
            }
        }
    }

    /// Launch a session from the current mode, selection and dialog draft.
    ///
    /// The dialog is closed afterwards whether or not the launch succeeded.
    ///
    /// # Errors
    ///
    /// Returns the launch precondition that failed; it is also queued as a
    /// warning notice.
    pub fn launch(&mut self) -> Result<SessionRoute, LobbyError> {
        let draft_name = self.dialog.state().draft().map(|agent| agent.name.clone());
        let result = launch(
            self.selection.mode(),
            self.selection.selected(),
            draft_name.as_deref(),
        );
        self.finish_launch(result)
    }

    /// Launch a one-on-one session with the named agent
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::MissingAgentName`] if `name` is empty.
    pub fn launch_single(&mut self, name: &str) -> Result<SessionRoute, LobbyError> {
        let result = launch(ChatMode::Single, &[], Some(name));
        self.finish_launch(result)
    }

    fn finish_launch(
        &mut self,
        result: Result<SessionRoute, LobbyError>,
    ) -> Result<SessionRoute, LobbyError> {
        self.dialog.close();
        match &result {
            Ok(route) => {
                info!(
                    %route,
                    participants = route.participants().len(),
                    "Launching chat session"
                );
                self.navigation = Some(route.clone());
                self.should_quit = true;
            }
            Err(e) => {
                debug!("Launch rejected: {e}");
                self.notices.push(Notice::warning(e.to_string()));
            }
        }
        result
    }

    /// Clear the selection, close the dialog and return to single mode.
    ///
    /// Creations still in flight are ignored when they complete.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.selection.set_mode(ChatMode::Single);
        self.dialog.close();
        self.navigation = None;
        self.epoch += 1;
        info!(epoch = self.epoch, "Lobby reset");
        self.notices.push(Notice::info("Selection cleared."));
    }

    /// Advance timers by one tick
    pub fn tick(&mut self) {
        self.notices.tick();
    }

    /// Request exit
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply the result of a background task. Returns follow-up tasks.
    pub fn apply(&mut self, message: Message) -> Vec<Task> {
        match message {
            Message::CatalogLoaded { ticket, agents } => {
                if self.catalog.apply_refresh(ticket, agents) {
                    self.clamp_cursor();
                }
                Vec::new()
            }
            Message::CatalogFailed { ticket, error } => {
                if self.catalog.fail_refresh(ticket) {
                    let err = LobbyError::UpstreamFetchFailed(error);
                    warn!("{err}");
                    self.notices.push(Notice::error(err.to_string()));
                }
                Vec::new()
            }
            Message::UserRegistered(message) => {
                info!("User registered: {message}");
                Vec::new()
            }
            Message::UserRejected(reason) => {
                info!("User registration refused: {reason}");
                Vec::new()
            }
            Message::UserFailed(error) => {
                warn!("There was an error registering the user: {error}");
                Vec::new()
            }
            Message::AgentCreated {
                epoch,
                name,
                message,
            } => {
                if epoch != self.epoch {
                    info!(agent = %name, "Ignoring agent creation from before reset");
                    return Vec::new();
                }
                info!(agent = %name, "{message}");
                let refresh = self.refresh_catalog();
                if self.dialog.is_open() {
                    // The user moved on to another dialog; keep it
                    debug!(agent = %name, "Dialog open, not navigating to new agent");
                    self.notices.push(Notice::success(format!(
                        "Agent '{name}' created. Pick it from the list to chat."
                    )));
                } else {
                    self.notices
                        .push(Notice::success("Agent created successfully!"));
                    let _ = self.launch_single(&name);
                }
                vec![refresh]
            }
            Message::AgentCreateFailed { epoch, error } => {
                let err = LobbyError::UpstreamCreateFailed(error);
                warn!("{err}");
                if epoch == self.epoch {
                    self.notices.push(Notice::error(err.to_string()));
                }
                Vec::new()
            }
        }
    }

    const fn clamp_cursor(&mut self) {
        let count = self.catalog.len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
