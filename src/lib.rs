//! Agora - terminal lobby for picking AI agents to chat with
//!
//! Agora lists the agents a chat backend offers, lets you open one for a
//! one-on-one chat or pick up to three for a group chat, and create new
//! custom agents. Picking a session yields a [`SessionRoute`] such as
//! `chat/personal_trainer` or `group-chat/scientist,writer`.

pub mod agent;
pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod launch;
pub mod paths;
pub mod selection;
pub mod tui;

pub use agent::{Agent, AgentOrigin};
pub use app::App;
pub use config::Config;
pub use error::LobbyError;
pub use launch::SessionRoute;
pub use selection::ChatMode;
