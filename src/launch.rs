//! Turning a confirmed selection into a session route

use crate::agent::normalize;
use crate::error::{LobbyError, Result};
use crate::selection::ChatMode;
use std::fmt;

/// Navigation target for a chat session.
///
/// Participants are stored already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionRoute {
    /// `chat/{name}`
    Single(String),
    /// `group-chat/{name},{name},...`
    Group(Vec<String>),
}

impl SessionRoute {
    /// Normalized participant names, in route order
    #[must_use]
    pub fn participants(&self) -> &[String] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Group(names) => names,
        }
    }

    /// Route prefixed with a base URL, joined with exactly one slash
    #[must_use]
    pub fn to_url(&self, base: &str) -> String {
        format!("{}/{self}", base.trim_end_matches('/'))
    }
}

impl fmt::Display for SessionRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => write!(f, "chat/{name}"),
            Self::Group(names) => write!(f, "group-chat/{}", names.join(",")),
        }
    }
}

/// Compute the route for a launch.
///
/// In single mode the route targets `draft_name`; in group mode it targets the
/// selection in insertion order and `draft_name` is ignored.
///
/// # Errors
///
/// Returns [`LobbyError::MissingAgentName`] for a single launch whose name is
/// missing or blank, and [`LobbyError::EmptySelection`] for a group launch with
/// nothing selected.
pub fn launch(
    mode: ChatMode,
    selection: &[String],
    draft_name: Option<&str>,
) -> Result<SessionRoute> {
    match mode {
        ChatMode::Single => {
            let name = draft_name
                .filter(|name| !name.trim().is_empty())
                .ok_or(LobbyError::MissingAgentName)?;
            Ok(SessionRoute::Single(normalize(name)))
        }
        ChatMode::Group => {
            if selection.is_empty() {
                return Err(LobbyError::EmptySelection);
            }
            Ok(SessionRoute::Group(
                selection.iter().map(|name| normalize(name)).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case(&["Scientist", "Writer"], "group-chat/scientist,writer")]
    #[case(&["Personal Trainer", "Scientist"], "group-chat/personal_trainer,scientist")]
    #[case(&["Writer"], "group-chat/writer")]
    #[case(&["News  Editor", "Writer", "Event Coordinator"], "group-chat/news_editor,writer,event_coordinator")]
    fn test_group_routes(#[case] selection: &[&str], #[case] expected: &str) -> Result<()> {
        let route = launch(ChatMode::Group, &names(selection), None)?;
        assert_eq!(route.to_string(), expected);
        Ok(())
    }

    #[test]
    fn test_single_route() -> Result<()> {
        let route = launch(ChatMode::Single, &[], Some("Personal Trainer"))?;
        assert_eq!(route, SessionRoute::Single("personal_trainer".to_string()));
        assert_eq!(route.to_string(), "chat/personal_trainer");
        Ok(())
    }

    #[test]
    fn test_single_ignores_selection() -> Result<()> {
        let route = launch(ChatMode::Single, &names(&["Writer"]), Some("Scientist"))?;
        assert_eq!(route.to_string(), "chat/scientist");
        Ok(())
    }

    #[test]
    fn test_group_ignores_draft_name() -> Result<()> {
        let route = launch(ChatMode::Group, &names(&["Writer"]), Some("Scientist"))?;
        assert_eq!(route.to_string(), "group-chat/writer");
        Ok(())
    }

    #[test]
    fn test_empty_group_launch() {
        assert_eq!(
            launch(ChatMode::Group, &[], Some("Writer")),
            Err(LobbyError::EmptySelection)
        );
    }

    #[test]
    fn test_single_launch_needs_name() {
        assert_eq!(
            launch(ChatMode::Single, &[], None),
            Err(LobbyError::MissingAgentName)
        );
        assert_eq!(
            launch(ChatMode::Single, &[], Some("")),
            Err(LobbyError::MissingAgentName)
        );
        assert_eq!(
            launch(ChatMode::Single, &[], Some(" \t ")),
            Err(LobbyError::MissingAgentName)
        );
    }

    #[test]
    fn test_participants() {
        let single = SessionRoute::Single("writer".to_string());
        assert_eq!(single.participants(), ["writer"]);

        let group = SessionRoute::Group(names(&["a", "b"]));
        assert_eq!(group.participants(), ["a", "b"]);
    }

    #[test]
    fn test_to_url() {
        let route = SessionRoute::Single("writer".to_string());
        assert_eq!(
            route.to_url("https://example.com/"),
            "https://example.com/chat/writer"
        );
        assert_eq!(
            route.to_url("https://example.com"),
            "https://example.com/chat/writer"
        );
    }
}
