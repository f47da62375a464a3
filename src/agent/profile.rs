//! Agent profile definition

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a catalog entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentOrigin {
    /// Shipped with the backend
    #[default]
    Predefined,
    /// Created by a user through `/create_model`
    Custom,
}

impl AgentOrigin {
    /// Short tag shown next to custom agents in the list
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Predefined => "",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for AgentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Predefined => "Predefined",
            Self::Custom => "Custom",
        };
        write!(f, "{s}")
    }
}

/// A named conversational persona.
///
/// The same type doubles as the dialog draft: a freshly opened creation
/// dialog holds `Agent::default()`, and the fields are edited in place until
/// the draft is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    /// Display name; also the agent's identity
    pub name: String,

    /// One-line description shown in the catalog
    #[serde(default)]
    pub description: String,

    /// Goal text, only meaningful while creating an agent
    #[serde(default)]
    pub goal: String,

    /// Which list the backend reported this agent in
    #[serde(skip)]
    pub origin: AgentOrigin,
}

impl Agent {
    /// Create an agent with a name and description
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            goal: String::new(),
            origin: AgentOrigin::Predefined,
        }
    }

    /// Mark the agent as coming from the given list
    #[must_use]
    pub const fn with_origin(mut self, origin: AgentOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Read the named draft field
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Goal => &self.goal,
        }
    }

    /// Mutable access to the named draft field
    pub const fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Goal => &mut self.goal,
        }
    }

    /// Whether the name is blank after trimming
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// An editable field of the agent draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraftField {
    /// The agent's display name
    #[default]
    Name,
    /// The agent's description
    Description,
    /// The goal handed to the backend at creation
    Goal,
}

impl DraftField {
    /// All fields, in dialog order.
    pub const ALL: &'static [Self] = &[Self::Name, Self::Description, Self::Goal];

    /// Label shown above the field in the dialog
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Agent Name",
            Self::Description => "Agent Description",
            Self::Goal => "Your Goal",
        }
    }

    /// The next field in dialog order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Goal,
            Self::Goal => Self::Name,
        }
    }
}
