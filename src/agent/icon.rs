//! Display icons for known agents

/// Display token for a catalog entry.
///
/// Agents the table does not know get no icon; the renderer leaves the slot
/// blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentIcon {
    /// Personal trainer
    Fitness,
    /// Investment advisor
    Chart,
    /// Scientist
    Science,
    /// Writer
    Pen,
    /// News editor
    Newspaper,
    /// Wellness consultant
    Health,
    /// Event coordinator
    Calendar,
    /// Travel coordinator
    Compass,
    /// Creative content strategist
    Palette,
}

/// Lowercased agent name to icon.
const ICONS: &[(&str, AgentIcon)] = &[
    ("personal trainer", AgentIcon::Fitness),
    ("investment advisor", AgentIcon::Chart),
    ("scientist", AgentIcon::Science),
    ("writer", AgentIcon::Pen),
    ("news editor", AgentIcon::Newspaper),
    ("wellness consultant", AgentIcon::Health),
    ("event coordinator", AgentIcon::Calendar),
    ("travel coordinator", AgentIcon::Compass),
    ("creative content strategists", AgentIcon::Palette),
];

impl AgentIcon {
    /// Look up the icon for an agent name, ignoring case
    #[must_use]
    pub fn for_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        ICONS
            .iter()
            .find(|(known, _)| *known == lowered)
            .map(|&(_, icon)| icon)
    }

    /// Single-cell glyph used in the agent list
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Fitness => "♥",
            Self::Chart => "↗",
            Self::Science => "⚗",
            Self::Pen => "✎",
            Self::Newspaper => "☰",
            Self::Health => "✚",
            Self::Calendar => "◷",
            Self::Compass => "✈",
            Self::Palette => "✦",
        }
    }
}
