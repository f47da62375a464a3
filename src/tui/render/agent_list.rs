//! Main layout rendering: header, agent list, status bar

use crate::agent::{Agent, AgentIcon};
use crate::app::{App, NoticeLevel};
use crate::selection::{ChatMode, MAX_GROUP_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::colors;

pub fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode_badge = match app.selection.mode() {
        ChatMode::Single => " SINGLE ".to_string(),
        ChatMode::Group => format!(" GROUP {}/{MAX_GROUP_SIZE} ", app.selection.len()),
    };

    let mut spans = vec![
        Span::styled(
            "Discover Your Perfect AI Companion",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            mode_badge,
            Style::default()
                .fg(colors::MODAL_BG)
                .bg(colors::SELECTED)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(user) = &app.config.user {
        spans.push(Span::styled(
            format!("  Welcome, {}!", user.username),
            Style::default().fg(colors::TEXT_DIM),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::BORDER)),
        );
    frame.render_widget(header, area);
}

fn checkbox(app: &App, agent: &Agent) -> (&'static str, Color) {
    if app.selection.mode() != ChatMode::Group {
        return ("", colors::TEXT_DIM);
    }
    if app.selection.is_selected(&agent.name) {
        ("[x] ", colors::SELECTED)
    } else if app.selection.can_toggle(&agent.name) {
        ("[ ] ", colors::TEXT_DIM)
    } else {
        ("[-] ", colors::TEXT_MUTED)
    }
}

fn agent_list_item<'a>(app: &App, idx: usize, agent: &'a Agent) -> ListItem<'a> {
    let (check, check_color) = checkbox(app, agent);
    let icon = AgentIcon::for_name(&agent.name).map_or(" ", AgentIcon::glyph);

    let name_style = if idx == app.cursor {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let mut spans = vec![
        Span::styled(check, Style::default().fg(check_color)),
        Span::styled(format!("{icon} "), Style::default().fg(colors::ICON)),
        Span::styled(agent.name.as_str(), name_style),
    ];
    let tag = agent.origin.tag();
    if !tag.is_empty() {
        spans.push(Span::styled(
            format!(" ({tag})"),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }
    if !agent.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", agent.description),
            Style::default().fg(colors::TEXT_DIM),
        ));
    }

    ListItem::new(Line::from(spans))
}

pub fn render_agent_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Agents ({}) ", app.catalog.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));

    if app.catalog.is_empty() {
        let text = if app.catalog.is_loading() {
            "Loading agents..."
        } else {
            "No agents available. Press r to retry."
        };
        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(colors::TEXT_MUTED)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(idx, agent)| agent_list_item(app, idx, agent))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::SURFACE_HIGHLIGHT));

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

const fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => colors::NOTICE_INFO,
        NoticeLevel::Success => colors::NOTICE_SUCCESS,
        NoticeLevel::Warning => colors::NOTICE_WARNING,
        NoticeLevel::Error => colors::NOTICE_ERROR,
    }
}

const fn key_hints(app: &App) -> &'static str {
    match app.selection.mode() {
        ChatMode::Single => {
            " ↑/↓ move • Enter view • n new agent • g group mode • r refresh • q quit"
        }
        ChatMode::Group => {
            " ↑/↓ move • Space select • c start group chat • g single mode • x clear • q quit"
        }
    }
}

pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = app.notices.current().map_or_else(
        || {
            Line::from(Span::styled(
                key_hints(app),
                Style::default().fg(colors::TEXT_MUTED),
            ))
        },
        |notice| {
            Line::from(Span::styled(
                format!(" {} ", notice.text),
                Style::default()
                    .fg(notice_color(notice.level))
                    .add_modifier(Modifier::BOLD),
            ))
        },
    );
    frame.render_widget(Paragraph::new(line), area);
}
