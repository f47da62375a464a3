//! Agent dialog rendering

use crate::agent::{AgentIcon, DraftField};
use crate::app::App;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect_absolute, colors};

/// Render the view/create overlay on top of the agent list
pub fn render_agent_dialog(frame: &mut Frame<'_>, app: &App) {
    let state = app.dialog.state();
    let Some(draft) = state.draft() else {
        return;
    };
    let creating = state.is_creating();

    let fields: &[DraftField] = if creating {
        DraftField::ALL
    } else {
        &[DraftField::Name, DraftField::Description]
    };

    let mut lines = Vec::new();
    for &field in fields {
        let focused = creating && app.dialog.focus() == field;
        let label_style = if focused {
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_DIM)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = draft.field(field);
        let mut text = value.to_string();
        if focused {
            text.push('│');
        }
        let value_style = if creating {
            Style::default().fg(colors::TEXT_PRIMARY).bg(colors::INPUT_BG)
        } else {
            Style::default().fg(colors::TEXT_PRIMARY)
        };
        lines.push(Line::from(Span::styled(format!(" {text} "), value_style)));
        lines.push(Line::from(""));
    }

    let button = if creating {
        "[Enter] Create"
    } else {
        "[Enter] Chat"
    };
    let hint = if creating {
        "  Tab: next field  Esc: cancel"
    } else {
        "  Esc: close"
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {button} "),
            Style::default()
                .fg(colors::MODAL_BG)
                .bg(colors::BUTTON)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hint, Style::default().fg(colors::TEXT_MUTED)),
    ]));

    let title = if creating {
        " Create New Agent ".to_string()
    } else {
        let icon = AgentIcon::for_name(&draft.name).map_or("", AgentIcon::glyph);
        format!(" {icon} {} ", draft.name)
    };

    // Borders plus three lines per field plus the button row
    let height = u16::try_from(fields.len() * 3 + 3).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::SELECTED))
                .style(Style::default().bg(colors::MODAL_BG)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
