//! Dashboard footer component
//!
//! Renders key bindings and the newest diagnostic

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use crate::events::EventType;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer: key bindings, then the newest diagnostic below.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = vec![Line::from(Span::styled(
        "[T] Time range | [1-4] Quick select | [E] Export | [Q] Quit",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(event) = state.latest_diagnostic() {
        let color = if event.event_type == EventType::Error {
            Color::LightRed
        } else {
            get_source_color(&event.source)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", format_compact_timestamp(&event.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(event.msg.clone(), Style::default().fg(color)),
        ]));
    }

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
