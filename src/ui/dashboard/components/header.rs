//! Dashboard header component
//!
//! Renders the title, the time-range dropdown and the export button

use super::super::state::DashboardState;
use crate::model::TimeRange;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title on the left and controls on the right.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(40)])
        .split(area);

    let title_lines = vec![
        Line::from(Span::styled(
            "Education Analytics Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Monitor student engagement and learning outcomes",
            Style::default().fg(Color::Gray),
        )),
    ];
    let title = Paragraph::new(title_lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let view = state.view();
    let controls = vec![
        Span::styled(
            format!("[{} v]", view.range.label()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "[Export]",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    // Stale data stays on screen while a reload runs.
    let controller = state.controller();
    let status = if view.loading {
        let frame = SPINNER[state.tick % SPINNER.len()];
        Line::from(Span::styled(
            format!("{} Refreshing... #{}", frame, controller.generation()),
            Style::default().fg(Color::LightYellow),
        ))
    } else if controller.last_error().is_some() {
        Line::from(Span::styled(
            "! Last refresh failed",
            Style::default().fg(Color::LightRed),
        ))
    } else {
        Line::from("")
    };

    let controls_paragraph = Paragraph::new(vec![Line::from(controls), status])
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(controls_paragraph, header_chunks[1]);
}

/// Render the open range dropdown as a popup under the header controls.
pub fn render_range_dropdown(f: &mut Frame, header_area: Rect, state: &DashboardState) {
    if !state.selector.is_open() {
        return;
    }

    let width = 22u16.min(header_area.width);
    let height = (TimeRange::ALL.len() as u16 + 2)
        .min(f.area().height.saturating_sub(header_area.bottom()));
    let popup = Rect {
        x: header_area.right().saturating_sub(width),
        y: header_area.bottom(),
        width,
        height,
    };

    let current = state.view().range;
    let highlighted = state.selector.highlighted();
    let items: Vec<ListItem> = TimeRange::ALL
        .iter()
        .enumerate()
        .map(|(i, range)| {
            let marker = if *range == current { "*" } else { " " };
            let style = if *range == highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {} {}", i + 1, marker, range.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Time range")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}
