//! Dashboard subject panel

use super::super::utils::format_count;
use crate::model::SubjectStat;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render subjects with message volume and average latency.
pub fn render_subjects_panel(f: &mut Frame, area: Rect, subjects: &[SubjectStat]) {
    let rows: Vec<Row> = subjects
        .iter()
        .map(|subject| {
            Row::new(vec![
                Cell::from(subject.subject.clone()).style(Style::default().fg(Color::Gray)),
                Cell::from(
                    Line::from(format!("{}ms avg", subject.avg_response_time_ms))
                        .alignment(Alignment::Right),
                )
                .style(Style::default().fg(Color::DarkGray)),
                Cell::from(
                    Line::from(format_count(subject.message_count))
                        .alignment(Alignment::Right),
                )
                .style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .column_spacing(1)
    .block(
        Block::default()
            .title("POPULAR SUBJECTS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
