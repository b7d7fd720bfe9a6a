//! Dashboard quick stats tiles

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Static tiles: label, value and accent color.
pub const QUICK_STATS: [(&str, &str, Color); 4] = [
    ("Math Questions", "7,234", Color::LightBlue),
    ("Science Questions", "4,567", Color::LightGreen),
    ("University Matches", "1,892", Color::LightMagenta),
    ("Bookmarks", "3,456", Color::LightYellow),
];

pub fn render_quick_stats(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("QUICK STATS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner_width = block.inner(area).width as usize;

    let lines: Vec<Line> = QUICK_STATS
        .iter()
        .flat_map(|(label, value, color)| {
            let gap = inner_width.saturating_sub(label.len() + value.len()).max(1);
            [
                Line::from(vec![
                    Span::styled(*label, Style::default().fg(Color::Gray)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(
                        *value,
                        Style::default().fg(*color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
