//! Dashboard stat cards
//!
//! Summary tiles built from the loaded summary numbers. Trend figures are fixed.

use super::super::utils::format_count;
use crate::model::SummaryStats;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Static trend indicator shown under a card value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub label: &'static str,
    pub up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub trend: Option<Trend>,
}

impl StatCard {
    fn new(title: &'static str, value: String, trend: Option<Trend>) -> Self {
        Self {
            title,
            value,
            trend,
        }
    }
}

fn trend(label: &'static str, up: bool) -> Option<Trend> {
    Some(Trend { label, up })
}

/// Headline cards. A missing summary reads as zeros.
pub fn primary_cards(summary: Option<&SummaryStats>) -> Vec<StatCard> {
    let count = |f: fn(&SummaryStats) -> u64| format_count(summary.map_or(0, f));
    vec![
        StatCard::new(
            "Total Users",
            count(|s| s.total_users),
            trend("+12.5%", true),
        ),
        StatCard::new(
            "Active Users",
            count(|s| s.active_users),
            trend("+8.2%", true),
        ),
        StatCard::new(
            "Conversations",
            count(|s| s.total_conversations),
            trend("+15.8%", true),
        ),
        StatCard::new(
            "Avg Response Time",
            format!("{}ms", summary.map_or(0, |s| s.avg_response_time_ms)),
            trend("-5.2%", false),
        ),
    ]
}

pub fn secondary_cards(summary: Option<&SummaryStats>) -> Vec<StatCard> {
    vec![
        StatCard::new(
            "Total Messages",
            format_count(summary.map_or(0, |s| s.total_messages)),
            None,
        ),
        StatCard::new(
            "Avg Sentiment",
            format!("{:.1}%", summary.map_or(0.0, |s| s.avg_sentiment) * 100.0),
            None,
        ),
        StatCard::new("Notifications Sent", format_count(1247), None),
    ]
}

/// Render a row of equally wide cards.
pub fn render_card_row(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        render_card(f, *chunk, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &StatCard) {
    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(trend) = &card.trend {
        let (arrow, color) = if trend.up {
            ("▲", Color::Green)
        } else {
            ("▼", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", arrow, trend.label),
            Style::default().fg(color),
        )));
    }

    let block = Block::default()
        .title(card.title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
