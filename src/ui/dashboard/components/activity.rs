//! Dashboard activity feed
//!
//! Fixed sample of recent learner activity; not derived from loaded data.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// One entry in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    pub subject: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 5] = [
    Activity {
        user: "Aisha N.",
        action: "Started new math conversation",
        time: "2 min ago",
        subject: "Algebra",
    },
    Activity {
        user: "Thabo M.",
        action: "Completed chemistry session",
        time: "5 min ago",
        subject: "Chemistry",
    },
    Activity {
        user: "Lerato S.",
        action: "Bookmarked UCT",
        time: "8 min ago",
        subject: "University",
    },
    Activity {
        user: "Sipho K.",
        action: "Asked physics question",
        time: "12 min ago",
        subject: "Physics",
    },
    Activity {
        user: "Nomsa P.",
        action: "Updated profile",
        time: "15 min ago",
        subject: "Profile",
    },
];

pub fn render_activity_panel(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = RECENT_ACTIVITY
        .iter()
        .flat_map(|activity| {
            [
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::LightBlue)),
                    Span::styled(
                        activity.user,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(activity.action, Style::default().fg(Color::Gray)),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("  {}  ", activity.time),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("[{}]", activity.subject),
                        Style::default().fg(Color::LightCyan),
                    ),
                ]),
            ]
        })
        .collect();

    let block = Block::default()
        .title("RECENT ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
