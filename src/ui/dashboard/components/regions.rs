//! Dashboard region panel
//!
//! Ranked list of regions with a bar scaled against the largest user count

use super::super::utils::{bar_width, format_count};
use crate::consts::cli_consts::ui::MAX_BAR_WIDTH;
use crate::model::RegionStat;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Render regions in the order provided.
pub fn render_regions_panel(f: &mut Frame, area: Rect, regions: &[RegionStat]) {
    let block = Block::default()
        .title("USERS BY REGION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let max_users = regions.iter().map(|r| r.user_count).max().unwrap_or(0);
    let name_width = regions
        .iter()
        .map(|r| r.region.chars().count())
        .max()
        .unwrap_or(0);
    let count_width = regions
        .iter()
        .map(|r| format_count(r.user_count).len())
        .max()
        .unwrap_or(0);
    let reserved = (name_width + count_width + 2) as u16;
    let track = inner.width.saturating_sub(reserved).min(MAX_BAR_WIDTH);

    let lines: Vec<Line> = regions
        .iter()
        .map(|region| {
            let filled = bar_width(region.user_count, max_users, track);
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", region.region, width = name_width),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    BAR_FILLED.repeat(filled as usize),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::styled(
                    BAR_EMPTY.repeat(track.saturating_sub(filled) as usize),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(" {:>width$}", format_count(region.user_count), width = count_width),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn filled_cells_per_row(regions: &[RegionStat], width: u16, height: u16) -> Vec<usize> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_regions_panel(f, f.area(), regions))
            .unwrap();
        let buffer = terminal.backend().buffer();

        (0..height)
            .map(|y| {
                (0..width)
                    .filter(|x| buffer[(*x, y)].symbol() == BAR_FILLED)
                    .count()
            })
            .filter(|count| *count > 0)
            .collect()
    }

    #[test]
    fn test_half_the_users_draws_half_the_bar() {
        let regions = vec![RegionStat::new("A", 100, 10), RegionStat::new("B", 50, 5)];
        let rows = filled_cells_per_row(&regions, 60, 6);
        assert_eq!(rows, vec![MAX_BAR_WIDTH as usize, MAX_BAR_WIDTH as usize / 2]);
        assert_eq!(rows[0], rows[1] * 2);
    }

    #[test]
    fn test_largest_region_fills_track_in_any_position() {
        let regions = vec![
            RegionStat::new("Limpopo", 203, 389),
            RegionStat::new("Gauteng", 892, 1847),
        ];
        let rows = filled_cells_per_row(&regions, 60, 6);
        assert_eq!(rows[1], MAX_BAR_WIDTH as usize);
        assert!(rows[0] < rows[1]);
    }

    #[test]
    fn test_empty_regions_render_empty_panel() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|f| render_regions_panel(f, f.area(), &[]))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("USERS BY REGION"));
        assert!(!text.contains(BAR_FILLED));
    }

    #[test]
    fn test_narrow_panel_does_not_panic() {
        let regions = vec![RegionStat::new("KwaZulu-Natal", 543, 987)];
        filled_cells_per_row(&regions, 12, 4);
    }
}
