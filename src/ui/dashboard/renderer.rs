//! Dashboard main renderer

use super::components::{
    activity, footer, header, loading, quick_stats, regions, stat_cards, subjects,
};
use super::state::DashboardState;
use crate::controller::ViewState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let view = state.view();
    if view.is_initial_load() {
        loading::render_loading(f, state.tick);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(12),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let summary = view.summary.as_ref();
    stat_cards::render_card_row(f, main_chunks[1], &stat_cards::primary_cards(summary));
    stat_cards::render_card_row(f, main_chunks[2], &stat_cards::secondary_cards(summary));

    render_charts(f, main_chunks[3], view);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(main_chunks[4]);
    activity::render_activity_panel(f, bottom_chunks[0]);
    quick_stats::render_quick_stats(f, bottom_chunks[1]);

    footer::render_footer(f, main_chunks[5], state);

    // Popup last so it draws over the cards.
    header::render_range_dropdown(f, main_chunks[0], state);
}

/// Region and subject panels side by side.
pub fn render_charts(f: &mut Frame, area: Rect, view: &ViewState) {
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    regions::render_regions_panel(f, chart_chunks[0], &view.regions);
    subjects::render_subjects_panel(f, chart_chunks[1], &view.subjects);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LoadOutcome;
    use crate::model::{DashboardData, RegionStat, TimeRange};
    use crate::provider::sample::{sample_regions, sample_subjects, sample_summary};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 42)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_outcome(state: &mut DashboardState) {
        let request = state.mount();
        state.apply_outcome(LoadOutcome::new(
            request,
            Ok(DashboardData {
                summary: sample_summary(),
                regions: sample_regions(),
                subjects: sample_subjects(),
            }),
        ));
        state.update();
    }

    #[test]
    fn test_first_load_shows_loading_view() {
        let mut state = DashboardState::new(TimeRange::Last7Days, true);
        state.mount();
        let text = draw(&state);
        assert!(text.contains("Loading dashboard..."));
        assert!(!text.contains("Education Analytics Dashboard"));
    }

    #[test]
    fn test_loaded_dashboard_shows_all_sections() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        sample_outcome(&mut state);
        let text = draw(&state);

        assert!(text.contains("Education Analytics Dashboard"));
        assert!(text.contains("Last 7 days"));
        assert!(text.contains("2,847"));
        assert!(text.contains("74.0%"));
        assert!(text.contains("Gauteng"));
        assert!(text.contains("Mathematics"));
        assert!(text.contains("Aisha N."));
        assert!(text.contains("University Matches"));
    }

    #[test]
    fn test_reload_keeps_stale_data_visible() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        sample_outcome(&mut state);
        state.select_range(TimeRange::Last30Days).unwrap();

        let text = draw(&state);
        assert!(text.contains("Refreshing..."));
        assert!(text.contains("Gauteng"));
        assert!(!text.contains("Loading dashboard..."));
    }

    #[test]
    fn test_failed_first_load_renders_empty_dashboard() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        let request = state.mount();
        state.apply_outcome(LoadOutcome::new(
            request,
            Err(crate::provider::error::ProviderError::fetch(
                crate::provider::Dataset::Summary,
                "unavailable",
            )),
        ));
        state.update();

        let text = draw(&state);
        assert!(text.contains("Total Users"));
        assert!(text.contains("0ms"));
        assert!(text.contains("USERS BY REGION"));
        assert!(text.contains("Error loading dashboard data"));
        assert!(text.contains("Last refresh failed"));
    }

    #[test]
    fn test_open_dropdown_lists_all_ranges() {
        let mut state = DashboardState::new(TimeRange::Last7Days, false);
        sample_outcome(&mut state);
        state.selector.toggle(TimeRange::Last7Days);

        let text = draw(&state);
        for range in TimeRange::ALL {
            assert!(text.contains(range.label()));
        }
    }

    #[test]
    fn test_charts_with_two_regions_and_no_subjects() {
        let view = ViewState {
            loading: false,
            summary: None,
            regions: vec![RegionStat::new("A", 100, 10), RegionStat::new("B", 50, 5)],
            subjects: Vec::new(),
            range: TimeRange::Last7Days,
        };
        let mut terminal = Terminal::new(TestBackend::new(120, 8)).unwrap();
        terminal.draw(|f| render_charts(f, f.area(), &view)).unwrap();
        let buffer = terminal.backend().buffer();

        let bar_rows: Vec<usize> = (0..8u16)
            .map(|y| (0..60u16).filter(|x| buffer[(*x, y)].symbol() == "█").count())
            .filter(|count| *count > 0)
            .collect();
        assert_eq!(bar_rows.len(), 2);
        assert_eq!(bar_rows[0], bar_rows[1] * 2);

        let subject_text: String = (0..8u16)
            .flat_map(|y| (60..120u16).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(subject_text.contains("POPULAR SUBJECTS"));
        assert!(!subject_text.contains("ms avg"));
    }
}
