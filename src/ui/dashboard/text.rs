//! Plain-text dashboard rendition for headless mode

use super::components::activity::RECENT_ACTIVITY;
use super::components::quick_stats::QUICK_STATS;
use super::components::stat_cards::{StatCard, primary_cards, secondary_cards};
use super::utils::{bar_width, format_count};
use crate::consts::cli_consts::ui::MAX_BAR_WIDTH;
use crate::controller::ViewState;

fn card_line(card: &StatCard) -> String {
    match &card.trend {
        Some(trend) => format!(
            "  {:<20} {:>10}  {} {}",
            card.title,
            card.value,
            if trend.up { "▲" } else { "▼" },
            trend.label
        ),
        None => format!("  {:<20} {:>10}", card.title, card.value),
    }
}

/// Render the view as lines of text, sections in on-screen order.
pub fn render_text(view: &ViewState) -> Vec<String> {
    let mut lines = vec![
        "Education Analytics Dashboard".to_string(),
        format!("Time range: {}", view.range),
        String::new(),
        "KEY METRICS".to_string(),
    ];

    let summary = view.summary.as_ref();
    lines.extend(primary_cards(summary).iter().map(card_line));
    lines.extend(secondary_cards(summary).iter().map(card_line));

    lines.push(String::new());
    lines.push("USERS BY REGION".to_string());
    let max_users = view.regions.iter().map(|r| r.user_count).max().unwrap_or(0);
    let name_width = view
        .regions
        .iter()
        .map(|r| r.region.chars().count())
        .max()
        .unwrap_or(0);
    for region in &view.regions {
        let filled = bar_width(region.user_count, max_users, MAX_BAR_WIDTH) as usize;
        lines.push(format!(
            "  {:<width$} {}{} {:>7}",
            region.region,
            "█".repeat(filled),
            "░".repeat(MAX_BAR_WIDTH as usize - filled),
            format_count(region.user_count),
            width = name_width
        ));
    }

    lines.push(String::new());
    lines.push("POPULAR SUBJECTS".to_string());
    for subject in &view.subjects {
        lines.push(format!(
            "  {:<14} {:>7}ms avg {:>8}",
            subject.subject,
            subject.avg_response_time_ms,
            format_count(subject.message_count)
        ));
    }

    lines.push(String::new());
    lines.push("RECENT ACTIVITY".to_string());
    for activity in RECENT_ACTIVITY {
        lines.push(format!(
            "  {} {} ({}, {})",
            activity.user, activity.action, activity.subject, activity.time
        ));
    }

    lines.push(String::new());
    lines.push("QUICK STATS".to_string());
    for (label, value, _) in QUICK_STATS {
        lines.push(format!("  {:<20} {:>10}", label, value));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RegionStat, TimeRange};

    #[test]
    fn test_text_rendition_of_empty_view() {
        let view = ViewState::new(TimeRange::Last24Hours);
        let lines = render_text(&view);
        assert!(lines.contains(&"Time range: Last 24 hours".to_string()));
        assert!(lines.iter().any(|l| l.contains("Total Users") && l.ends_with("▲ +12.5%")));
        assert!(lines.iter().any(|l| l.contains("0.0%")));
    }

    #[test]
    fn test_text_region_bars_scale_with_users() {
        let mut view = ViewState::new(TimeRange::Last7Days);
        view.regions = vec![RegionStat::new("A", 100, 10), RegionStat::new("B", 50, 5)];
        let lines = render_text(&view);

        let bars: Vec<usize> = lines
            .iter()
            .filter(|l| l.starts_with("  A ") || l.starts_with("  B "))
            .map(|l| l.matches('█').count())
            .collect();
        assert_eq!(bars, vec![24, 12]);
    }
}
