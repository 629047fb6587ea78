//! Status line: app name, counts, and refresh state

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::app::state::AppState;
use crate::constants::SPINNER_FRAME_MS;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = Theme::status_bar();

    let activity = if state.status.loading || state.status.refreshing {
        format!("{} ", spinner_char())
    } else {
        String::new()
    };
    let left = format!(" {}postr │ Posts", activity);

    // Result count only while a search is active, matching the header of the
    // main view; otherwise totals and the last refresh time.
    let right = if !state.search.query.is_empty() {
        format!("{} results ", state.filtered.len())
    } else {
        let refreshed = state
            .last_fetch
            .and_then(|ts| Local.timestamp_opt(ts, 0).single())
            .map(|t| format!(" │ ↻ {}", t.format(&state.time_format)))
            .unwrap_or_default();
        format!("{} posts{} ", state.posts.len(), refreshed)
    };

    let available = (area.width as usize).saturating_sub(left.width() + right.width());
    let padding = " ".repeat(available);

    let line = Line::from(vec![
        Span::styled(left, style),
        Span::styled(padding, style),
        Span::styled(right, style),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}

pub fn spinner_char() -> char {
    let spinner = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / SPINNER_FRAME_MS) as usize
        % spinner.chars().count();
    spinner.chars().nth(idx).unwrap_or('⠋')
}
