//! Posts screen rendering
//!
//! Top-level branches are mutually exclusive: the initial-loading spinner,
//! the full-screen error state (only before any posts arrived), or the main
//! view of search bar, card list, and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListState, Paragraph, Wrap},
};

use super::card::card_item;
use super::status_bar::{render_status_bar, spinner_char};
use super::theme::Theme;
use super::widgets::{centered_rect_constrained, error_bar, help_bar};
use crate::app::state::AppState;

pub fn render_loading(frame: &mut Frame) {
    let area = centered_rect_constrained(frame.area(), 20, 30, 2, 2);
    let lines = vec![
        Line::from(Span::styled(
            format!("{}", spinner_char()),
            Theme::spinner(),
        )),
        Line::from(Span::styled("Loading posts...", Theme::text_secondary())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

pub fn render_error_screen(frame: &mut Frame, state: &AppState) {
    let message = state.status.error.as_deref().unwrap_or_default();

    let area = centered_rect_constrained(frame.area(), 30, 50, 5, 7);
    let lines = vec![
        Line::from(Span::styled("⚠", Theme::error_text())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Theme::error_text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Theme::text_muted()),
            Span::styled("r", Theme::help_key()),
            Span::styled(" to retry", Theme::text_muted()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_list(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Search bar
            Constraint::Min(0),    // Card list
            Constraint::Length(1), // Help bar or error
        ])
        .split(frame.area());

    render_status_bar(frame, chunks[0], state);
    render_search_bar(frame, chunks[1], state);

    if state.filtered.is_empty() {
        render_empty(frame, chunks[2]);
    } else {
        render_cards(frame, chunks[2], state);
    }

    // Error bar over the intact list; help bar otherwise
    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[3], error);
    } else if state.modal.is_active() {
        help_bar(frame, chunks[3], &[("Esc", "close")]);
    } else if state.search.input_active {
        let hints = &[("Type", "filter"), ("Enter/Esc", "done"), ("C-u", "clear")];
        help_bar(frame, chunks[3], hints);
    } else if !state.search.query.is_empty() {
        let hints = &[
            ("j/k", "nav"),
            ("Enter", "open"),
            ("/", "search"),
            ("x", "clear"),
            ("r", "refresh"),
            ("q", "quit"),
        ];
        help_bar(frame, chunks[3], hints);
    } else {
        let hints = &[
            ("j/k", "nav"),
            ("Enter", "open"),
            ("/", "search"),
            ("r", "refresh"),
            ("q", "quit"),
        ];
        help_bar(frame, chunks[3], hints);
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.search.query.is_empty() && !state.search.input_active {
        let paragraph =
            Paragraph::new(" / Search by title...").style(Theme::text_muted());
        frame.render_widget(paragraph, area);
        return;
    }

    let style = if state.search.input_active {
        Theme::search_active()
    } else {
        Theme::text()
    };
    let cursor = if state.search.input_active { "│" } else { "" };
    let text = format!(" / {}{} ", state.search.query, cursor);

    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let rect = centered_rect_constrained(area, 26, 30, 3, 3);
    let lines = vec![
        Line::from(Span::styled("📭", Theme::text())),
        Line::from(Span::styled("No posts found", Theme::title())),
        Line::from(Span::styled(
            "Try a different search term",
            Theme::text_muted(),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, rect);
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    let show_footer = state.pagination.is_pending();
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_footer {
            vec![Constraint::Min(0), Constraint::Length(1)]
        } else {
            vec![Constraint::Min(0)]
        })
        .split(area);

    let items: Vec<_> = state
        .displayed()
        .iter()
        .enumerate()
        .map(|(i, post)| {
            card_item(
                post,
                &state.search.query,
                sections[0].width,
                i == state.cursor,
            )
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, sections[0], &mut list_state);

    if show_footer {
        let footer = Line::from(vec![
            Span::styled(format!("{} ", spinner_char()), Theme::spinner()),
            Span::styled("Loading more...", Theme::text_muted()),
        ]);
        let paragraph = Paragraph::new(footer).alignment(Alignment::Center);
        frame.render_widget(paragraph, sections[1]);
    }
}
