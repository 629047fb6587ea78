//! Detail overlay for the selected post

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::centered_rect_constrained;
use crate::posts::Post;

pub fn render_detail(frame: &mut Frame, post: &Post) {
    let area = centered_rect_constrained(frame.area(), 40, 70, 10, 20);

    // Clear whatever the list rendered underneath
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Post Details ", Theme::label()))
        .borders(Borders::ALL)
        .border_style(Theme::popup_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        post.display_title(),
        Theme::title(),
    ))];
    lines.push(Line::from(""));
    for body_line in post.body.lines() {
        lines.push(Line::from(Span::styled(
            body_line.to_string(),
            Theme::text_secondary(),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, sections[0]);

    let hint = Line::from(vec![
        Span::styled("Esc", Theme::help_key()),
        Span::styled(" close", Theme::help_desc()),
    ]);
    frame.render_widget(Paragraph::new(hint), sections[1]);
}
