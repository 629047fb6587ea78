//! Post card rendering
//!
//! A card is a pure function of the post, the active query, and the
//! selection flag: a fixed template of label, title (2 lines), divider,
//! label, and body preview (3 lines). It holds no state and performs no I/O.

use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::format::highlight_matches;
use super::theme::Theme;
use super::widgets::wrap_clamped;
use crate::constants::{CARD_BODY_LINES, CARD_TITLE_LINES};
use crate::posts::Post;

pub fn card_item(post: &Post, query: &str, width: u16, selected: bool) -> ListItem<'static> {
    // Two columns go to the marker bar on the left edge.
    let text_width = (width.saturating_sub(2)).max(8) as usize;

    let marker_style = if selected {
        Theme::selected_marker()
    } else {
        Theme::border()
    };
    let title_style = if selected {
        Theme::selected_title()
    } else {
        Theme::title()
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut push = |spans: Vec<Span<'static>>| {
        let mut row = vec![Span::styled("▌ ", marker_style)];
        row.extend(spans);
        lines.push(Line::from(row));
    };

    push(vec![Span::styled("TITLE", Theme::label())]);
    for row in wrap_clamped(&post.display_title(), text_width, CARD_TITLE_LINES) {
        push(highlight_matches(
            &row,
            query,
            title_style,
            Theme::search_match(),
        ));
    }
    push(vec![Span::styled(
        "─".repeat(text_width.min(40)),
        Theme::border(),
    )]);
    push(vec![Span::styled("DESCRIPTION", Theme::label())]);
    for row in wrap_clamped(&post.body, text_width, CARD_BODY_LINES) {
        push(vec![Span::styled(row, Theme::text_secondary())]);
    }
    lines.push(Line::from(""));

    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> Post {
        Post {
            id: 1,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn card_has_labels_title_divider_and_body() {
        let item = card_item(&post("short title", "short body"), "", 40, false);
        // TITLE label, 1 title line, divider, DESCRIPTION label, 1 body line,
        // trailing blank separator
        assert_eq!(item.height(), 6);
    }

    #[test]
    fn long_title_and_body_are_clamped() {
        let title = "word ".repeat(30);
        let body = "word ".repeat(60);
        let item = card_item(&post(&title, &body), "", 20, false);
        // 2 labels + divider + blank + at most 2 title lines + 3 body lines
        assert_eq!(item.height(), 4 + CARD_TITLE_LINES + CARD_BODY_LINES);
    }
}
