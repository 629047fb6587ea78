//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

pub fn error_bar(frame: &mut Frame, area: Rect, message: &str) {
    let style = Theme::error_bar();
    let paragraph = Paragraph::new(format!(" Error: {} ", message)).style(style);
    frame.render_widget(paragraph, area);
}

pub fn help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let available_width = area.width as usize;

    // Width of each hint including its separator: " key desc │ "
    let hint_widths: Vec<usize> = hints
        .iter()
        .enumerate()
        .map(|(i, (key, desc))| {
            let base = format!(" {} ", key).width() + desc.width();
            if i < hints.len() - 1 { base + 3 } else { base + 1 }
        })
        .collect();

    // Find how many hints fit
    let mut total_width = 0;
    let mut hints_to_show = 0;
    for width in &hint_widths {
        if total_width + width <= available_width {
            total_width += width;
            hints_to_show += 1;
        } else {
            break;
        }
    }

    // Show at least one hint if possible
    hints_to_show = hints_to_show.max(1).min(hints.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().take(hints_to_show).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i < hints_to_show - 1 {
            spans.push(Span::styled(" │ ", Theme::text_muted()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Creates a centered rect with min/max constraints for width and height.
/// The actual size is clamped between min and max, then constrained to fit
/// within area.
pub fn centered_rect_constrained(
    area: Rect,
    min_width: u16,
    max_width: u16,
    min_height: u16,
    max_height: u16,
) -> Rect {
    let w = max_width.min(area.width.saturating_sub(4)).max(min_width);
    let h = max_height
        .min(area.height.saturating_sub(4))
        .max(min_height);

    let x = (area.width.saturating_sub(w)) / 2;
    let y = (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Greedy word wrap to `width` columns, clamped to `max_lines` rows. The last
/// line gets an ellipsis when content was cut. Words wider than a full line
/// are hard-split.
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_wide_word(word, width) {
            let piece_width = piece.width();
            let current_width = current.width();
            if current.is_empty() {
                current = piece;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            while last.width() + 1 > width && !last.is_empty() {
                last.pop();
            }
            last.push('…');
        }
    }

    lines
}

/// Split a single word into chunks no wider than `width` columns.
fn split_wide_word(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in word.chars() {
        let cw = c.width().unwrap_or(0);
        if piece_width + cw > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += cw;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_short_text_on_one_line() {
        assert_eq!(wrap_clamped("hello world", 20, 2), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        assert_eq!(
            wrap_clamped("one two three four", 9, 10),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn wrap_clamps_lines_and_marks_overflow() {
        let lines = wrap_clamped("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_clamped("abcdefghij", 4, 10);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_clamped("", 10, 3).is_empty());
        assert!(wrap_clamped("text", 0, 3).is_empty());
    }
}
