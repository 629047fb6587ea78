//! Text formatting utilities for list rendering.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use ratatui::{style::Style, text::Span};
use std::sync::{Mutex, OnceLock};

static MATCHER_CACHE: OnceLock<Mutex<Option<(String, AhoCorasick)>>> = OnceLock::new();

/// Case-insensitive matcher for `query`, rebuilt only when the query changes.
/// Typing a character invalidates the cache once; every card on screen then
/// reuses the same automaton.
fn cached_matcher(query: &str) -> Option<AhoCorasick> {
    let cache = MATCHER_CACHE.get_or_init(|| Mutex::new(None));
    let mut guard = cache.lock().unwrap_or_else(|e| e.into_inner());

    if let Some((cached_query, ac)) = guard.as_ref()
        && cached_query == query
    {
        return Some(ac.clone());
    }

    let ac = AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build([query])
        .ok()?;
    *guard = Some((query.to_string(), ac.clone()));
    Some(ac)
}

/// Split `text` into styled spans, highlighting every query match. Matched
/// segments keep their original case from the text.
pub fn highlight_matches(
    text: &str,
    query: &str,
    base_style: Style,
    highlight_style: Style,
) -> Vec<Span<'static>> {
    let whole = || vec![Span::styled(text.to_string(), base_style)];

    if query.is_empty() {
        return whole();
    }
    let Some(ac) = cached_matcher(query) else {
        return whole();
    };

    let mut spans = Vec::new();
    let mut rest = 0;
    for mat in ac.find_iter(text) {
        if mat.start() > rest {
            spans.push(Span::styled(text[rest..mat.start()].to_string(), base_style));
        }
        spans.push(Span::styled(
            text[mat.start()..mat.end()].to_string(),
            highlight_style,
        ));
        rest = mat.end();
    }

    if spans.is_empty() {
        return whole();
    }
    if rest < text.len() {
        spans.push(Span::styled(text[rest..].to_string(), base_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str, query: &str) -> Vec<String> {
        highlight_matches(text, query, Style::default(), Style::default())
            .into_iter()
            .map(|s| s.content.into_owned())
            .collect()
    }

    #[test]
    fn matches_split_into_separate_spans() {
        assert_eq!(parts("Hello World", "world"), vec!["Hello ", "World"]);
    }

    #[test]
    fn empty_query_and_no_match_yield_one_span() {
        assert_eq!(parts("Hello", "").len(), 1);
        assert_eq!(parts("Hello", "zzz").len(), 1);
    }

    #[test]
    fn repeated_matches_are_all_highlighted() {
        assert_eq!(parts("aXbXc", "x"), vec!["a", "X", "b", "X", "c"]);
    }
}
