//! Centralized theming for the postr TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application.

use ratatui::style::{Color, Modifier, Style};

/// Accent color for labels, highlights, and the status bar.
const ACCENT: Color = Color::Magenta;

pub struct Theme;

impl Theme {
    // === Text styles ===

    /// Normal text
    pub fn text() -> Style {
        Style::default()
    }

    /// Secondary text (card bodies, subtitles)
    pub fn text_secondary() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// De-emphasized text (hints, placeholders)
    pub fn text_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Card and detail titles
    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Small uppercase section labels on cards
    pub fn label() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    // === Selection ===

    /// Left marker bar of the selected card
    pub fn selected_marker() -> Style {
        Style::default().fg(ACCENT)
    }

    /// Title of the selected card
    pub fn selected_title() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    // === Search ===

    /// Query match inside a card title
    pub fn search_match() -> Style {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }

    /// Active search input
    pub fn search_active() -> Style {
        Style::default().fg(Color::White).bg(ACCENT)
    }

    // === Chrome ===

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(ACCENT)
    }

    pub fn error_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(ACCENT)
    }

    pub fn spinner() -> Style {
        Style::default().fg(ACCENT)
    }

    pub fn help_key() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
