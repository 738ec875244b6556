//! UI helper functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::theme::{Palette, ROUNDED_BORDERS};

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Cut `text` to `max_chars`, ending with "..." when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    // Safely truncate using character boundaries
    let take_chars = max_chars.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

/// First card index to draw so that `selected` is fully visible.
///
/// `heights` are the card heights in display order and `available` the
/// rows the list may use. Cards before the selection scroll off the top.
pub fn visible_window(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = 0;
    while start < selected {
        let used: u32 = heights[start..=selected].iter().map(|&h| u32::from(h)).sum();
        if used <= u32::from(available) {
            break;
        }
        start += 1;
    }
    start
}

/// Rounded card block, highlighted when selected
pub fn card_block(palette: &Palette, selected: bool) -> Block<'static> {
    let border_color = if selected {
        palette.accent
    } else {
        palette.border_subtle
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.bg_secondary))
}

/// Centered section heading with a muted subtitle underneath
pub fn heading<'a>(title: &'a str, subtitle: &'a str, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Center),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        let result = wrap_text("café crème", 10);
        assert_eq!(result, vec!["café crème"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Développeur Full-Stack", 10), "Dévelop...");
    }

    #[test]
    fn test_visible_window_keeps_selection_in_view() {
        let heights = [8, 8, 8, 8];
        assert_eq!(visible_window(&heights, 0, 20), 0);
        assert_eq!(visible_window(&heights, 1, 20), 0);
        assert_eq!(visible_window(&heights, 2, 20), 1);
        assert_eq!(visible_window(&heights, 3, 20), 2);
    }

    #[test]
    fn test_visible_window_oversized_card() {
        // A card taller than the viewport still becomes the first one drawn
        assert_eq!(visible_window(&[4, 30], 1, 10), 1);
        assert_eq!(visible_window(&[], 3, 10), 0);
    }
}
