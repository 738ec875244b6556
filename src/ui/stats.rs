//! Stat card rendering functions

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::card_block;
use crate::theme::Palette;

/// Render a row of equal-width stat cards, each showing an icon with its
/// caption.
pub fn render_stat_cards(area: Rect, cards: &[(&str, &str)], palette: &Palette, frame: &mut Frame) {
    if cards.is_empty() {
        return;
    }

    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for ((icon, caption), card_area) in cards.iter().zip(card_layout.iter()) {
        let content = vec![
            Line::from(Span::styled(
                *icon,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                *caption,
                Style::default().fg(palette.text_secondary),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(card_block(palette, false))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *card_area);
    }
}
