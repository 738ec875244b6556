//! Skills section

use ratatui::{
    prelude::*,
    widgets::{Padding, Paragraph, Wrap},
};

use super::helpers::{card_block, heading};
use crate::app::App;
use crate::models::portfolio::SkillCategory;
use crate::theme::Palette;

pub fn render_skills(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(heading(app.t("skills.title"), app.t("skills.subtitle"), palette)),
        rows[0],
    );

    // Three cards on the first row, the rest below
    let (top, bottom) = app.portfolio.skills.split_at(app.portfolio.skills.len().min(3));
    render_row(top, rows[1], palette, frame);
    render_row(bottom, rows[2], palette, frame);
}

fn render_row(categories: &[SkillCategory], area: Rect, palette: &Palette, frame: &mut Frame) {
    if categories.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, categories.len() as u32); categories.len()])
        .split(area);

    for (category, column) in categories.iter().zip(columns.iter()) {
        let mut spans = Vec::new();
        for skill in category.skills {
            spans.push(Span::styled(
                format!(" {} ", skill),
                Style::default().fg(palette.text_primary).bg(palette.bg_tertiary),
            ));
            spans.push(Span::raw(" "));
        }

        let block = card_block(palette, false)
            .title(Span::styled(
                format!(" {} ", category.title),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::uniform(1));
        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, *column);
    }
}
