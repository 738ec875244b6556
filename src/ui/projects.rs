//! Projects section

use ratatui::{
    prelude::*,
    widgets::{Padding, Paragraph, Wrap},
};

use super::helpers::{card_block, heading};
use crate::app::App;

pub fn render_projects(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    frame.render_widget(
        Paragraph::new(heading(
            app.t("projects.title"),
            app.t("projects.subtitle"),
            palette,
        )),
        rows[0],
    );

    let projects = &app.portfolio.projects;
    if projects.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, projects.len() as u32); projects.len()])
        .split(rows[1]);

    for (project, column) in projects.iter().zip(columns.iter()) {
        let tags: Vec<Span> = project
            .tags
            .iter()
            .map(|tag| {
                Span::styled(
                    format!("#{} ", tag),
                    Style::default().fg(palette.accent_dim),
                )
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                project.title.as_str(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                project.description.as_str(),
                Style::default().fg(palette.text_secondary),
            )),
            Line::default(),
            Line::from(tags),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("⌥ {} ", app.t("projects.code")),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(project.code_url, Style::default().fg(palette.text_muted)),
                Span::raw("   "),
                Span::styled(
                    format!("↗ {} ", app.t("projects.demo")),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(project.demo_url, Style::default().fg(palette.text_muted)),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(card_block(palette, false).padding(Padding::uniform(1)))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *column);
    }
}
