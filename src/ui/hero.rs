//! Home section: greeting, name, role and calls to action

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::portfolio::SOCIAL_LINKS;

pub fn render_hero(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let accent_bold = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("● {}", app.t("hero.welcome")),
            Style::default().fg(palette.success),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                app.t("hero.title"),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(app.t("hero.subtitle"), accent_bold),
        ]),
        Line::from(Span::styled(
            app.t("hero.role"),
            Style::default().fg(palette.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.t("hero.description"),
            Style::default().fg(palette.text_secondary),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!(" p  {} → ", app.t("hero.viewProjects")),
                Style::default()
                    .fg(palette.on_accent)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" c  {} ", app.t("hero.contactMe")),
                Style::default()
                    .fg(palette.text_primary)
                    .bg(palette.bg_tertiary),
            ),
        ]),
        Line::default(),
    ];

    let socials: Vec<Span> = SOCIAL_LINKS
        .iter()
        .flat_map(|link| {
            [
                Span::styled(link.name, accent_bold),
                Span::styled(
                    format!(" {}   ", link.url),
                    Style::default().fg(palette.text_muted),
                ),
            ]
        })
        .collect();
    lines.push(Line::from(socials));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // Center the block vertically
    let height = 12.min(area.height);
    let top = area.y + (area.height - height) / 2;
    frame.render_widget(paragraph, Rect::new(area.x, top, area.width, area.height - (top - area.y)));
}
