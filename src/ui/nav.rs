//! Navigation bar and scroll progress indicator

use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::app::App;
use crate::models::Section;

/// Render the section tabs on the first row and the progress bar on the second
pub fn render_nav(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut spans = vec![Span::styled(
        " MB ",
        Style::default()
            .fg(palette.on_accent)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));

    for (i, section) in Section::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, app.t(section.label_key()));
        let style = if *section == app.section {
            Style::default()
                .fg(palette.accent)
                .bg(palette.bg_tertiary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("[{}]", app.language().code().to_uppercase()),
        Style::default().fg(palette.text_muted),
    ));
    spans.push(Span::styled(
        format!(" [{}]", app.theme().label()),
        Style::default().fg(palette.text_muted),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_primary));
    frame.render_widget(bar, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.bg_secondary))
        .percent(app.section.progress_percent())
        .label("");
    frame.render_widget(gauge, rows[1]);
}
