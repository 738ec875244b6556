//! About section: bio, stat cards and the filterable timeline

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::helpers::heading;
use super::stats::render_stat_cards;
use super::timeline::render_timeline;
use crate::app::App;
use crate::models::portfolio::{EXPERTISE, WORK_FILTERS};
use crate::models::{AboutTab, CategoryFilter, InputMode};

pub fn render_about(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    frame.render_widget(
        Paragraph::new(heading(app.t("about.title"), app.t("about.subtitle"), palette)),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    render_bio(app, columns[0], frame);
    render_journey(app, columns[1], frame);
}

fn render_bio(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area.inner(Margin::new(1, 0)));

    let badges: Vec<Span> = EXPERTISE
        .iter()
        .flat_map(|badge| {
            [
                Span::styled(
                    format!(" {} ", badge),
                    Style::default().fg(palette.accent).bg(palette.bg_tertiary),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let bio = Paragraph::new(vec![
        Line::from(Span::styled(
            app.t("about.whoAmI"),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.t("about.whoAmIText"),
            Style::default().fg(palette.text_secondary),
        )),
        Line::default(),
        Line::from(badges),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(bio, parts[0]);

    let stat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(parts[1]);
    render_stat_cards(
        stat_rows[0],
        &[("⌖", app.t("about.location")), ("◷", app.t("about.experience"))],
        palette,
        frame,
    );
    render_stat_cards(
        stat_rows[1],
        &[("◆", app.t("about.projects")), ("☕", app.t("about.coffees"))],
        palette,
        frame,
    );
}

fn render_journey(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Chips and search
            Constraint::Min(3),    // Cards
        ])
        .split(area.inner(Margin::new(1, 0)));

    frame.render_widget(
        Paragraph::new(Span::styled(
            app.t("about.journey"),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        parts[0],
    );

    let tab_spans: Vec<Span> = [AboutTab::Work, AboutTab::Education]
        .iter()
        .map(|tab| {
            let style = if *tab == app.about_tab {
                Style::default()
                    .fg(palette.on_accent)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_secondary).bg(palette.bg_tertiary)
            };
            Span::styled(format!(" {} ", app.t(tab.label_key())), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), parts[1]);

    let mut filter_spans = Vec::new();
    if app.about_tab == AboutTab::Work {
        for (tag, label_key) in WORK_FILTERS {
            let active = CategoryFilter::from_tag(tag) == app.filter.category;
            let style = if active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_muted)
            };
            let marker = if active { "●" } else { "○" };
            filter_spans.push(Span::styled(format!("{} {}  ", marker, app.t(label_key)), style));
        }
    }

    let searching = app.input_mode == InputMode::Search;
    let (search_text, search_style) = if app.filter.query.is_empty() && !searching {
        (app.t("about.search").to_string(), Style::default().fg(palette.text_muted))
    } else {
        let cursor = if searching { "▏" } else { "" };
        (
            format!("{}{}", app.filter.query, cursor),
            Style::default().fg(palette.text_primary),
        )
    };
    let search_border = if searching { palette.accent } else { palette.border_subtle };
    filter_spans.push(Span::styled("⌕ ", Style::default().fg(search_border)));
    filter_spans.push(Span::styled(search_text, search_style));
    frame.render_widget(Paragraph::new(Line::from(filter_spans)), parts[2]);

    render_timeline(app, parts[3], frame);
}
