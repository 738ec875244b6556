//! Timeline card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Padding, Paragraph},
};

use super::helpers::{card_block, truncate, visible_window, wrap_text};
use crate::app::App;
use crate::models::{TechKind, TimelineEntry, numbered};
use crate::theme::Palette;

/// Description lines shown while a card is collapsed
pub const COLLAPSED_LINES: usize = 3;

/// Build the content lines of one timeline card.
///
/// Layout inside the rounded border:
/// - number, date • organization, category badge
/// - title
/// - location
/// - description (first three lines unless expanded)
/// - read more / read less toggle when the description is longer
/// - tech tags with their glyphs
pub fn card_lines<'a>(
    entry: &'a TimelineEntry,
    number: usize,
    expanded: bool,
    width: usize,
    palette: &Palette,
    toggle_labels: (&'a str, &'a str),
) -> Vec<Line<'a>> {
    let badge = format!(" {} ", entry.category);
    let header_room = width.saturating_sub(badge.chars().count() + 5);
    let meta = truncate(&format!("{} • {}", entry.date, entry.organization), header_room);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:02}", number),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(meta, Style::default().fg(palette.text_muted)),
            Span::raw(" "),
            Span::styled(
                badge,
                Style::default().fg(palette.accent).bg(palette.bg_tertiary),
            ),
        ]),
        Line::from(Span::styled(
            truncate(&entry.title, width),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if !entry.location.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("⌖ {}", entry.location),
            Style::default().fg(palette.text_muted),
        )));
    }

    let description = wrap_text(&entry.description, width);
    let overflows = description.len() > COLLAPSED_LINES;
    let shown = if expanded || !overflows {
        description.len()
    } else {
        COLLAPSED_LINES
    };
    for text in description.into_iter().take(shown) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(palette.text_secondary),
        )));
    }
    if overflows {
        let (more, less) = toggle_labels;
        let label = if expanded {
            format!("▴ {}", less)
        } else {
            format!("▾ {}", more)
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(palette.accent),
        )));
    }

    if !entry.tags.is_empty() {
        let tags: Vec<Span> = entry
            .tags
            .iter()
            .map(|tag| {
                Span::styled(
                    format!("{} {}  ", TechKind::classify(tag).glyph(), tag),
                    Style::default().fg(palette.text_secondary),
                )
            })
            .collect();
        lines.push(Line::from(tags));
    }

    lines
}

/// Render the filtered timeline for the active tab, scrolled so the
/// selected card stays visible.
pub fn render_timeline(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let entries = app.visible_entries();

    if entries.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                app.t("about.noResults"),
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                app.t("about.clearFilters"),
                Style::default().fg(palette.accent),
            )),
        ])
        .alignment(Alignment::Center)
        .block(card_block(palette, false));
        frame.render_widget(empty, area);
        return;
    }

    // Borders plus one column of padding on each side
    let inner_width = area.width.saturating_sub(4) as usize;
    let toggle_labels = (app.t("about.readMore"), app.t("about.readLess"));
    let selected = app.selected_entry.min(entries.len() - 1);

    let cards: Vec<Vec<Line>> = numbered(&entries)
        .into_iter()
        .map(|(number, entry)| {
            card_lines(
                entry,
                number,
                app.is_expanded(entry.id),
                inner_width,
                palette,
                toggle_labels,
            )
        })
        .collect();
    let heights: Vec<u16> = cards.iter().map(|lines| lines.len() as u16 + 2).collect();
    let start = visible_window(&heights, selected, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, lines) in cards.into_iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let height = (lines.len() as u16 + 2).min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        let block = card_block(palette, index == selected).padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), card_area);
        y += height;
    }
}
