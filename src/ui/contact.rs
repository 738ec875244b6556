//! Contact section: info cards with copy feedback and the message form

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::{card_block, heading};
use crate::app::App;
use crate::models::contact::SubmitStatus;
use crate::models::portfolio::SOCIAL_LINKS;
use crate::models::{ContactAction, FormField, InputMode};
use crate::theme::ROUNDED_BORDERS;

pub fn render_contact(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(heading(app.t("contact.title"), app.t("contact.subtitle"), palette)),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    render_info(app, columns[0].inner(Margin::new(1, 0)), frame);
    render_form(app, columns[1].inner(Margin::new(1, 0)), frame);
}

fn render_info(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let mut constraints = vec![Constraint::Length(4); app.portfolio.contact.len()];
    constraints.push(Constraint::Min(3));
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let browsing = app.input_mode == InputMode::Navigate;
    for (index, info) in app.portfolio.contact.iter().enumerate() {
        let mut value_line = vec![Span::styled(
            info.value.as_str(),
            Style::default().fg(palette.text_primary),
        )];
        if info.action == ContactAction::Copy {
            let copied = app.copied.is_some_and(|(id, _)| id == info.id);
            value_line.push(if copied {
                Span::styled(
                    format!("  ✓ {}", app.t("contact.copied")),
                    Style::default().fg(palette.success),
                )
            } else {
                Span::styled("  ⧉ y", Style::default().fg(palette.text_muted))
            });
        }

        let lines = vec![
            Line::from(Span::styled(
                info.label.as_str(),
                Style::default().fg(palette.text_muted),
            )),
            Line::from(value_line),
        ];
        let selected = browsing && index == app.selected_contact;
        frame.render_widget(
            Paragraph::new(lines).block(card_block(palette, selected)),
            parts[index],
        );
    }

    let mut footer = vec![
        Line::from(Span::styled(
            app.t("contact.available"),
            Style::default().fg(palette.text_secondary),
        )),
        Line::default(),
    ];
    for link in SOCIAL_LINKS.iter() {
        footer.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", link.name),
                Style::default().fg(palette.accent),
            ),
            Span::styled(link.url, Style::default().fg(palette.text_muted)),
        ]));
    }
    if let Some(rest) = parts.last() {
        frame.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), *rest);
    }
}

fn render_form(app: &App, area: Rect, frame: &mut Frame) {
    let palette = app.palette();
    let form = &app.contact;
    let editing = app.input_mode == InputMode::Form;

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Subject
            Constraint::Min(4),    // Message
            Constraint::Length(1), // Submit
            Constraint::Length(1), // Status
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            app.t("contact.sendMessage"),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        parts[0],
    );

    for (field, field_area) in FormField::ALL.iter().zip(parts[1..5].iter()) {
        let focused = editing && form.focus == *field;
        let issue = form.issue_for(*field);
        let border_color = match (issue, focused) {
            (Some(_), _) => palette.error,
            (None, true) => palette.accent,
            (None, false) => palette.border_subtle,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.bg_secondary))
            .title(Span::styled(
                format!(" {} ", app.t(field.label_key())),
                Style::default().fg(palette.text_secondary),
            ));
        if let Some(issue) = issue {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", app.t(issue.message_key())),
                Style::default().fg(palette.error),
            )));
        }

        let value = form.value(*field);
        let content = if value.is_empty() && !focused {
            Span::styled(field.placeholder(), Style::default().fg(palette.text_muted))
        } else {
            let cursor = if focused { "▏" } else { "" };
            Span::styled(
                format!("{}{}", value, cursor),
                Style::default().fg(palette.text_primary),
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(content))
                .block(block)
                .wrap(Wrap { trim: false }),
            *field_area,
        );
    }

    let button_label = if form.is_sending() {
        app.t("contact.sending")
    } else {
        app.t("contact.sendMessage")
    };
    let button = Paragraph::new(Span::styled(
        format!(" ➤ {} ", button_label),
        Style::default()
            .fg(palette.on_accent)
            .bg(if form.is_sending() { palette.accent_dim } else { palette.accent })
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(button, parts[5]);

    if let SubmitStatus::Sent { .. } = form.status {
        let banner = Paragraph::new(Span::styled(
            format!("✓ {}", app.t("contact.success")),
            Style::default().fg(palette.success),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(banner, parts[6]);
    }
}
