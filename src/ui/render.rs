//! Frame layout: navigation bar, active section, footer and hint bar

use chrono::{Datelike, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::about::render_about;
use super::contact::render_contact;
use super::hero::render_hero;
use super::nav::render_nav;
use super::projects::render_projects;
use super::skills::render_skills;
use crate::app::App;
use crate::models::{AboutTab, InputMode, Section};

/// Draw the whole UI for the current state
pub fn draw(app: &App, frame: &mut Frame) {
    let palette = app.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_primary)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation + progress
            Constraint::Min(3),    // Section content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    render_nav(app, main_layout[0], frame);

    let content_area = main_layout[1].inner(Margin::new(1, 1));
    match app.section {
        Section::Home => render_hero(app, content_area, frame),
        Section::About => render_about(app, content_area, frame),
        Section::Skills => render_skills(app, content_area, frame),
        Section::Projects => render_projects(app, content_area, frame),
        Section::Contact => render_contact(app, content_area, frame),
    }

    let footer = Paragraph::new(Span::styled(
        footer_text(Local::now().year(), app.t("footer.rights")),
        Style::default().fg(palette.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, main_layout[2]);

    // Bottom bar with keybinding hints
    let keybindings = Paragraph::new(format!(" {} ", hint_keys(app).join(" | ")))
        .style(Style::default().fg(palette.on_accent).bg(palette.accent));
    frame.render_widget(keybindings, main_layout[3]);
}

fn footer_text(year: i32, rights: &str) -> String {
    format!("© {} Mohammed Benbrahim. {}", year, rights)
}

/// Whether `x` would change what the active timeline tab shows
fn has_clearable_filter(app: &App) -> bool {
    match app.about_tab {
        AboutTab::Work => app.filter.is_active(),
        // Category chips do not apply to education
        AboutTab::Education => !app.filter.query.is_empty(),
    }
}

/// Hints for the bottom bar, most specific first
fn hint_keys(app: &App) -> Vec<&str> {
    match app.input_mode {
        InputMode::Search => return vec![app.t("hints.editing")],
        InputMode::Form => return vec![app.t("hints.form"), app.t("hints.editing")],
        InputMode::Navigate => {}
    }

    let mut hints = Vec::new();
    match app.section {
        Section::Home => hints.push(app.t("hints.home")),
        Section::About => hints.push(app.t("hints.timeline")),
        Section::Contact => hints.push(app.t("hints.contact")),
        Section::Skills | Section::Projects => {}
    }
    if app.section == Section::About && has_clearable_filter(app) {
        hints.push(app.t("about.clearFilters"));
    }
    hints.extend([
        app.t("hints.sections"),
        app.t("hints.language"),
        app.t("hints.theme"),
        app.t("hints.quit"),
    ]);
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    use crate::i18n::LocaleTable;
    use crate::settings::Settings;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(140, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(LocaleTable::builtin(), Settings::default(), None)
    }

    #[test]
    fn test_draw_every_section() {
        let mut app = app();
        for section in Section::ALL {
            app.goto(section);
            let screen = render(&app);
            assert!(screen.contains("Accueil"));
            assert!(screen.contains("Mohammed Benbrahim."));
        }
    }

    #[test]
    fn test_draw_about_shows_countdown() {
        let mut app = app();
        app.goto(Section::About);
        let screen = render(&app);
        assert!(screen.contains("03"));
        assert!(screen.contains("NovaTech Maroc"));
    }

    #[test]
    fn test_draw_about_no_results() {
        let mut app = app();
        app.goto(Section::About);
        app.filter.query = "zzz-nothing".to_string();
        let screen = render(&app);
        assert!(screen.contains("Aucune expérience"));
    }

    #[test]
    fn test_draw_follows_language() {
        let mut app = app();
        app.toggle_language();
        let screen = render(&app);
        assert!(screen.contains("Home"));
        assert!(screen.contains("All rights reserved."));
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2026, "All rights reserved."),
            "© 2026 Mohammed Benbrahim. All rights reserved."
        );
    }

    #[test]
    fn test_clear_hint_on_education_search() {
        let mut app = app();
        app.goto(Section::About);
        app.set_tab(AboutTab::Education);
        let clear = app.t("about.clearFilters").to_string();

        app.cycle_category();
        assert!(!hint_keys(&app).contains(&clear.as_str()));

        app.filter.query = "enset".to_string();
        assert!(hint_keys(&app).contains(&clear.as_str()));
    }

    #[test]
    fn test_form_mode_hints() {
        let mut app = app();
        app.goto(Section::Contact);
        app.input_mode = InputMode::Form;
        assert_eq!(hint_keys(&app).len(), 2);
    }
}
