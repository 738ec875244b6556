//! Application state and core logic for folio-tui.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: active section, language and theme
//! preferences, timeline filter state, per-card expansion and the contact
//! form.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::i18n::{Language, LocaleTable, resolve};
use crate::models::contact::{COPY_FEEDBACK, SUBMIT_DELAY, spawn_delivery};
use crate::models::portfolio::WORK_FILTERS;
use crate::models::{
    AboutTab, CategoryFilter, CategoryScope, ContactAction, ContactForm, Delivered, FilterState,
    InputMode, Portfolio, Section, ThemeMode, TimelineEntry,
};
use crate::settings::Settings;
use crate::theme::{Palette, palette};

/// Application state
pub struct App {
    pub table: LocaleTable,
    pub settings: Settings,
    pub settings_path: Option<PathBuf>,
    pub portfolio: Portfolio,
    pub section: Section,
    pub input_mode: InputMode,
    pub should_quit: bool,
    // About: timeline state
    pub about_tab: AboutTab,
    pub filter: FilterState,
    pub selected_entry: usize,
    // Ids of timeline cards showing their full description
    pub expanded: HashSet<u32>,
    // Contact: info cards and form
    pub selected_contact: usize,
    pub clipboard: Option<String>,
    pub copied: Option<(&'static str, Instant)>,
    pub contact: ContactForm,
    delivery_tx: mpsc::UnboundedSender<Delivered>,
    delivery_rx: mpsc::UnboundedReceiver<Delivered>,
}

impl App {
    pub fn new(table: LocaleTable, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let portfolio = Portfolio::build(&table, settings.language);
        let (delivery_tx, delivery_rx) = mpsc::unbounded_channel();

        Self {
            table,
            settings,
            settings_path,
            portfolio,
            section: Section::Home,
            input_mode: InputMode::Navigate,
            should_quit: false,
            about_tab: AboutTab::Work,
            filter: FilterState::default(),
            selected_entry: 0,
            expanded: HashSet::new(),
            selected_contact: 0,
            clipboard: None,
            copied: None,
            contact: ContactForm::default(),
            delivery_tx,
            delivery_rx,
        }
    }

    /// Localized text for `key` in the active language
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        resolve(&self.table, self.settings.language, key)
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.settings.theme
    }

    pub fn palette(&self) -> &'static Palette {
        palette(self.settings.theme)
    }

    pub fn set_language(&mut self, language: Language) {
        if self.settings.language == language {
            return;
        }
        self.settings.language = language;
        self.portfolio = Portfolio::build(&self.table, language);
        tracing::info!(%language, "language changed");
        self.persist_settings();
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.settings.language.toggle());
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggle();
        tracing::info!(theme = %self.settings.theme, "theme changed");
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Some(ref path) = self.settings_path {
            if let Err(e) = self.settings.save(path) {
                tracing::warn!("Failed to save settings to {:?}: {}", path, e);
            }
        }
    }

    pub fn goto(&mut self, section: Section) {
        self.section = section;
        self.input_mode = InputMode::Navigate;
    }

    // ------------------------------------------------------------------
    // Timeline
    // ------------------------------------------------------------------

    /// Entries of the active tab after filtering, in display order
    pub fn visible_entries(&self) -> Vec<&TimelineEntry> {
        match self.about_tab {
            AboutTab::Work => self.filter.apply(&self.portfolio.work, CategoryScope::Applies),
            AboutTab::Education => self
                .filter
                .apply(&self.portfolio.education, CategoryScope::Skipped),
        }
    }

    pub fn set_tab(&mut self, tab: AboutTab) {
        self.about_tab = tab;
        self.selected_entry = 0;
    }

    /// Advance the category chip: all -> internship -> full-time -> all
    pub fn cycle_category(&mut self) {
        let current = WORK_FILTERS
            .iter()
            .position(|(tag, _)| CategoryFilter::from_tag(tag) == self.filter.category)
            .unwrap_or(0);
        let (next, _) = WORK_FILTERS[(current + 1) % WORK_FILTERS.len()];
        self.filter.category = CategoryFilter::from_tag(next);
        self.selected_entry = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.selected_entry = 0;
    }

    pub fn select_next_entry(&mut self) {
        let count = self.visible_entries().len();
        if count > 0 && self.selected_entry + 1 < count {
            self.selected_entry += 1;
        }
    }

    pub fn select_prev_entry(&mut self) {
        self.selected_entry = self.selected_entry.saturating_sub(1);
    }

    pub fn toggle_selected_expanded(&mut self) {
        let Some(id) = self.visible_entries().get(self.selected_entry).map(|e| e.id) else {
            return;
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    /// Copy the selected contact card's value into the in-app clipboard
    pub fn copy_selected_contact(&mut self, now: Instant) {
        let Some(info) = self.portfolio.contact.get(self.selected_contact) else {
            return;
        };
        if info.action != ContactAction::Copy {
            return;
        }
        self.clipboard = Some(info.value.clone());
        self.copied = Some((info.id, now));
        tracing::debug!(field = info.id, "copied contact value");
    }

    pub fn submit_contact(&mut self) {
        if self.contact.begin_submit() {
            tracing::info!("contact form submitted");
            spawn_delivery(self.delivery_tx.clone(), SUBMIT_DELAY);
        } else {
            tracing::debug!(issues = self.contact.issues.len(), "contact form not submitted");
        }
    }

    /// Apply finished deliveries and expire timed feedback
    pub fn tick(&mut self, now: Instant) {
        while let Ok(Delivered) = self.delivery_rx.try_recv() {
            tracing::info!("contact message delivered");
            self.contact.complete(now);
            if self.input_mode == InputMode::Form {
                self.input_mode = InputMode::Navigate;
            }
        }
        self.contact.expire_success(now);
        if let Some((_, at)) = self.copied {
            if now.duration_since(at) >= COPY_FEEDBACK {
                self.copied = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Form => self.handle_form_key(key),
            InputMode::Navigate => self.handle_navigate_key(key),
        }
    }

    fn handle_navigate_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                    self.goto(section);
                }
            }
            KeyCode::Tab => self.goto(self.section.next()),
            KeyCode::BackTab => self.goto(self.section.prev()),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => match self.section {
                Section::Home => self.handle_home_key(key),
                Section::About => self.handle_about_key(key),
                Section::Contact => self.handle_contact_key(key),
                Section::Skills | Section::Projects => {}
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') => self.goto(Section::Projects),
            KeyCode::Char('c') => self.goto(Section::Contact),
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('w') => self.set_tab(AboutTab::Work),
            KeyCode::Char('e') => self.set_tab(AboutTab::Education),
            KeyCode::Left | KeyCode::Right => self.set_tab(self.about_tab.toggle()),
            KeyCode::Char('f') if self.about_tab == AboutTab::Work => self.cycle_category(),
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_entry(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_entry(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected_expanded(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Navigate,
            KeyCode::Backspace => {
                self.filter.query.pop();
                self.selected_entry = 0;
            }
            KeyCode::Char(c) => {
                self.filter.query.push(c);
                self.selected_entry = 0;
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_contact + 1 < self.portfolio.contact.len() {
                    self.selected_contact += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_contact = self.selected_contact.saturating_sub(1);
            }
            KeyCode::Char('y') => self.copy_selected_contact(Instant::now()),
            KeyCode::Enter | KeyCode::Char('i') => self.input_mode = InputMode::Form,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_contact();
            return;
        }
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Navigate,
            KeyCode::Tab | KeyCode::Down => self.contact.focus = self.contact.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus = self.contact.focus.prev(),
            KeyCode::Enter => {
                if self.contact.focus == crate::models::FormField::Message {
                    self.submit_contact();
                } else {
                    self.contact.focus = self.contact.focus.next();
                }
            }
            // Fields are frozen while a message is in flight
            _ if self.contact.is_sending() => {}
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) => self.contact.push_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::FormField;
    use crate::models::contact::SubmitStatus;

    fn app() -> App {
        App::new(LocaleTable::builtin(), Settings::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_app_defaults() {
        let app = app();
        assert_eq!(app.section, Section::Home);
        assert_eq!(app.language(), Language::Fr);
        assert_eq!(app.t("nav.home"), "Accueil");
        assert_eq!(app.visible_entries().len(), 3);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section, Section::Skills);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Projects);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.section, Section::Skills);
    }

    #[test]
    fn test_home_calls_to_action() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.section, Section::Projects);
        app.goto(Section::Home);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.section, Section::Contact);
    }

    #[test]
    fn test_language_toggle_rebuilds_content_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut app = App::new(LocaleTable::builtin(), Settings::default(), Some(path.clone()));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.language(), Language::En);
        assert_eq!(app.t("nav.home"), "Home");
        assert_eq!(app.portfolio.work[0].title, "Junior Full-Stack Developer");
        assert_eq!(Settings::load(&path).unwrap().language, Language::En);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut app = App::new(LocaleTable::builtin(), Settings::default(), Some(path.clone()));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), ThemeMode::Light);
        assert_eq!(Settings::load(&path).unwrap().theme, ThemeMode::Light);
    }

    #[test]
    fn test_category_cycle() {
        let mut app = app();
        app.goto(Section::About);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter.category, CategoryFilter::from_tag("internship"));
        assert_eq!(app.visible_entries().len(), 1);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter.category, CategoryFilter::from_tag("full-time"));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter.category, CategoryFilter::All);
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut app = app();
        app.goto(Section::About);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        type_str(&mut app, "upworkq");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filter.query, "upwork");
        // 'q' typed in search mode must not quit
        assert!(!app.should_quit);
        assert_eq!(app.visible_entries().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Navigate);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.filter.is_active());
    }

    #[test]
    fn test_education_tab_ignores_category() {
        let mut app = app();
        app.goto(Section::About);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.about_tab, AboutTab::Education);
        assert_eq!(app.visible_entries().len(), 3);
        // Category chip is inactive on the education tab
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter.category, CategoryFilter::from_tag("internship"));
    }

    #[test]
    fn test_selection_and_expand() {
        let mut app = app();
        app.goto(Section::About);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_entry, 2);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_expanded(3));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.is_expanded(3));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_entry, 1);
    }

    #[test]
    fn test_copy_contact() {
        let mut app = app();
        app.goto(Section::Contact);
        let now = Instant::now();
        app.copy_selected_contact(now);
        assert_eq!(app.clipboard.as_deref(), Some(crate::models::portfolio::EMAIL));
        assert_eq!(app.copied.map(|(id, _)| id), Some("email"));

        app.tick(now + COPY_FEEDBACK);
        assert!(app.copied.is_none());

        // Location cannot be copied
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        app.clipboard = None;
        app.copy_selected_contact(now);
        assert!(app.clipboard.is_none());
    }

    #[test]
    fn test_form_typing_and_focus() {
        let mut app = app();
        app.goto(Section::Contact);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Form);

        type_str(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.contact.focus, FormField::Email);
        type_str(&mut app, "qt");
        assert_eq!(app.contact.email, "qt");
        assert!(!app.should_quit);
        assert_eq!(app.theme(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_submit_contact_completes_after_delivery() {
        let mut app = app();
        app.goto(Section::Contact);
        press(&mut app, KeyCode::Enter);
        for (field, text) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Subject, "Hi"),
            (FormField::Message, "Hello there"),
        ] {
            app.contact.focus = field;
            type_str(&mut app, text);
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.contact.status, SubmitStatus::Sending);

        tokio::time::sleep(SUBMIT_DELAY + Duration::from_millis(200)).await;
        app.tick(Instant::now());
        assert!(matches!(app.contact.status, SubmitStatus::Sent { .. }));
        assert!(app.contact.name.is_empty());
        assert_eq!(app.input_mode, InputMode::Navigate);
    }

    #[test]
    fn test_fields_frozen_while_sending() {
        let mut app = app();
        app.goto(Section::Contact);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Ada");
        app.contact.status = SubmitStatus::Sending;

        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "x");
        assert_eq!(app.contact.name, "Ada");
    }

    #[test]
    fn test_invalid_submit_reports_issues() {
        let mut app = app();
        app.goto(Section::Contact);
        press(&mut app, KeyCode::Enter);
        app.contact.focus = FormField::Message;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.contact.status, SubmitStatus::Idle);
        assert_eq!(app.contact.issues.len(), 4);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = app();
        app.goto(Section::About);
        press(&mut app, KeyCode::Char('/'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
