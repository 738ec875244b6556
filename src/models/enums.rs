//! Enums used throughout folio-tui
//!
//! This module contains the various enum types used for navigation state
//! and UI rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Page section, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Translation key of the navigation label
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::About => "nav.about",
            Section::Skills => "nav.skills",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = (n as usize).checked_sub(1)?;
        Section::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }

    /// Position through the page as a percentage (Home = 0, Contact = 100)
    pub fn progress_percent(&self) -> u16 {
        let last = Section::ALL.len() - 1;
        (self.index() * 100 / last) as u16
    }
}

/// Timeline tab in the About section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Work,
    Education,
}

impl AboutTab {
    pub fn toggle(&self) -> Self {
        match self {
            AboutTab::Work => AboutTab::Education,
            AboutTab::Education => AboutTab::Work,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AboutTab::Work => "about.professional",
            AboutTab::Education => "about.education",
        }
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(Error::InvalidTheme(s.to_string())),
        }
    }
}

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Navigate, // Keys are shortcuts
    Search,   // Keys edit the timeline search query
    Form,     // Keys edit the focused contact form field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_next_prev_wrap() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
    }

    #[test]
    fn test_section_from_number() {
        assert_eq!(Section::from_number(1), Some(Section::Home));
        assert_eq!(Section::from_number(5), Some(Section::Contact));
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(6), None);
    }

    #[test]
    fn test_section_progress() {
        assert_eq!(Section::Home.progress_percent(), 0);
        assert_eq!(Section::Skills.progress_percent(), 50);
        assert_eq!(Section::Contact.progress_percent(), 100);
    }

    #[test]
    fn test_about_tab_toggle() {
        assert_eq!(AboutTab::Work.toggle(), AboutTab::Education);
        assert_eq!(AboutTab::default(), AboutTab::Work);
    }

    #[test]
    fn test_theme_mode_parse_and_toggle() {
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("neon".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }
}
