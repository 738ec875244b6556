//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::i18n::Language;
use crate::models::ThemeMode;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Folio TUI - terminal portfolio with French/English localization
#[derive(Debug, Parser)]
#[command(name = "folio-tui", version = VERSION, about)]
#[command(after_help = "Examples:
  folio-tui                                   # Open the portfolio
  folio-tui --lang en --theme light           # Start in English, light theme
  folio-tui timeline --category internship    # Print internships
  folio-tui translate about.title nav.home    # Resolve translation keys")]
pub struct Cli {
    /// Language to start in (fr, en); saved as the new preference
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    /// Color theme (dark, light); saved as the new preference
    #[arg(long, global = true)]
    pub theme: Option<ThemeMode>,

    /// Settings file (default: ~/.config/folio-tui/settings.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// JSON locale file layered over the built-in strings
    #[arg(long, global = true, value_name = "PATH")]
    pub locale_file: Option<PathBuf>,

    /// Directory for folio-tui.log
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the filtered, numbered timeline
    Timeline {
        /// Show the education timeline (category filter does not apply)
        #[arg(long)]
        education: bool,

        /// Category tag to keep, exact match ("all" keeps everything)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search on title or organization
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Print the localized text for each key
    Translate {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Report keys missing from one of the languages
    CheckLocales,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args_runs_tui() {
        let cli = Cli::try_parse_from(["folio-tui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lang.is_none());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["folio-tui", "--lang", "en", "--theme", "light"]).unwrap();
        assert_eq!(cli.lang, Some(Language::En));
        assert_eq!(cli.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn test_parse_invalid_language() {
        assert!(Cli::try_parse_from(["folio-tui", "--lang", "de"]).is_err());
    }

    #[test]
    fn test_parse_timeline() {
        let cli = Cli::try_parse_from([
            "folio-tui", "timeline", "-c", "internship", "-q", "acme", "--lang", "fr",
        ])
        .unwrap();
        assert_eq!(cli.lang, Some(Language::Fr));
        match cli.command {
            Some(Command::Timeline {
                education,
                category,
                query,
            }) => {
                assert!(!education);
                assert_eq!(category, "internship");
                assert_eq!(query, "acme");
            }
            other => panic!("Expected timeline command, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_requires_keys() {
        assert!(Cli::try_parse_from(["folio-tui", "translate"]).is_err());
    }
}
