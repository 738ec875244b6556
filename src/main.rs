mod app;
mod cli;
mod error;
mod i18n;
mod logging;
mod models;
mod settings;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use app::App;
use cli::{Cli, Command, print_locale_gaps, print_timeline, print_translations};
use i18n::LocaleTable;
use settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = match logging::init(&logging::log_dir(cli.log_dir.as_deref())) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> error::Result<ExitCode> {
    let table = match cli.locale_file.as_deref() {
        Some(path) => LocaleTable::builtin_with_overrides(path)?,
        None => LocaleTable::builtin(),
    };

    let settings_path = cli.settings.clone().or_else(Settings::default_path);
    let mut settings = settings_path
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    // Flags given on the command line become the saved preference
    let requested = Settings {
        language: cli.lang.unwrap_or(settings.language),
        theme: cli.theme.unwrap_or(settings.theme),
    };
    if requested != settings {
        settings = requested;
        if let Some(ref path) = settings_path {
            settings.save(path)?;
        }
    }
    tracing::info!(language = %settings.language, theme = %settings.theme, "settings loaded");

    match cli.command {
        Some(Command::Timeline {
            education,
            category,
            query,
        }) => {
            print_timeline(
                &mut io::stdout().lock(),
                &table,
                settings.language,
                education,
                &category,
                &query,
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Translate { keys }) => {
            print_translations(&mut io::stdout().lock(), &table, settings.language, &keys)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::CheckLocales) => {
            let gaps = print_locale_gaps(&mut io::stdout().lock(), &table)?;
            if gaps > 0 {
                tracing::warn!(gaps, "locale tables are out of parity");
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let mut app = App::new(table, settings, settings_path);
            run_tui(&mut app)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(app, frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    tracing::info!("Exiting folio-tui");
    Ok(())
}
