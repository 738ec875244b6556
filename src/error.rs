//! Application error type.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the application shell (settings, locale files, terminal).
///
/// Translation misses are not errors at this level; see
/// [`crate::i18n::LookupError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported language code: {0:?} (expected \"fr\" or \"en\")")]
    InvalidLanguage(String),

    #[error("unknown theme: {0:?} (expected \"dark\" or \"light\")")]
    InvalidTheme(String),

    #[error("failed to read locale file {path}: {source}")]
    LocaleFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
