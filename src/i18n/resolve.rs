//! Dotted key-path lookup into a [`LocaleTable`].

use super::{Language, LocaleNode, LocaleTable};

/// Why a key could not be resolved to a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("empty translation key")]
    EmptyKey,

    #[error("no translations loaded for language {0}")]
    UnknownLanguage(Language),

    #[error("translation key {key:?} not found for {language}")]
    Missing { language: Language, key: String },

    #[error("translation key {key:?} names a section, not a string ({language})")]
    NotALeaf { language: Language, key: String },

    #[error("translation key {key:?} is empty for {language}")]
    EmptyValue { language: Language, key: String },
}

/// Strict lookup: walk `key` one dot-separated segment at a time.
///
/// Fails when a segment is absent, when a leaf is reached while segments
/// remain, when the path stops on a section, or when the leaf is empty.
pub fn lookup<'t>(
    table: &'t LocaleTable,
    language: Language,
    key: &str,
) -> Result<&'t str, LookupError> {
    if key.is_empty() {
        return Err(LookupError::EmptyKey);
    }

    let mut node = table
        .root(language)
        .ok_or(LookupError::UnknownLanguage(language))?;

    for segment in key.split('.') {
        let LocaleNode::Section(children) = node else {
            return Err(LookupError::Missing {
                language,
                key: key.to_string(),
            });
        };
        node = children.get(segment).ok_or_else(|| LookupError::Missing {
            language,
            key: key.to_string(),
        })?;
    }

    match node {
        LocaleNode::Text(text) if text.is_empty() => Err(LookupError::EmptyValue {
            language,
            key: key.to_string(),
        }),
        LocaleNode::Text(text) => Ok(text.as_str()),
        LocaleNode::Section(_) => Err(LookupError::NotALeaf {
            language,
            key: key.to_string(),
        }),
    }
}

/// Localized text for `key`, or `key` itself when it cannot be resolved.
///
/// A raw key on screen is the signal for a missing translation; rendering
/// never fails because of one.
pub fn resolve<'a>(table: &'a LocaleTable, language: Language, key: &'a str) -> &'a str {
    match lookup(table, language, key) {
        Ok(text) => text,
        Err(err @ LookupError::NotALeaf { .. }) => {
            tracing::warn!(%err, "translation key resolves to a section");
            key
        }
        Err(err) => {
            tracing::debug!(%err, "falling back to raw translation key");
            key
        }
    }
}
