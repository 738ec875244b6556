//! Nested per-language string table.
//!
//! A [`LocaleTable`] maps each [`Language`] to a tree of [`LocaleNode`]s.
//! The built-in table is two levels deep (section, then key), but locale
//! files may nest deeper; lookups walk whatever shape is present.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::Language;
use super::strings::{EN, FR, Catalog};
use crate::error::{Error, Result};

/// One node of the translation tree: either a leaf string or a section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocaleNode {
    Text(String),
    Section(BTreeMap<String, LocaleNode>),
}

impl LocaleNode {
    fn empty_section() -> Self {
        LocaleNode::Section(BTreeMap::new())
    }

    fn from_catalog(catalog: Catalog) -> Self {
        let sections = catalog
            .iter()
            .map(|(section, entries)| {
                let leaves = entries
                    .iter()
                    .map(|(key, text)| (key.to_string(), LocaleNode::Text(text.to_string())))
                    .collect();
                (section.to_string(), LocaleNode::Section(leaves))
            })
            .collect();
        LocaleNode::Section(sections)
    }

    /// Overlay `other` onto `self`. Leaves in `other` win; sections merge.
    fn merge(&mut self, other: LocaleNode) {
        match (self, other) {
            (LocaleNode::Section(mine), LocaleNode::Section(theirs)) => {
                for (key, node) in theirs {
                    match mine.get_mut(&key) {
                        Some(existing) => existing.merge(node),
                        None => {
                            mine.insert(key, node);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }

    /// Collect dotted paths of every leaf under this node.
    fn leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            LocaleNode::Text(_) => out.push(prefix.to_string()),
            LocaleNode::Section(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.leaf_paths(&path, out);
                }
            }
        }
    }
}

/// A key present in one language but absent from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityGap {
    pub key: String,
    pub present_in: Language,
    pub missing_in: Language,
}

/// Translation table for every supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    languages: BTreeMap<Language, LocaleNode>,
}

impl LocaleTable {
    /// The French/English strings compiled into the binary.
    pub fn builtin() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(Language::Fr, LocaleNode::from_catalog(FR));
        languages.insert(Language::En, LocaleNode::from_catalog(EN));
        Self { languages }
    }

    /// Parse a JSON locale document such as `{"fr": {"nav": {"home": "Accueil"}}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in table with the locale file at `path` layered on top.
    pub fn builtin_with_overrides(path: &Path) -> Result<Self> {
        let overrides = std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|content| Self::from_json(&content))
            .map_err(|e| Error::LocaleFile {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        let mut table = Self::builtin();
        table.merge(overrides);
        Ok(table)
    }

    pub fn merge(&mut self, other: LocaleTable) {
        for (language, node) in other.languages {
            self.languages
                .entry(language)
                .or_insert_with(LocaleNode::empty_section)
                .merge(node);
        }
    }

    /// Root of the tree for `language`, if the table has one.
    pub fn root(&self, language: Language) -> Option<&LocaleNode> {
        self.languages.get(&language)
    }

    /// Sorted dotted paths of every leaf for `language`.
    pub fn keys(&self, language: Language) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(root) = self.root(language) {
            root.leaf_paths("", &mut keys);
        }
        // Depth-first order is not string order ("a.x" comes before "a-b.y")
        keys.sort();
        keys
    }

    /// Keys that exist in one language subtree but not in another.
    pub fn parity_gaps(&self) -> Vec<ParityGap> {
        let mut gaps = Vec::new();
        for &present_in in Language::all() {
            let keys = self.keys(present_in);
            for &missing_in in Language::all() {
                if missing_in == present_in {
                    continue;
                }
                let other = self.keys(missing_in);
                for key in &keys {
                    if other.binary_search(key).is_err() {
                        gaps.push(ParityGap {
                            key: key.clone(),
                            present_in,
                            missing_in,
                        });
                    }
                }
            }
        }
        gaps
    }
}
