//! Localization for folio-tui.
//!
//! UI text lives in a nested [`LocaleTable`] keyed by [`Language`]. Labels
//! are looked up with dotted paths such as `"about.whoAmIText"`:
//!
//! - [`lookup`] is strict and reports why a key failed;
//! - [`resolve`] never fails and shows the raw key instead.
//!
//! The French/English strings are compiled in; a JSON locale file can be
//! layered on top at startup.

mod language;
mod resolve;
mod strings;
mod table;

pub use language::Language;
pub use resolve::{LookupError, lookup, resolve};
pub use table::{LocaleNode, LocaleTable, ParityGap};
