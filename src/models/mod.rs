//! Data models for folio-tui
//!
//! This module contains the core data structures:
//! - Timeline records and the timeline filter
//! - Portfolio content (skills, projects, contact details)
//! - Contact form state
//! - Enums for navigation state

pub mod contact;
pub mod enums;
pub mod filter;
pub mod portfolio;
pub mod timeline;

// Re-exports for convenient access
pub use contact::{ContactForm, Delivered, FieldIssue, FormField, SubmitStatus};
pub use enums::{AboutTab, InputMode, Section, ThemeMode};
pub use filter::{CategoryFilter, CategoryScope, FilterState, filter_entries, numbered};
pub use portfolio::{ContactAction, Portfolio};
pub use timeline::{TechKind, TimelineEntry};
