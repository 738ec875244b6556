//! UI module for folio-tui
//!
//! This module contains the rendering functions for every section of the
//! portfolio, the timeline cards and the shared card helpers.

mod about;
mod contact;
mod helpers;
mod hero;
mod nav;
mod projects;
mod render;
mod skills;
mod stats;
mod timeline;

pub use render::draw;
