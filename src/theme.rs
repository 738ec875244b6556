//! Theme module for folio-tui
//!
//! This module provides the dark and light color palettes and shared
//! styling constants. The accent is the site's orange (#f97316).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::models::ThemeMode;

/// Rounded card borders
pub const ROUNDED_BORDERS: BorderType = BorderType::Rounded;

/// Full set of colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,
    pub border_subtle: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub on_accent: Color,
    pub success: Color,
    pub error: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

// ============================================================================
// Dark - night background, orange accent
// ============================================================================

pub const DARK: Palette = Palette {
    bg_primary: Color::Rgb(10, 10, 12),        // #0a0a0c
    bg_secondary: Color::Rgb(20, 20, 24),      // #141418
    bg_tertiary: Color::Rgb(30, 30, 36),       // #1e1e24
    border_subtle: Color::Rgb(48, 48, 56),     // #303038
    accent: Color::Rgb(249, 115, 22),          // #f97316
    accent_dim: Color::Rgb(154, 72, 18),       // #9a4812
    on_accent: Color::Rgb(255, 255, 255),
    success: Color::Rgb(74, 222, 128),         // #4ade80
    error: Color::Rgb(248, 113, 113),          // #f87171
    text_primary: Color::Rgb(226, 232, 240),   // #e2e8f0
    text_secondary: Color::Rgb(148, 163, 184), // #94a3b8
    text_muted: Color::Rgb(100, 116, 139),     // #64748b
};

// ============================================================================
// Light - paper background, same accent
// ============================================================================

pub const LIGHT: Palette = Palette {
    bg_primary: Color::Rgb(250, 250, 249),     // #fafaf9
    bg_secondary: Color::Rgb(241, 241, 239),   // #f1f1ef
    bg_tertiary: Color::Rgb(229, 229, 226),    // #e5e5e2
    border_subtle: Color::Rgb(212, 212, 208),  // #d4d4d0
    accent: Color::Rgb(234, 88, 12),           // #ea580c
    accent_dim: Color::Rgb(253, 186, 116),     // #fdba74
    on_accent: Color::Rgb(255, 255, 255),
    success: Color::Rgb(22, 163, 74),          // #16a34a
    error: Color::Rgb(220, 38, 38),            // #dc2626
    text_primary: Color::Rgb(24, 24, 27),      // #18181b
    text_secondary: Color::Rgb(63, 63, 70),    // #3f3f46
    text_muted: Color::Rgb(113, 113, 122),     // #71717a
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_mode() {
        assert_eq!(palette(ThemeMode::Dark), &DARK);
        assert_eq!(palette(ThemeMode::Light), &LIGHT);
        assert_ne!(DARK.bg_primary, LIGHT.bg_primary);
    }
}
