//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for Diff View
pub mod diff_view {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Unchanged line color
    pub const CONTEXT: Color = Color::Reset;
    /// Line number gutter color
    pub const LINE_NUMBER: Color = Color::DarkGray;
    /// Language tag in the title
    pub const LANGUAGE: Color = Color::Yellow;
    /// Aligner and strip setting values
    pub const SETTING: Color = Color::Cyan;
}

/// Colors for Compare View
pub mod compare_view {
    use super::*;

    pub const BRUTE_FORCE: Color = Color::Red;
    pub const OPTIMIZED: Color = Color::Green;
    /// Fired signal labels
    pub const SIGNAL: Color = Color::Magenta;
    pub const ADDED: Color = Color::Green;
    pub const REMOVED: Color = Color::Red;
    pub const MODIFIED: Color = Color::Yellow;
}
