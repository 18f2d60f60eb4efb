//! Keybinding definitions for optdiff
//!
//! All keybindings are defined here so the help panel, the status bar and
//! the input handlers stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+D (half page down)
pub fn is_half_page_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('d') | KeyCode::Char('D'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+U (half page up)
pub fn is_half_page_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('u') | KeyCode::Char('U'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between diff and compare views
pub const TAB: KeyCode = KeyCode::Tab;

/// Alternative quit / back
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Diff View keys
// =============================================================================

/// Jump to next change group
pub const NEXT_CHANGE: KeyCode = KeyCode::Char(']');

/// Jump to previous change group
pub const PREV_CHANGE: KeyCode = KeyCode::Char('[');

/// Toggle comment stripping of the optimized listing
pub const TOGGLE_STRIP: KeyCode = KeyCode::Char('s');

/// Cycle the line aligner
pub const CYCLE_ALIGNER: KeyCode = KeyCode::Char('a');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch diff / compare",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
];

/// Diff view key bindings for help display
pub const DIFF_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "Ctrl+d/u",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "]/[",
        description: "Next/prev change",
    },
    KeyBindEntry {
        key: "s",
        description: "Toggle comment stripping",
    },
    KeyBindEntry {
        key: "a",
        description: "Cycle aligner (greedy / myers)",
    },
];

/// Compare view key bindings for help display
pub const COMPARE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Switch",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};

/// Diff view status bar hints
pub const DIFF_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Scroll",
        color: Color::Cyan,
    },
    KeyHint {
        key: "]/[",
        label: "Change",
        color: Color::Magenta,
    },
    KeyHint {
        key: "s",
        label: "Strip",
        color: Color::Yellow,
    },
    KeyHint {
        key: "a",
        label: "Aligner",
        color: Color::Yellow,
    },
    HINT_SWITCH,
    HINT_HELP,
    HINT_QUIT,
];

/// Compare view status bar hints
pub const COMPARE_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Scroll",
        color: Color::Cyan,
    },
    HINT_SWITCH,
    HINT_HELP,
    HINT_QUIT,
];

/// Help view status bar hints
pub const HELP_VIEW_HINTS: &[KeyHint] = &[HINT_BACK];

/// Hints for the current view
pub fn current_hints(view: View) -> &'static [KeyHint] {
    match view {
        View::Diff => DIFF_VIEW_HINTS,
        View::Compare => COMPARE_VIEW_HINTS,
        View::Help => HELP_VIEW_HINTS,
    }
}
