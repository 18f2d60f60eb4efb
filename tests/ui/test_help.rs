//! Rendering tests for the help panel

use optdiff::ui::widgets::render_help_panel;

use crate::common::{contains, terminal};

#[test]
fn test_help_panel_sections() {
    let mut terminal = terminal(60, 30);
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 0))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "optdiff - Help"));
    assert!(contains(buffer, "Global:"));
    assert!(contains(buffer, "Diff View:"));
    assert!(contains(buffer, "Compare View:"));
    assert!(contains(buffer, "Toggle comment stripping"));
}

#[test]
fn test_help_panel_scroll() {
    let mut terminal = terminal(60, 10);
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 2))
        .unwrap();

    assert!(!contains(terminal.backend().buffer(), "Key bindings:"));
    assert!(contains(terminal.backend().buffer(), "Global:"));
}
