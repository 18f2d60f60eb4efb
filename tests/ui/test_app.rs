//! Rendering tests for the whole application frame

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use optdiff::app::{App, View};
use optdiff::engine::Session;
use optdiff::model::Language;

use crate::common::{contains, rows, session, terminal};

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_status_bar_on_last_row() {
    let mut app = App::new(session());
    let mut terminal = terminal(120, 20);
    terminal.draw(|frame| app.render(frame)).unwrap();

    let rows = rows(terminal.backend().buffer());
    let last = rows.last().unwrap();
    assert!(last.starts_with(" greedy "));
    assert!(last.contains("[]/[] Change"));
    assert!(last.contains("[q] Quit"));
}

#[test]
fn test_toggle_strip_shows_notification() {
    let mut app = App::new(session());
    press(&mut app, KeyCode::Char('s'));

    let mut terminal = terminal(100, 20);
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "Strip comments: off"));
    assert!(contains(buffer, "Info: Comment stripping off"));
    assert!(contains(buffer, "// indexOf scans natively"));
}

#[test]
fn test_tab_renders_compare_view() {
    let mut app = App::new(session());
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::Compare);

    let mut terminal = terminal(100, 30);
    terminal.draw(|frame| app.render(frame)).unwrap();
    assert!(contains(terminal.backend().buffer(), "optdiff - Compare View"));
}

#[test]
fn test_help_view_has_back_hint() {
    let mut app = App::new(session());
    press(&mut app, KeyCode::Char('?'));

    let mut terminal = terminal(80, 30);
    terminal.draw(|frame| app.render(frame)).unwrap();
    let rows = rows(terminal.backend().buffer());

    assert!(rows.iter().any(|r| r.contains("optdiff - Help")));
    assert!(rows.last().unwrap().contains("[q] Back"));
}

#[test]
fn test_compare_jump_to_bottom_shows_last_summary_line() {
    let original: Vec<String> = (0..40).map(|i| format!("old_line_{i}()")).collect();
    let session = Session::new(original.join("\n"), "new()", Language::Python);
    let mut app = App::new(session);
    let mut terminal = terminal(100, 30);

    // First draw records the frame height used for page sizes
    terminal.draw(|frame| app.render(frame)).unwrap();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('G'));
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "Modified (0)"));
    assert!(contains(buffer, "old_line_39()"));
    assert!(!contains(buffer, "Added (1)"));
}
