//! Rendering tests for the Compare View

use optdiff::engine::Session;
use optdiff::model::Language;
use optdiff::ui::views::CompareView;

use crate::common::{contains, report, terminal};

#[test]
fn test_compare_view_columns_and_signals() {
    let view = CompareView::new(&report());
    let mut terminal = terminal(100, 30);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "optdiff - Compare View"));
    assert!(contains(buffer, "Signals: fewer loops, smaller listing"));
    assert!(contains(buffer, " Brute Force (Original) "));
    assert!(contains(buffer, " Optimized Solution "));
    assert!(contains(buffer, "• Uses nested loops"));
    assert!(contains(buffer, "• Optimized iteration"));
}

#[test]
fn test_compare_view_summary() {
    let view = CompareView::new(&report());
    let mut terminal = terminal(100, 30);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "Difference Summary"));
    assert!(contains(buffer, "Added (1)"));
    assert!(contains(buffer, "  return xs.indexOf(t);"));
    assert!(contains(buffer, "Removed (4)"));
}

#[test]
fn test_compare_view_fallback() {
    let report = Session::new("a", "b", Language::Go).report();
    let view = CompareView::new(&report);
    let mut terminal = terminal(100, 30);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "(none, generic explanation)"));
    assert!(contains(buffer, "• Original approach"));
    assert!(contains(buffer, "• Optimized approach"));
}
