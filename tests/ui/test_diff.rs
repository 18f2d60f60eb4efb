//! Rendering tests for the Diff View

use optdiff::model::Notification;
use optdiff::ui::views::DiffView;

use crate::common::{contains, report, rows, terminal};

#[test]
fn test_diff_view_header_and_stats() {
    let view = DiffView::new(&report());
    let mut terminal = terminal(80, 20);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "optdiff - Diff View"));
    assert!(contains(buffer, "[javascript]"));
    assert!(contains(buffer, "+1 lines  -4 lines  2 unchanged"));
    assert!(contains(buffer, "Aligner: greedy  Strip comments: on"));
}

#[test]
fn test_diff_view_lines() {
    let view = DiffView::new(&report());
    let mut terminal = terminal(80, 20);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "4 line(s) removed at 2 [1/2]"));
    assert!(contains(buffer, "   1    1   function find(xs, t) {"));
    assert!(contains(buffer, "   2      -   for (let i"));
    assert!(contains(buffer, "        2 +   return xs.indexOf(t);"));
    assert!(!contains(buffer, "indexOf scans natively"));
}

#[test]
fn test_diff_view_scrolled() {
    let mut view = DiffView::new(&report());
    view.scroll_offset = 5;
    let mut terminal = terminal(80, 12);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    // header (3) + context bar (1), then the first visible line
    let rows = rows(buffer);
    assert!(rows[4].contains("return xs.indexOf(t);"));
    assert!(!contains(buffer, "function find"));
}

#[test]
fn test_diff_view_notification_in_title() {
    let view = DiffView::new(&report());
    let notification = Notification::info("Aligner: myers");
    let mut terminal = terminal(100, 12);
    terminal
        .draw(|frame| view.render(frame, frame.area(), Some(&notification)))
        .unwrap();

    assert!(contains(terminal.backend().buffer(), "Info: Aligner: myers"));
}

#[test]
fn test_diff_view_empty_listings() {
    let view = DiffView::new(&optdiff::engine::Session::new("", "", Default::default()).report());
    let mut terminal = terminal(60, 10);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert!(contains(buffer, "Both listings are empty."));
    assert!(contains(buffer, "(no changes)"));
}
