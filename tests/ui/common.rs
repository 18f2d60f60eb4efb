//! Shared helpers for rendering tests

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use optdiff::engine::{Report, Session};
use optdiff::model::Language;

pub const ORIGINAL: &str = "function find(xs, t) {
  for (let i = 0; i < xs.length; i++) {
    if (xs[i] === t) return i;
  }
  return -1;
}";

pub const OPTIMIZED: &str = "function find(xs, t) {
  // indexOf scans natively
  return xs.indexOf(t);
}";

pub fn session() -> Session {
    Session::new(ORIGINAL, OPTIMIZED, Language::JavaScript)
}

pub fn report() -> Report {
    session().report()
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Buffer rows as plain strings
pub fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Whether any row contains `needle`
pub fn contains(buffer: &Buffer, needle: &str) -> bool {
    rows(buffer).iter().any(|row| row.contains(needle))
}
