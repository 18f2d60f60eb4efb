//! Compare View
//!
//! Brute force vs optimized narrative, the signals behind it, and the
//! trimmed-line difference summary.

mod input;
mod render;

use crate::engine::{Report, Signal};
use crate::model::{DiffComparison, DifferenceSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAction {
    None,
    Back,
}

/// Compare view state
#[derive(Debug)]
pub struct CompareView {
    pub comparison: DiffComparison,
    pub signals: Vec<Signal>,
    pub summary: DifferenceSummary,
    /// Scroll offset of the summary pane
    pub scroll_offset: usize,
    visible_height: usize,
}

impl CompareView {
    const DEFAULT_VISIBLE_HEIGHT: usize = 10;

    pub fn new(report: &Report) -> Self {
        let mut view = Self {
            comparison: report.comparison.clone(),
            signals: Vec::new(),
            summary: DifferenceSummary::default(),
            scroll_offset: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        };
        view.set_report(report);
        view
    }

    pub fn set_report(&mut self, report: &Report) {
        self.comparison = report.comparison.clone();
        self.signals = report.signals.clone();
        self.summary = report.summary.clone();
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Lines in the summary pane: a title per section plus its entries,
    /// with a blank line between sections
    pub fn summary_line_count(&self) -> usize {
        let entries =
            self.summary.added.len() + self.summary.removed.len() + self.summary.modified.len();
        entries + 3 + 2
    }

    fn max_scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        self.summary_line_count().saturating_sub(self.visible_height)
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.max_scroll_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Session;
    use crate::model::Language;

    fn view() -> CompareView {
        let original: Vec<String> = (0..12).map(|i| format!("old_{i}()")).collect();
        let report = Session::new(original.join("\n"), "new()", Language::Python).report();
        CompareView::new(&report)
    }

    #[test]
    fn test_new_copies_report() {
        let view = view();
        assert!(view.signals.contains(&Signal::SizeShrink));
        assert_eq!(view.summary.removed.len(), 12);
        assert_eq!(view.summary.added, vec!["new()"]);
        assert_eq!(view.summary_line_count(), 18);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut view = view();
        view.scroll_up();
        assert_eq!(view.scroll_offset, 0);

        view.jump_to_bottom(10);
        assert_eq!(view.scroll_offset, 8);
        view.scroll_down();
        assert_eq!(view.scroll_offset, 8);

        view.jump_to_top();
        assert_eq!(view.scroll_offset, 0);
    }
}
