//! Diff View
//!
//! Displays the aligned line diff of the original and optimized listings.

mod input;
mod render;

use crate::engine::{AlignStrategy, Report};
use crate::model::{DiffLine, DiffLineKind, DiffStats, Language, line_numbers};

/// Action returned by DiffView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    /// No action needed
    None,
    /// Leave the view
    Back,
    /// Flip comment stripping and rebuild the report
    ToggleStrip,
    /// Switch to the next aligner and rebuild the report
    CycleStrategy,
}

/// A run of changed lines the view can jump to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMark {
    /// Index of the first line of the run
    pub position: usize,
    pub kind: DiffLineKind,
    pub len: usize,
}

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Aligned lines
    pub lines: Vec<DiffLine>,
    /// 1-based (old, new) line numbers, parallel to `lines`
    pub numbers: Vec<(Option<usize>, Option<usize>)>,
    pub stats: DiffStats,
    pub language: Language,
    pub strategy: AlignStrategy,
    pub strip_comments: bool,
    /// Change runs, in line order
    pub changes: Vec<ChangeMark>,
    /// Current change index (for context bar)
    pub current_change_index: usize,
    /// Scroll offset (line index)
    pub scroll_offset: usize,
    /// Last known visible height (updated during render and key handling)
    visible_height: usize,
}

impl DiffView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    /// Create a new empty DiffView
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            numbers: Vec::new(),
            stats: DiffStats::default(),
            language: Language::default(),
            strategy: AlignStrategy::default(),
            strip_comments: true,
            changes: Vec::new(),
            current_change_index: 0,
            scroll_offset: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Create a new DiffView showing a report
    pub fn new(report: &Report) -> Self {
        let mut view = Self::empty();
        view.set_report(report);
        view
    }

    /// Replace the displayed report, keeping the scroll position when possible
    pub fn set_report(&mut self, report: &Report) {
        self.changes = report
            .change_groups()
            .map(|group| ChangeMark {
                position: group.start,
                kind: group.kind,
                len: group.len(),
            })
            .collect();
        self.numbers = line_numbers(&report.lines);
        self.lines = report.lines.clone();
        self.stats = report.stats;
        self.language = report.language.clone();
        self.strategy = report.strategy;
        self.strip_comments = report.strip_comments;

        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.update_current_change_index();
    }

    /// Total number of diff lines
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Number of change runs
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Current change run, if any
    pub fn current_change(&self) -> Option<&ChangeMark> {
        self.changes.get(self.current_change_index)
    }

    /// Get current context string for the context bar
    pub fn current_context(&self) -> String {
        match self.current_change() {
            Some(change) => {
                let verb = match change.kind {
                    DiffLineKind::Added => "added",
                    _ => "removed",
                };
                format!(
                    "{} line(s) {} at {} [{}/{}]",
                    change.len,
                    verb,
                    change.position + 1,
                    self.current_change_index + 1,
                    self.change_count()
                )
            }
            None => "(no changes)".to_string(),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Scroll up by one line
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.update_current_change_index();
    }

    /// Scroll down by one line
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
        self.update_current_change_index();
    }

    /// Calculate maximum scroll offset based on visible height
    fn max_scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        self.total_lines().saturating_sub(self.visible_height)
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height / 2);
        self.update_current_change_index();
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        let max_offset = self.max_scroll_offset();
        self.scroll_offset = (self.scroll_offset + visible_height / 2).min(max_offset);
        self.update_current_change_index();
    }

    /// Jump to the top
    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
        self.current_change_index = 0;
    }

    /// Jump to the bottom
    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.max_scroll_offset();
        self.update_current_change_index();
    }

    /// Jump to the next change run, wrapping to the first
    ///
    /// A current run that is still below the top line is reached first.
    pub fn next_change(&mut self) {
        if self.changes.is_empty() {
            return;
        }

        let next = match self.current_change() {
            Some(change) if change.position > self.scroll_offset && !self.at_bottom() => {
                self.current_change_index
            }
            _ => (self.current_change_index + 1) % self.changes.len(),
        };
        self.select_change(next);
    }

    /// Jump to the previous change run, wrapping to the last
    pub fn prev_change(&mut self) {
        if self.changes.is_empty() {
            return;
        }

        let prev = if self.current_change_index == 0 {
            self.changes.len() - 1
        } else {
            self.current_change_index - 1
        };
        self.select_change(prev);
    }

    fn select_change(&mut self, index: usize) {
        self.current_change_index = index;
        if let Some(change) = self.changes.get(index) {
            self.scroll_offset = change.position.min(self.max_scroll_offset());
        }
    }

    fn at_bottom(&self) -> bool {
        self.scroll_offset >= self.max_scroll_offset()
    }

    /// Update current_change_index to the last run starting at or above the
    /// top visible line
    fn update_current_change_index(&mut self) {
        self.current_change_index = self
            .changes
            .iter()
            .rposition(|c| c.position <= self.scroll_offset)
            .unwrap_or(0);
    }
}
