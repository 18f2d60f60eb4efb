//! Comparison session
//!
//! Wires the engine together the way every consumer needs it: strip the
//! optimized listing, then align and explain against the original.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use super::{AlignStrategy, Signal, detect_signals, explain, strip, summarize};
use crate::model::{
    DiffComparison, DiffGroup, DiffLine, DiffStats, DifferenceSummary, Language, group_runs,
};

/// Inputs and settings for one comparison
#[derive(Debug, Clone)]
pub struct Session {
    /// Original listing, as submitted
    pub original: String,
    /// Optimized listing, as produced by the analysis service
    pub optimized: String,
    /// Language tag selecting the comment syntax
    pub language: Language,
    /// Strip comments from the optimized listing before comparing
    pub strip_comments: bool,
    /// Aligner used for the line diff
    pub strategy: AlignStrategy,
}

/// Everything the renderers show for a session
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub language: Language,
    pub strategy: AlignStrategy,
    pub strip_comments: bool,
    pub lines: Vec<DiffLine>,
    pub groups: Vec<DiffGroup>,
    pub stats: DiffStats,
    pub comparison: DiffComparison,
    pub signals: Vec<Signal>,
    pub summary: DifferenceSummary,
}

impl Session {
    /// Create a session with default settings (strip on, greedy aligner)
    pub fn new(original: impl Into<String>, optimized: impl Into<String>, language: Language) -> Self {
        Self {
            original: original.into(),
            optimized: optimized.into(),
            language,
            strip_comments: true,
            strategy: AlignStrategy::default(),
        }
    }

    /// The optimized listing as it enters the aligner and the heuristic
    pub fn prepared_optimized(&self) -> Cow<'_, str> {
        if self.strip_comments {
            Cow::Owned(strip(&self.optimized, &self.language))
        } else {
            Cow::Borrowed(&self.optimized)
        }
    }

    /// Build a fresh report
    pub fn report(&self) -> Report {
        let optimized = self.prepared_optimized();

        let lines = self.strategy.align(&self.original, &optimized);
        let groups = group_runs(&lines);
        let stats = DiffStats::from_lines(&lines);

        debug!(
            language = %self.language,
            strategy = self.strategy.label(),
            strip_comments = self.strip_comments,
            lines = lines.len(),
            groups = groups.len(),
            added = stats.added,
            removed = stats.removed,
            "built report"
        );

        Report {
            language: self.language.clone(),
            strategy: self.strategy,
            strip_comments: self.strip_comments,
            groups,
            stats,
            comparison: explain(&self.original, &optimized),
            signals: detect_signals(&self.original, &optimized),
            summary: summarize(&self.original, &optimized),
            lines,
        }
    }
}

impl Report {
    /// Runs that hold changes (added or removed lines)
    pub fn change_groups(&self) -> impl Iterator<Item = &DiffGroup> {
        self.groups.iter().filter(|g| g.kind.is_change())
    }
}
