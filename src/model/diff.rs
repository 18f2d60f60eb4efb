//! Diff data model
//!
//! Line-level output of the aligner plus the derived views the renderers
//! need (contiguous runs, line numbers, counts).

use serde::Serialize;

/// A single aligned line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Type of this line
    pub kind: DiffLineKind,
    /// Content of the line (without the newline)
    pub content: String,
}

impl DiffLine {
    /// Create an unchanged line (present in both listings)
    pub fn unchanged(content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Unchanged,
            content: content.into(),
        }
    }

    /// Create a removed line (original only)
    pub fn removed(content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            content: content.into(),
        }
    }

    /// Create an added line (optimized only)
    pub fn added(content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Added,
            content: content.into(),
        }
    }

    /// Whether this line appears in the original listing
    pub fn in_original(&self) -> bool {
        matches!(self.kind, DiffLineKind::Unchanged | DiffLineKind::Removed)
    }

    /// Whether this line appears in the optimized listing
    pub fn in_optimized(&self) -> bool {
        matches!(self.kind, DiffLineKind::Unchanged | DiffLineKind::Added)
    }
}

/// Type of diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    /// Line only in the optimized listing
    Added,
    /// Line only in the original listing
    Removed,
    /// Line present in both
    Unchanged,
}

impl DiffLineKind {
    /// Single-character gutter marker
    pub fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Unchanged => ' ',
        }
    }

    /// Whether this kind represents a change
    pub fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A run of consecutive lines sharing one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffGroup {
    /// Kind shared by every line in the run
    pub kind: DiffLineKind,
    /// Index of the first line of the run in the flat line list
    pub start: usize,
    /// Line contents, in order
    pub lines: Vec<String>,
}

impl DiffGroup {
    /// Number of lines in the run
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the run has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fold consecutive lines of the same kind into runs.
pub fn group_runs(lines: &[DiffLine]) -> Vec<DiffGroup> {
    let mut groups: Vec<DiffGroup> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if group.kind == line.kind => group.lines.push(line.content.clone()),
            _ => groups.push(DiffGroup {
                kind: line.kind,
                start: idx,
                lines: vec![line.content.clone()],
            }),
        }
    }

    groups
}

/// 1-based (old, new) line numbers for every aligned line.
///
/// Removed lines only carry an old number, added lines only a new one.
pub fn line_numbers(lines: &[DiffLine]) -> Vec<(Option<usize>, Option<usize>)> {
    let mut old = 0;
    let mut new = 0;

    lines
        .iter()
        .map(|line| match line.kind {
            DiffLineKind::Unchanged => {
                old += 1;
                new += 1;
                (Some(old), Some(new))
            }
            DiffLineKind::Removed => {
                old += 1;
                (Some(old), None)
            }
            DiffLineKind::Added => {
                new += 1;
                (None, Some(new))
            }
        })
        .collect()
}

/// Line counts per kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Count the kinds in an aligned line list
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind {
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Removed => stats.removed += 1,
                DiffLineKind::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }
}
