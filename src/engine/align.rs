//! Line alignment
//!
//! Two aligners share one contract: every original line comes out exactly
//! once as Unchanged or Removed, every optimized line exactly once as
//! Unchanged or Added, and each side keeps its relative order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

use super::split_listing;
use crate::model::DiffLine;

/// Computes an aligned line list from two listings.
pub trait Aligner {
    /// Align `original` against `optimized`, both already split into lines.
    fn align(&self, original: &[&str], optimized: &[&str]) -> Vec<DiffLine>;
}

/// Local, non-backtracking two-cursor alignment.
///
/// On a mismatch it collects original lines that never recur in the rest of
/// the optimized listing (removed), then optimized lines that never recur in
/// the rest of the original (added). Repeated lines far apart can produce
/// odd groupings; that is the accepted trade for readable runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAligner;

impl Aligner for GreedyAligner {
    fn align(&self, original: &[&str], optimized: &[&str]) -> Vec<DiffLine> {
        let mut result = Vec::with_capacity(original.len().max(optimized.len()));
        let mut i = 0;
        let mut j = 0;

        while i < original.len() || j < optimized.len() {
            match (original.get(i), optimized.get(j)) {
                (Some(orig), Some(opt)) if orig == opt => {
                    result.push(DiffLine::unchanged(*orig));
                    i += 1;
                    j += 1;
                }
                (Some(_), Some(anchor)) => {
                    let removed_start = i;
                    while i < original.len()
                        && original[i] != *anchor
                        && !optimized[j..].contains(&original[i])
                    {
                        i += 1;
                    }

                    let added_start = j;
                    while j < optimized.len()
                        && original.get(i) != Some(&optimized[j])
                        && !original[i..].contains(&optimized[j])
                    {
                        j += 1;
                    }

                    if removed_start == i && added_start == j {
                        // Crossing: both heads recur further down the other
                        // side. Give up the original head so a cursor moves.
                        result.push(DiffLine::removed(original[i]));
                        i += 1;
                        continue;
                    }

                    result.extend(original[removed_start..i].iter().map(|l| DiffLine::removed(*l)));
                    result.extend(optimized[added_start..j].iter().map(|l| DiffLine::added(*l)));
                }
                (Some(orig), None) => {
                    result.push(DiffLine::removed(*orig));
                    i += 1;
                }
                (None, Some(opt)) => {
                    result.push(DiffLine::added(*opt));
                    j += 1;
                }
                (None, None) => break,
            }
        }

        result
    }
}

/// Minimal-edit alignment (Myers) backed by `similar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersAligner;

impl Aligner for MyersAligner {
    fn align(&self, original: &[&str], optimized: &[&str]) -> Vec<DiffLine> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_slices(original, optimized);

        diff.iter_all_changes()
            .map(|change| match change.tag() {
                ChangeTag::Equal => DiffLine::unchanged(change.value()),
                ChangeTag::Delete => DiffLine::removed(change.value()),
                ChangeTag::Insert => DiffLine::added(change.value()),
            })
            .collect()
    }
}

/// Which aligner to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlignStrategy {
    /// Two-cursor run grouping (default)
    #[default]
    Greedy,
    /// Shortest edit script
    Myers,
}

impl AlignStrategy {
    /// Cycle to next strategy
    pub fn next(self) -> Self {
        match self {
            Self::Greedy => Self::Myers,
            Self::Myers => Self::Greedy,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Myers => "myers",
        }
    }

    /// Align two raw listings with this strategy
    pub fn align(self, original: &str, optimized: &str) -> Vec<DiffLine> {
        let original = split_listing(original);
        let optimized = split_listing(optimized);
        match self {
            Self::Greedy => GreedyAligner.align(&original, &optimized),
            Self::Myers => MyersAligner.align(&original, &optimized),
        }
    }
}

/// Align two raw listings with the greedy aligner.
pub fn align(original: &str, optimized: &str) -> Vec<DiffLine> {
    AlignStrategy::Greedy.align(original, optimized)
}
