//! Narrative comparison models

use serde::Serialize;

/// Label for the original listing's bullet column
pub const BRUTE_FORCE_NAME: &str = "Brute Force (Original)";

/// Label for the optimized listing's bullet column
pub const OPTIMIZED_NAME: &str = "Optimized Solution";

/// Side-by-side narrative produced by the explanation heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffComparison {
    pub brute_force_name: &'static str,
    pub brute_force_points: Vec<String>,
    pub optimized_name: &'static str,
    pub optimized_points: Vec<String>,
}

impl DiffComparison {
    /// Build a comparison with the fixed column labels
    pub fn new(brute_force_points: Vec<String>, optimized_points: Vec<String>) -> Self {
        Self {
            brute_force_name: BRUTE_FORCE_NAME,
            brute_force_points,
            optimized_name: OPTIMIZED_NAME,
            optimized_points,
        }
    }
}

/// Trimmed-line classification of two listings
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DifferenceSummary {
    /// Optimized lines with no trimmed-equal original line
    pub added: Vec<String>,
    /// Original lines with no counterpart at all
    pub removed: Vec<String>,
    /// `"<original> → <optimized>"` pairs for lines that look rewritten
    pub modified: Vec<String>,
}

impl DifferenceSummary {
    /// True when nothing was classified
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}
