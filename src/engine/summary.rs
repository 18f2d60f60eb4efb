//! Trimmed-line difference summary
//!
//! Order-insensitive view of what changed, complementing the aligned diff:
//! lines are compared after trimming, blank lines are ignored.

use crate::model::DifferenceSummary;

/// Prefix length used to pair a vanished line with its likely rewrite
const SIMILAR_PREFIX_CHARS: usize = 10;

/// Classify lines of two listings as added, removed or modified.
pub fn summarize(original: &str, optimized: &str) -> DifferenceSummary {
    let original_lines = non_blank_lines(original);
    let optimized_lines = non_blank_lines(optimized);
    let mut summary = DifferenceSummary::default();

    for orig in &original_lines {
        if optimized_lines.iter().any(|opt| opt.trim() == orig.trim()) {
            continue;
        }

        let prefix: String = orig
            .to_lowercase()
            .chars()
            .take(SIMILAR_PREFIX_CHARS)
            .collect();

        match optimized_lines
            .iter()
            .find(|opt| opt.to_lowercase().contains(&prefix))
        {
            Some(similar) => summary
                .modified
                .push(format!("{} → {}", orig.trim(), similar.trim())),
            None => summary.removed.push(orig.trim().to_string()),
        }
    }

    for opt in &optimized_lines {
        if !original_lines.iter().any(|orig| orig.trim() == opt.trim()) {
            summary.added.push(opt.trim().to_string());
        }
    }

    summary
}

fn non_blank_lines(code: &str) -> Vec<&str> {
    code.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}
