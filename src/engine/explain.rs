//! Explanation heuristic
//!
//! Surface-text pattern matching that turns a pair of listings into a
//! "brute force vs optimized" narrative. This is a storytelling aid for the
//! viewer, not program analysis.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::split_listing;
use crate::model::DiffComparison;

/// `for (` / `while (` with optional whitespace before the paren
static LOOP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for\s*\(|while\s*\(").expect("Invalid loop regex"));

/// Optimized line count must drop below this share of the original
const SHRINK_RATIO: f64 = 0.8;

const FALLBACK_BRUTE_FORCE: [&str; 5] = [
    "Original approach: straightforward implementation",
    "Processes data step by step sequentially",
    "Works correctly but takes longer for complex tasks",
    "Easy to understand for beginners",
    "Becomes inefficient with large datasets",
];

const FALLBACK_OPTIMIZED: [&str; 5] = [
    "Optimized approach: refined algorithm",
    "Uses smart techniques to reduce operations",
    "Significantly faster and more memory-efficient",
    "Professional implementation patterns",
    "Scales well with any dataset size",
];

/// A surface pattern that contributes bullets when it fires.
///
/// Signals are independent and additive; [`Signal::ALL`] is also the order
/// their bullets are appended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Optimized listing imports something, the original does not
    NewImports,
    /// Fewer `for(`/`while(` loops in the optimized listing
    LoopReduction,
    /// Original mentions `Array`, optimized mentions `binary`
    BinarySearch,
    /// Optimized listing uses `>>`, `<<` or `&`
    BitwiseOperators,
    /// Optimized listing adds an `== null` check
    NullCheck,
    /// Optimized listing is under 80% of the original's line count
    SizeShrink,
}

impl Signal {
    /// Every signal, in evaluation order
    pub const ALL: [Signal; 6] = [
        Signal::NewImports,
        Signal::LoopReduction,
        Signal::BinarySearch,
        Signal::BitwiseOperators,
        Signal::NullCheck,
        Signal::SizeShrink,
    ];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::NewImports => "new imports",
            Self::LoopReduction => "fewer loops",
            Self::BinarySearch => "binary search",
            Self::BitwiseOperators => "bitwise operators",
            Self::NullCheck => "null checks",
            Self::SizeShrink => "smaller listing",
        }
    }

    /// Whether the signal fires for this pair of raw listings
    pub fn fires(self, original: &str, optimized: &str) -> bool {
        match self {
            Self::NewImports => optimized.contains("import") && !original.contains("import"),
            Self::LoopReduction => loop_count(original) > loop_count(optimized),
            Self::BinarySearch => original.contains("Array") && optimized.contains("binary"),
            Self::BitwiseOperators => {
                optimized.contains(">>") || optimized.contains("<<") || optimized.contains('&')
            }
            Self::NullCheck => optimized.contains("== null") && !original.contains("== null"),
            Self::SizeShrink => {
                let original_lines = split_listing(original).len() as f64;
                let optimized_lines = split_listing(optimized).len() as f64;
                optimized_lines < original_lines * SHRINK_RATIO
            }
        }
    }

    /// (brute force, optimized) bullets contributed when the signal fires
    fn bullets(self, original: &str, optimized: &str) -> (Vec<String>, Vec<String>) {
        let owned = |points: &[&str]| points.iter().map(|p| p.to_string()).collect::<Vec<_>>();

        match self {
            Self::NewImports => (
                owned(&["Manual implementation without external utilities"]),
                owned(&["Uses optimized utility classes and imports"]),
            ),
            Self::LoopReduction => {
                let original_loops = loop_count(original);
                let optimized_loops = loop_count(optimized);
                (
                    vec![
                        format!(
                            "Uses nested loops ({original_loops} loop(s)) to iterate through data"
                        ),
                        "Checks every element, making it slow for large datasets".to_string(),
                        "Time complexity: O(n) - gets slower as data grows".to_string(),
                    ],
                    vec![
                        format!(
                            "Optimized iteration ({optimized_loops} loop(s)) with smart algorithm"
                        ),
                        "Uses divide-and-conquer or efficient search algorithms".to_string(),
                        "Time complexity: O(log n) - stays fast even for huge datasets".to_string(),
                    ],
                )
            }
            Self::BinarySearch => (
                owned(&[
                    "Linear search: starts from beginning, checks each item one by one",
                    "Example: Looking through entire phonebook for a name",
                    "Takes more steps for bigger numbers",
                ]),
                owned(&[
                    "Binary search: eliminates half the data with each step",
                    "Example: Opening phonebook in middle, eliminates half with each try",
                    "Instant results, even for billions of items",
                ]),
            ),
            Self::BitwiseOperators => (
                owned(&[
                    "Uses basic arithmetic operations",
                    "More readable but slower",
                ]),
                owned(&[
                    "Uses bit manipulation and bitwise operators",
                    "Works instantly at CPU level - maximum speed",
                ]),
            ),
            Self::NullCheck => (
                owned(&["No safety checks - can crash with bad input"]),
                owned(&["Includes null/boundary checks - handles edge cases safely"]),
            ),
            Self::SizeShrink => (
                owned(&[
                    "Repetitive code with duplicate logic",
                    "Harder to understand and maintain",
                    "More prone to bugs",
                ]),
                owned(&[
                    "Clean, concise implementation",
                    "Easy to understand and modify",
                    "Professional-grade code quality",
                ]),
            ),
        }
    }
}

/// Number of `for(` / `while(` occurrences
fn loop_count(code: &str) -> usize {
    LOOP_REGEX.find_iter(code).count()
}

/// Signals that fire for this pair, in evaluation order
pub fn detect_signals(original: &str, optimized: &str) -> Vec<Signal> {
    Signal::ALL
        .into_iter()
        .filter(|signal| signal.fires(original, optimized))
        .collect()
}

/// Build the brute-force vs optimized narrative for two raw listings.
///
/// Falls back to a generic five-bullet contrast per side when no signal
/// fires, so neither list is ever empty.
pub fn explain(original: &str, optimized: &str) -> DiffComparison {
    let signals = detect_signals(original, optimized);
    debug!(
        fired = signals.len(),
        signals = ?signals,
        "evaluated explanation signals"
    );

    let mut brute_force_points = Vec::new();
    let mut optimized_points = Vec::new();

    for signal in signals {
        let (brute, optimized_bullets) = signal.bullets(original, optimized);
        brute_force_points.extend(brute);
        optimized_points.extend(optimized_bullets);
    }

    if brute_force_points.is_empty() {
        brute_force_points = FALLBACK_BRUTE_FORCE.map(String::from).to_vec();
        optimized_points = FALLBACK_OPTIMIZED.map(String::from).to_vec();
    }

    DiffComparison::new(brute_force_points, optimized_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_reduction_cites_counts() {
        let comparison = explain("for(i=0;...) for(j=0;...)", "while(...)");

        assert_eq!(comparison.brute_force_points.len(), 3);
        assert_eq!(
            comparison.brute_force_points[0],
            "Uses nested loops (2 loop(s)) to iterate through data"
        );
        assert_eq!(
            comparison.brute_force_points[2],
            "Time complexity: O(n) - gets slower as data grows"
        );
        assert_eq!(
            comparison.optimized_points[0],
            "Optimized iteration (1 loop(s)) with smart algorithm"
        );
        assert_eq!(
            comparison.optimized_points[2],
            "Time complexity: O(log n) - stays fast even for huge datasets"
        );
    }

    #[test]
    fn test_loop_regex_allows_whitespace() {
        assert_eq!(loop_count("for (;;) {} while\t(x) {} for(;;)"), 3);
        assert_eq!(loop_count("forever(); whiley"), 0);
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let comparison = explain("let a = 1;", "let a = 2;");
        assert_eq!(comparison.brute_force_points.len(), 5);
        assert_eq!(comparison.optimized_points.len(), 5);
        assert_eq!(
            comparison.brute_force_points[0],
            "Original approach: straightforward implementation"
        );
        assert_eq!(
            comparison.optimized_points[4],
            "Scales well with any dataset size"
        );
    }

    #[test]
    fn test_new_imports() {
        assert!(Signal::NewImports.fires("x", "import os\nx"));
        assert!(!Signal::NewImports.fires("import os", "import sys"));
        let comparison = explain("x", "import os\nx");
        assert_eq!(
            comparison.brute_force_points,
            vec!["Manual implementation without external utilities"]
        );
        assert_eq!(
            comparison.optimized_points,
            vec!["Uses optimized utility classes and imports"]
        );
    }

    #[test]
    fn test_binary_search_marker() {
        assert!(Signal::BinarySearch.fires("new Array(10)", "binarySearch(xs)"));
        assert!(!Signal::BinarySearch.fires("new array(10)", "binarySearch(xs)"));
    }

    #[test]
    fn test_bitwise_operators() {
        assert!(Signal::BitwiseOperators.fires("", "x >> 1"));
        assert!(Signal::BitwiseOperators.fires("", "x << 1"));
        assert!(Signal::BitwiseOperators.fires("", "a && b"));
        assert!(!Signal::BitwiseOperators.fires("x >> 1", "x / 2"));
    }

    #[test]
    fn test_null_check_only_when_new() {
        assert!(Signal::NullCheck.fires("f(x)", "if (x == null) return"));
        assert!(!Signal::NullCheck.fires("if (x == null) f()", "if (x == null) g()"));
    }

    #[test]
    fn test_size_shrink_threshold() {
        // 10 -> 7 lines: 7 < 8
        let original = vec!["x"; 10].join("\n");
        let shorter = vec!["x"; 7].join("\n");
        assert!(Signal::SizeShrink.fires(&original, &shorter));

        // 10 -> 8 lines: 8 is not < 8
        let same_ratio = vec!["x"; 8].join("\n");
        assert!(!Signal::SizeShrink.fires(&original, &same_ratio));
    }

    #[test]
    fn test_signals_are_additive_in_order() {
        let original = "import a\nconst xs = new Array(5);\nfor (i) {}\nfor (j) {}\nx\ny";
        let optimized = "import a\nbinary(xs) >> 1";

        assert_eq!(
            detect_signals(original, optimized),
            vec![
                Signal::LoopReduction,
                Signal::BinarySearch,
                Signal::BitwiseOperators,
                Signal::SizeShrink,
            ]
        );

        let comparison = explain(original, optimized);
        assert_eq!(comparison.brute_force_points.len(), 3 + 3 + 2 + 3);
        assert_eq!(comparison.optimized_points.len(), 3 + 3 + 2 + 3);
        assert_eq!(
            comparison.brute_force_points[3],
            "Linear search: starts from beginning, checks each item one by one"
        );
        assert_eq!(
            comparison.optimized_points[6],
            "Uses bit manipulation and bitwise operators"
        );
    }

    #[test]
    fn test_labels_are_constant() {
        let comparison = explain("", "");
        assert_eq!(comparison.brute_force_name, "Brute Force (Original)");
        assert_eq!(comparison.optimized_name, "Optimized Solution");
    }

    #[test]
    fn test_signal_labels_unique() {
        let mut labels: Vec<_> = Signal::ALL.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Signal::ALL.len());
    }
}
