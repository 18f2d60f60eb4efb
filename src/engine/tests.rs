use super::*;
use crate::model::{DiffLineKind, Language};

#[test]
fn test_split_listing_literal() {
    assert_eq!(split_listing("a\nb"), vec!["a", "b"]);
    assert_eq!(split_listing("a\n"), vec!["a", ""]);
    assert_eq!(split_listing("\n"), vec!["", ""]);
    assert_eq!(split_listing("a\r\nb"), vec!["a\r", "b"]);
}

#[test]
fn test_split_listing_empty() {
    assert!(split_listing("").is_empty());
}

#[test]
fn test_strip_then_align_pipeline() {
    let original = "int sum(int *xs, int n) {\n  int s = 0;\n  for (int i = 0; i < n; i++) s += xs[i];\n  return s;\n}";
    let optimized = "int sum(int *xs, int n) {\n  /* accumulate */\n  int s = 0;\n  // unrolled\n  for (int i = 0; i + 1 < n; i += 2) s += xs[i] + xs[i + 1];\n  return s;\n}";

    let stripped = strip(optimized, &Language::Cpp);
    let lines = align(original, &stripped);

    let changed: Vec<_> = lines
        .iter()
        .filter(|l| l.kind.is_change())
        .map(|l| (l.kind, l.content.as_str()))
        .collect();
    assert_eq!(
        changed,
        vec![
            (
                DiffLineKind::Removed,
                "  for (int i = 0; i < n; i++) s += xs[i];"
            ),
            (
                DiffLineKind::Added,
                "  for (int i = 0; i + 1 < n; i += 2) s += xs[i] + xs[i + 1];"
            ),
        ]
    );
}

#[test]
fn test_explain_and_align_are_independent() {
    let original = "for (a) {}\nfor (b) {}";
    let optimized = "while (c) {}";

    let before = explain(original, optimized);
    let _ = align(original, optimized);
    let after = explain(original, optimized);
    assert_eq!(before, after);
}

#[test]
fn test_both_aligners_cover_every_line() {
    let original = "a\nb\nc\nb\nd";
    let optimized = "b\nx\nc\na\nd";

    for strategy in [AlignStrategy::Greedy, AlignStrategy::Myers] {
        let lines = strategy.align(original, optimized);
        let old: Vec<_> = lines
            .iter()
            .filter(|l| l.in_original())
            .map(|l| l.content.as_str())
            .collect();
        let new: Vec<_> = lines
            .iter()
            .filter(|l| l.in_optimized())
            .map(|l| l.content.as_str())
            .collect();
        assert_eq!(old, split_listing(original), "{}", strategy.label());
        assert_eq!(new, split_listing(optimized), "{}", strategy.label());
    }
}
