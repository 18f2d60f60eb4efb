//! Batch output for `--print`

use std::fmt::Write as _;
use std::io::Write;

use crate::cli::PrintMode;
use crate::engine::{Report, Session, strip};
use crate::error::OptdiffError;
use crate::model::{DiffComparison, DiffLine, DifferenceSummary, line_numbers};

/// Render the session in the given mode and write it out
pub fn write_session(
    mode: PrintMode,
    session: &Session,
    out: &mut impl Write,
) -> Result<(), OptdiffError> {
    let text = match mode {
        PrintMode::Strip => {
            let mut text = strip(&session.optimized, &session.language);
            text.push('\n');
            text
        }
        PrintMode::Diff => render_diff(&session.report().lines),
        PrintMode::Explain => {
            let report = session.report();
            render_explain(&report.comparison)
        }
        PrintMode::Summary => render_summary(&session.report().summary),
        PrintMode::Json => render_json(&session.report())?,
    };

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// `<old#> <new#> <marker> <content>` per line
pub fn render_diff(lines: &[DiffLine]) -> String {
    let mut text = String::new();
    for (line, (old, new)) in lines.iter().zip(line_numbers(lines)) {
        let _ = writeln!(
            text,
            "{:>4} {:>4} {} {}",
            number(old),
            number(new),
            line.kind.marker(),
            line.content
        );
    }
    text
}

fn number(n: Option<usize>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

/// The two labelled bullet lists
pub fn render_explain(comparison: &DiffComparison) -> String {
    let mut text = String::new();
    push_section(
        &mut text,
        comparison.brute_force_name,
        &comparison.brute_force_points,
    );
    text.push('\n');
    push_section(
        &mut text,
        comparison.optimized_name,
        &comparison.optimized_points,
    );
    text
}

/// Added, removed and modified sections
pub fn render_summary(summary: &DifferenceSummary) -> String {
    let mut text = String::new();
    push_section(&mut text, "Added", &summary.added);
    text.push('\n');
    push_section(&mut text, "Removed", &summary.removed);
    text.push('\n');
    push_section(&mut text, "Modified", &summary.modified);
    text
}

fn push_section(text: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(text, "{title} ({})", items.len());
    for item in items {
        let _ = writeln!(text, "- {item}");
    }
}

/// Pretty-printed JSON report
pub fn render_json(report: &Report) -> Result<String, OptdiffError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
