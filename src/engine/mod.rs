//! Diff and explanation engine
//!
//! Pure, synchronous functions over code listings:
//! - [`strip`]: remove comments and blank lines per language
//! - [`align`]: label every line as added, removed or unchanged
//! - [`explain`]: heuristic "brute force vs optimized" narrative
//! - [`summarize`]: trimmed-line added/removed/modified classification
//!
//! [`Session`] ties them together for the viewer and the batch printer.

mod align;
mod explain;
mod session;
mod strip;
mod summary;

pub use align::{AlignStrategy, Aligner, GreedyAligner, MyersAligner, align};
pub use explain::{Signal, detect_signals, explain};
pub use session::{Report, Session};
pub use strip::strip;
pub use summary::summarize;

#[cfg(test)]
mod tests;

/// Split a listing into lines on `\n`, literally.
///
/// A trailing newline yields a trailing empty line; the empty string is the
/// empty listing.
pub fn split_listing(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}
