//! Data models for optdiff
//!
//! UI-independent data structures: aligned diff lines, narrative
//! comparisons, language tags and viewer notifications.

mod comparison;
mod diff;
mod language;
mod notification;

pub use comparison::{BRUTE_FORCE_NAME, DiffComparison, DifferenceSummary, OPTIMIZED_NAME};
pub use diff::{DiffGroup, DiffLine, DiffLineKind, DiffStats, group_runs, line_numbers};
pub use language::{CommentStyle, Language};
pub use notification::{Notification, NotificationKind};
