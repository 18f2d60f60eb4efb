//! Notification title component
//!
//! Notifications are shown right-aligned in a view's header border.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

const SEPARATOR: &str = " | ";
const ELLIPSIS: &str = "… ";

/// Build a notification line for title bar display
///
/// With `max_width`, a message that does not fit is cut and ends in "…".
/// Returns an empty line when not even one character fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    let message = &notification.message;
    let fixed_width = SEPARATOR.len() + label.len() + 1;
    let full_width = fixed_width + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full_width > max => {
            let available = max.saturating_sub(fixed_width + ELLIPSIS.chars().count());
            if available == 0 {
                return Line::default();
            }
            let cut: String = message.chars().take(available).collect();
            format!("{cut}{ELLIPSIS}")
        }
        _ => format!("{message} "),
    };

    if text.trim().is_empty() {
        return Line::default();
    }

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}
