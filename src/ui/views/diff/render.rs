//! Rendering for DiffView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{DiffLine, DiffLineKind, Notification};
use crate::ui::{components, theme};

use super::DiffView;

impl DiffView {
    /// Render the diff view (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        // Layout: header (border + 2 lines) + context bar (1) + diff (rest)
        let header_height = 3_u16.min(area.height.saturating_sub(2)).max(1);
        let chunks = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

        self.render_header(frame, chunks[0], notification);
        self.render_context_bar(frame, chunks[1]);
        self.render_diff_content(frame, chunks[2]);
    }

    /// Render the header (language, settings, stats)
    fn render_header(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(vec![
            Span::raw(" optdiff - Diff View ").bold(),
            Span::raw("["),
            Span::styled(
                self.language.tag().to_string(),
                Style::default().fg(theme::diff_view::LANGUAGE),
            ),
            Span::raw("] "),
        ])
        .centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let strip_label = if self.strip_comments { "on" } else { "off" };
        let header_text = vec![
            Line::from(vec![
                Span::styled(
                    format!("+{} lines", self.stats.added),
                    Style::default().fg(theme::diff_view::ADDED).bold(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("-{} lines", self.stats.removed),
                    Style::default().fg(theme::diff_view::REMOVED).bold(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} unchanged", self.stats.unchanged),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![
                Span::raw("Aligner: "),
                Span::styled(
                    self.strategy.label(),
                    Style::default().fg(theme::diff_view::SETTING),
                ),
                Span::raw("  Strip comments: "),
                Span::styled(strip_label, Style::default().fg(theme::diff_view::SETTING)),
            ]),
        ];

        let block = if let Some(notif) = notif_line {
            components::header_block(title).title(notif.right_aligned())
        } else {
            components::header_block(title)
        };

        frame.render_widget(Paragraph::new(header_text).block(block), area);
    }

    /// Render the context bar (current change + progress)
    fn render_context_bar(&self, frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {}", self.current_context()),
            Style::default().fg(Color::Cyan).bold(),
        )]))
        .block(components::side_borders_block());

        frame.render_widget(bar, area);
    }

    /// Render the diff content (scrollable)
    fn render_diff_content(&self, frame: &mut Frame, area: Rect) {
        // No top/bottom borders, only left/right, so use full height
        let inner_height = area.height as usize;

        if self.lines.is_empty() {
            let empty = components::empty_state("Both listings are empty.", None)
                .block(components::side_borders_block());
            frame.render_widget(empty, area);
            return;
        }

        let lines: Vec<Line> = self
            .lines
            .iter()
            .zip(&self.numbers)
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(line, &numbers)| render_diff_line(line, numbers))
            .collect();

        let diff = Paragraph::new(lines).block(components::side_borders_block());
        frame.render_widget(diff, area);
    }
}

/// Render a single diff line: `old new marker content`
fn render_diff_line(line: &DiffLine, numbers: (Option<usize>, Option<usize>)) -> Line<'static> {
    let color = match line.kind {
        DiffLineKind::Added => theme::diff_view::ADDED,
        DiffLineKind::Removed => theme::diff_view::REMOVED,
        DiffLineKind::Unchanged => theme::diff_view::CONTEXT,
    };

    Line::from(vec![
        Span::styled(
            format_line_numbers(numbers),
            Style::default().fg(theme::diff_view::LINE_NUMBER),
        ),
        Span::styled(
            format!(" {} ", line.kind.marker()),
            Style::default().fg(color),
        ),
        Span::styled(line.content.clone(), Style::default().fg(color)),
    ])
}

/// Format line numbers for display
fn format_line_numbers((old, new): (Option<usize>, Option<usize>)) -> String {
    let old_str = old
        .map(|n| format!("{:4}", n))
        .unwrap_or_else(|| "    ".to_string());
    let new_str = new
        .map(|n| format!("{:4}", n))
        .unwrap_or_else(|| "    ".to_string());
    format!("{} {}", old_str, new_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_numbers() {
        assert_eq!(format_line_numbers((Some(3), Some(12))), "   3   12");
        assert_eq!(format_line_numbers((Some(7), None)), "   7     ");
        assert_eq!(format_line_numbers((None, Some(1))), "        1");
    }

    #[test]
    fn test_render_diff_line_spans() {
        let line = render_diff_line(&DiffLine::added("x = 1"), (None, Some(2)));
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, " + ");
        assert_eq!(line.spans[2].content, "x = 1");
        assert_eq!(line.spans[2].style.fg, Some(theme::diff_view::ADDED));
    }
}
