//! Rendering for CompareView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::{Borders, Paragraph, Wrap},
};

use crate::model::Notification;
use crate::ui::{components, theme};

use super::CompareView;

impl CompareView {
    /// Render the compare view (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let [header, columns, summary] = Self::layout(area);

        self.render_header(frame, header, notification);
        self.render_columns(frame, columns);
        self.render_summary(frame, summary);
    }

    /// Header, bullet columns and summary pane
    fn layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Percentage(50),
            Constraint::Min(3),
        ])
        .areas(area)
    }

    /// Rows of summary text visible inside the pane's border when the view
    /// is drawn into `area`
    pub fn summary_inner_height(area: Rect) -> usize {
        let [_, _, summary] = Self::layout(area);
        summary.height.saturating_sub(2) as usize
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" optdiff - Compare View ").bold().centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let signals = if self.signals.is_empty() {
            Span::styled(
                "(none, generic explanation)",
                Style::default().fg(Color::DarkGray).italic(),
            )
        } else {
            Span::styled(
                self.signals
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", "),
                Style::default().fg(theme::compare_view::SIGNAL),
            )
        };

        let block = if let Some(notif) = notif_line {
            components::header_block(title).title(notif.right_aligned())
        } else {
            components::header_block(title)
        };

        let header =
            Paragraph::new(Line::from(vec![Span::raw("Signals: "), signals])).block(block);
        frame.render_widget(header, area);
    }

    /// Brute force and optimized bullets side by side
    fn render_columns(&self, frame: &mut Frame, area: Rect) {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        let brute = bullet_column(
            self.comparison.brute_force_name,
            &self.comparison.brute_force_points,
            theme::compare_view::BRUTE_FORCE,
        );
        let optimized = bullet_column(
            self.comparison.optimized_name,
            &self.comparison.optimized_points,
            theme::compare_view::OPTIMIZED,
        );

        frame.render_widget(brute, columns[0]);
        frame.render_widget(optimized, columns[1]);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(self.summary_line_count());
        push_summary_section(
            &mut lines,
            "Added",
            &self.summary.added,
            theme::compare_view::ADDED,
        );
        lines.push(Line::from(""));
        push_summary_section(
            &mut lines,
            "Removed",
            &self.summary.removed,
            theme::compare_view::REMOVED,
        );
        lines.push(Line::from(""));
        push_summary_section(
            &mut lines,
            "Modified",
            &self.summary.modified,
            theme::compare_view::MODIFIED,
        );

        let title = Line::from(" Difference Summary ").bold();
        let summary = Paragraph::new(lines)
            .block(components::bordered_block(title))
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(summary, area);
    }
}

fn bullet_column<'a>(title: &'a str, points: &'a [String], color: Color) -> Paragraph<'a> {
    let lines: Vec<Line> = points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(point.as_str()),
            ])
        })
        .collect();

    let title = Line::from(Span::styled(
        format!(" {title} "),
        Style::default().fg(color).bold(),
    ));

    Paragraph::new(lines)
        .block(components::titled_block(title, Borders::ALL))
        .wrap(Wrap { trim: true })
}

fn push_summary_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    entries: &[String],
    color: Color,
) {
    lines.push(Line::from(Span::styled(
        format!("{title} ({})", entries.len()),
        Style::default().fg(color).bold(),
    )));
    for entry in entries {
        lines.push(Line::from(format!("  {entry}")));
    }
}
