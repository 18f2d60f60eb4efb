//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::widgets::{render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.clear_expired_notification();

        let area = frame.area();
        // Key handling derives scroll bounds from this
        self.last_frame_height.set(area.height);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let notification = self.active_notification();
        match self.current_view {
            View::Diff => self.diff_view.render(frame, main_area, notification),
            View::Compare => self.compare_view.render(frame, main_area, notification),
            View::Help => render_help_panel(frame, main_area, self.help_scroll),
        }

        render_status_bar(frame, self.status_prefix(), keys::current_hints(self.current_view));
    }

    /// Settings badge shown before the key hints
    fn status_prefix(&self) -> Vec<Span<'static>> {
        match self.current_view {
            View::Diff | View::Compare => vec![Span::styled(
                format!(" {} ", self.session.strategy.label()),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )],
            View::Help => Vec::new(),
        }
    }

    /// Active notification, if it has not expired
    pub fn active_notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired())
    }
}
