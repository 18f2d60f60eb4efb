//! Application state and view management

use std::cell::Cell;

use tracing::info;

use crate::engine::{Report, Session};
use crate::model::Notification;
use crate::ui::views::{CompareView, DiffView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Diff,
    Compare,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Listings and settings the report is built from
    pub session: Session,
    /// Report for the current settings
    pub report: Report,
    /// Diff view state
    pub diff_view: DiffView,
    /// Compare view state
    pub compare_view: CompareView,
    /// Notification to display (setting changes)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Last known frame height (updated during render, uses Cell for interior mutability)
    pub(crate) last_frame_height: Cell<u16>,
}

impl App {
    /// Construct a new instance of [`App`] for a session.
    pub fn new(session: Session) -> Self {
        let report = session.report();
        Self {
            running: true,
            current_view: View::Diff,
            previous_view: None,
            diff_view: DiffView::new(&report),
            compare_view: CompareView::new(&report),
            report,
            session,
            notification: None,
            help_scroll: 0,
            last_frame_height: Cell::new(24), // Default terminal height
        }
    }

    /// Rebuild the report from the session and refresh both views
    pub(crate) fn rebuild(&mut self) {
        self.report = self.session.report();
        self.diff_view.set_report(&self.report);
        self.compare_view.set_report(&self.report);
    }

    /// Flip comment stripping of the optimized listing
    pub(crate) fn toggle_strip(&mut self) {
        self.session.strip_comments = !self.session.strip_comments;
        self.rebuild();

        let state = if self.session.strip_comments { "on" } else { "off" };
        info!(strip_comments = self.session.strip_comments, "toggled comment stripping");
        self.notification = Some(if self.session.strip_comments && !self.session.language.is_known() {
            Notification::warning(format!(
                "Comment stripping on, but no comment syntax for {}",
                self.session.language
            ))
        } else {
            Notification::info(format!("Comment stripping {state}"))
        });
    }

    /// Switch to the next aligner
    pub(crate) fn cycle_strategy(&mut self) {
        self.session.strategy = self.session.strategy.next();
        self.rebuild();

        info!(strategy = self.session.strategy.label(), "switched aligner");
        self.notification = Some(Notification::info(format!(
            "Aligner: {}",
            self.session.strategy.label()
        )));
    }

    /// Switch between diff and compare (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Diff => View::Compare,
            View::Compare => View::Diff,
            View::Help => self.previous_view.unwrap_or_default(),
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            if view == View::Help {
                self.help_scroll = 0;
            }
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        let target = match self.previous_view.take() {
            Some(prev) if prev != self.current_view => prev,
            _ => View::Diff,
        };
        self.current_view = target;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
