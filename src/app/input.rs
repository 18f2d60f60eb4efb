//! Input handling for the application

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{CompareAction, CompareView, DiffAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_force_quit(&key) {
            self.quit();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT | keys::ESC => {
                self.handle_quit();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            _ => false,
        }
    }

    /// Diff is the root view; elsewhere q goes back
    fn handle_quit(&mut self) {
        if self.current_view == View::Diff {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Diff => {
                let action = self
                    .diff_view
                    .handle_key_with_height(key, self.diff_visible_height());
                self.handle_diff_action(action);
            }
            View::Compare => {
                let action = self
                    .compare_view
                    .handle_key_with_height(key, self.summary_visible_height());
                if action == CompareAction::Back {
                    self.handle_quit();
                }
            }
            View::Help => match key.code {
                code if keys::is_move_down(code) => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                code if keys::is_move_up(code) => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                keys::GO_TOP => self.help_scroll = 0,
                _ => {}
            },
        }
    }

    fn handle_diff_action(&mut self, action: DiffAction) {
        match action {
            DiffAction::None => {}
            DiffAction::Back => self.handle_quit(),
            DiffAction::ToggleStrip => self.toggle_strip(),
            DiffAction::CycleStrategy => self.cycle_strategy(),
        }
    }

    /// Diff body height: frame minus status bar, header (3) and context bar
    pub(crate) fn diff_visible_height(&self) -> usize {
        self.last_frame_height.get().saturating_sub(1 + 3 + 1) as usize
    }

    /// Inner height of the compare view's summary pane
    pub(crate) fn summary_visible_height(&self) -> usize {
        let main_area = Rect::new(0, 0, 1, self.last_frame_height.get().saturating_sub(1));
        CompareView::summary_inner_height(main_area)
    }
}
