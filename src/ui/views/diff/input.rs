//! Key handling for DiffView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{DiffAction, DiffView};

impl DiffView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> DiffAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_height: usize) -> DiffAction {
        // Always update visible_height to ensure accurate scroll bounds
        self.visible_height = visible_height;

        if keys::is_half_page_down(&key) {
            self.scroll_half_page_down(visible_height);
            return DiffAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.scroll_half_page_up(visible_height);
            return DiffAction::None;
        }

        match key.code {
            code if keys::is_move_down(code) => {
                self.scroll_down();
                DiffAction::None
            }
            code if keys::is_move_up(code) => {
                self.scroll_up();
                DiffAction::None
            }
            keys::GO_TOP => {
                self.jump_to_top();
                DiffAction::None
            }
            keys::GO_BOTTOM => {
                self.jump_to_bottom(visible_height);
                DiffAction::None
            }
            keys::NEXT_CHANGE => {
                self.next_change();
                DiffAction::None
            }
            keys::PREV_CHANGE => {
                self.prev_change();
                DiffAction::None
            }
            keys::TOGGLE_STRIP => DiffAction::ToggleStrip,
            keys::CYCLE_ALIGNER => DiffAction::CycleStrategy,
            keys::QUIT | keys::ESC => DiffAction::Back,
            _ => DiffAction::None,
        }
    }
}
