//! Key handling for CompareView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{CompareAction, CompareView};

impl CompareView {
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> CompareAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input; `visible_height` is the summary pane height
    pub fn handle_key_with_height(
        &mut self,
        key: KeyEvent,
        visible_height: usize,
    ) -> CompareAction {
        self.visible_height = visible_height;

        match key.code {
            code if keys::is_move_down(code) => self.scroll_down(),
            code if keys::is_move_up(code) => self.scroll_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(visible_height),
            keys::QUIT | keys::ESC => return CompareAction::Back,
            _ => {}
        }
        CompareAction::None
    }
}
