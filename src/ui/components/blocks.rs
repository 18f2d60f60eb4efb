//! Block components for UI rendering
//!
//! Views stack a header block, borderless-top sections and bordered panes.

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a block with only left and right borders (for continuation sections)
pub fn side_borders_block() -> Block<'static> {
    Block::default().borders(Borders::LEFT | Borders::RIGHT)
}

/// Create a block with top, left, and right borders (for header sections)
pub fn header_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::TOP | Borders::LEFT | Borders::RIGHT)
}
