//! View components
//!
//! Each view represents a screen in the application.

mod compare;
mod diff;

pub use compare::{CompareAction, CompareView};
pub use diff::{ChangeMark, DiffAction, DiffView};
