//! Reading listings from disk

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::DiffConfig;
use crate::engine::Session;
use crate::error::OptdiffError;

/// Read one listing as UTF-8 text.
///
/// The file's final line terminator (`\n` or `\r\n`) is dropped, so a
/// file ending in a newline does not gain an empty last line.
pub fn read_listing(path: &Path) -> Result<String, OptdiffError> {
    let mut text = fs::read_to_string(path).map_err(|source| OptdiffError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    trim_final_newline(&mut text);
    debug!(path = %path.display(), bytes = text.len(), "read listing");
    Ok(text)
}

fn trim_final_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// Build a session from two files and the effective diff settings
pub fn load_session(
    original: &Path,
    optimized: &Path,
    settings: &DiffConfig,
) -> Result<Session, OptdiffError> {
    let mut session = Session::new(
        read_listing(original)?,
        read_listing(optimized)?,
        settings.language.clone(),
    );
    session.strip_comments = settings.strip_comments;
    session.strategy = settings.strategy;
    Ok(session)
}
