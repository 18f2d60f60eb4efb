//! Comment stripping
//!
//! Removes comments and blank lines from a listing before it is diffed, so
//! annotations added by the optimizer do not show up as changes.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::model::{CommentStyle, Language};

/// `/* ... */`, shortest match, may span lines. An unterminated opener
/// runs to end of input.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?(?:\*/|\z)").expect("Invalid block comment regex")
});

/// `//` to end of line
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("Invalid line comment regex"));

/// `#` to end of line
static HASH_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*").expect("Invalid hash comment regex"));

/// Statement-level `"""` docstring: opens after optional indentation and
/// closes at a `"""` that only trailing blanks follow on its line. A `\r`
/// before the newline counts as blank, so CRLF files match too.
static DOUBLE_DOCSTRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?ms)^[ \t]*""".*?"""[ \t\r]*$"#).expect("Invalid docstring regex")
});

/// Same as [`DOUBLE_DOCSTRING_REGEX`] for `'''`
static SINGLE_DOCSTRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*'''.*?'''[ \t\r]*$").expect("Invalid docstring regex")
});

/// Strip comments (per `language`) and blank lines from `code`.
///
/// Passes repeat until the text stops changing, so a marker exposed by an
/// earlier removal (`/` + `/* x */` + `/`) is removed too and
/// `strip(strip(c)) == strip(c)` holds.
pub fn strip(code: &str, language: &Language) -> String {
    let style = language.comment_style();
    let mut current = code.to_string();
    let mut passes = 0;

    loop {
        passes += 1;
        let next = drop_blank_lines(&remove_comments(&current, style));
        if next == current {
            trace!(
                language = %language,
                input_bytes = code.len(),
                output_bytes = next.len(),
                passes,
                "stripped listing"
            );
            return next;
        }
        current = next;
    }
}

/// One removal pass for the given comment family
fn remove_comments(code: &str, style: CommentStyle) -> String {
    match style {
        CommentStyle::CFamily => {
            let without_blocks = BLOCK_COMMENT_REGEX.replace_all(code, "");
            LINE_COMMENT_REGEX
                .replace_all(&without_blocks, "")
                .into_owned()
        }
        CommentStyle::Python => {
            let without_hashes = HASH_COMMENT_REGEX.replace_all(code, "");
            let without_double = DOUBLE_DOCSTRING_REGEX.replace_all(&without_hashes, "");
            SINGLE_DOCSTRING_REGEX
                .replace_all(&without_double, "")
                .into_owned()
        }
        CommentStyle::None => code.to_string(),
    }
}

/// Drop empty and whitespace-only lines, rejoining with `\n`
fn drop_blank_lines(code: &str) -> String {
    code.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
