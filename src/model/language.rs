//! Source language tags
//!
//! The tag only selects a comment syntax; it is never checked against the
//! listing itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of a code listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Cpp,
    Java,
    Go,
    Rust,
    /// Any unrecognized tag, trimmed but otherwise kept as given
    Other(String),
}

/// Comment syntax family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* block */` and `// line`
    CFamily,
    /// `# line` plus statement-level triple-quoted docstrings
    Python,
    /// No comment syntax known
    None,
}

impl Language {
    /// Parse a tag. Never fails: unknown tags become [`Language::Other`].
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "javascript" => Self::JavaScript,
            "typescript" => Self::TypeScript,
            "python" => Self::Python,
            "cpp" => Self::Cpp,
            "java" => Self::Java,
            "go" => Self::Go,
            "rust" => Self::Rust,
            _ => Self::Other(tag.trim().to_string()),
        }
    }

    /// The canonical tag string
    pub fn tag(&self) -> &str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Other(tag) => tag,
        }
    }

    /// Comment syntax used when stripping listings in this language
    pub fn comment_style(&self) -> CommentStyle {
        match self {
            Self::JavaScript | Self::TypeScript | Self::Java | Self::Cpp | Self::Go | Self::Rust => {
                CommentStyle::CFamily
            }
            Self::Python => CommentStyle::Python,
            Self::Other(_) => CommentStyle::None,
        }
    }

    /// Whether this is one of the recognized tags
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.tag().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        let tags = ["javascript", "typescript", "python", "cpp", "java", "go", "rust"];
        for tag in tags {
            let language = Language::from_tag(tag);
            assert!(language.is_known(), "{tag} should be known");
            assert_eq!(language.tag(), tag);
        }
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        assert_eq!(Language::from_tag("Rust"), Language::Rust);
        assert_eq!(Language::from_tag(" python "), Language::Python);
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let language = Language::from_tag("haskell");
        assert_eq!(language, Language::Other("haskell".to_string()));
        assert_eq!(language.tag(), "haskell");
        assert_eq!(language.comment_style(), CommentStyle::None);
        assert!(!language.is_known());
    }

    #[test]
    fn test_unknown_tag_is_trimmed() {
        let language = Language::from_tag(" Kotlin ");
        assert_eq!(language, Language::Other("Kotlin".to_string()));
        assert_eq!(language.to_string(), "Kotlin");
    }

    #[test]
    fn test_comment_styles() {
        assert_eq!(Language::Go.comment_style(), CommentStyle::CFamily);
        assert_eq!(Language::TypeScript.comment_style(), CommentStyle::CFamily);
        assert_eq!(Language::Python.comment_style(), CommentStyle::Python);
    }

    #[test]
    fn test_default_is_javascript() {
        assert_eq!(Language::default(), Language::JavaScript);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Language::Cpp).unwrap();
        assert_eq!(json, "\"cpp\"");
        let parsed: Language = serde_json::from_str("\"kotlin\"").unwrap();
        assert_eq!(parsed, Language::Other("kotlin".to_string()));
    }
}
