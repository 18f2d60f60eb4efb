//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Overrides;
use crate::engine::AlignStrategy;
use crate::model::Language;

/// Compare an original code listing with its optimized version
#[derive(Parser, Debug, Clone)]
#[command(name = "optdiff", version, about)]
pub struct Args {
    /// Original listing
    pub original: PathBuf,

    /// Optimized listing
    pub optimized: PathBuf,

    /// Language tag (javascript, typescript, python, cpp, java, go, rust, ...)
    #[arg(short, long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Keep comments in the optimized listing
    #[arg(long)]
    pub no_strip: bool,

    /// Line aligner
    #[arg(long, value_enum)]
    pub strategy: Option<AlignStrategy>,

    /// Print to stdout and exit instead of opening the viewer
    #[arg(short, long, value_enum)]
    pub print: Option<PrintMode>,

    /// Config file (default: $XDG_CONFIG_HOME/optdiff/config.toml)
    #[arg(long, env = "OPTDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Batch output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintMode {
    /// Numbered line diff
    Diff,
    /// Brute force vs optimized bullet lists
    Explain,
    /// Added, removed and modified lines
    Summary,
    /// Optimized listing with comments stripped
    Strip,
    /// Full report as JSON
    Json,
}

impl Args {
    /// Settings that override the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            language: self.lang.clone(),
            no_strip: self.no_strip,
            strategy: self.strategy,
            log_level: self.log_level.clone(),
        }
    }
}

fn parse_language(tag: &str) -> Result<Language, String> {
    if tag.trim().is_empty() {
        Err("language tag must not be empty".to_string())
    } else {
        Ok(Language::from_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["optdiff", "a.js", "b.js"]).unwrap();
        assert_eq!(args.original, PathBuf::from("a.js"));
        assert_eq!(args.optimized, PathBuf::from("b.js"));
        assert!(args.lang.is_none());
        assert!(!args.no_strip);
        assert!(args.print.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "optdiff",
            "a.py",
            "b.py",
            "--lang",
            "Python",
            "--no-strip",
            "--strategy",
            "myers",
            "--print",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.lang, Some(Language::Python));
        assert_eq!(args.strategy, Some(AlignStrategy::Myers));
        assert_eq!(args.print, Some(PrintMode::Json));

        let overrides = args.overrides();
        assert!(overrides.no_strip);
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_language_is_accepted() {
        let args = Args::try_parse_from(["optdiff", "a", "b", "-l", "kotlin"]).unwrap();
        assert_eq!(args.lang, Some(Language::Other("kotlin".to_string())));
    }

    #[test]
    fn test_unknown_print_mode_rejected() {
        assert!(Args::try_parse_from(["optdiff", "a", "b", "--print", "unified"]).is_err());
    }

    #[test]
    fn test_missing_inputs_rejected() {
        assert!(Args::try_parse_from(["optdiff", "a"]).is_err());
    }
}
