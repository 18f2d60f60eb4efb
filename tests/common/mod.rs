//! Common test utilities for integration tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory holding a pair of listings and an optional config
pub struct TestListings {
    dir: TempDir,
}

impl TestListings {
    pub fn new(original: &str, optimized: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("original.txt"), original).expect("Failed to write original");
        fs::write(dir.path().join("optimized.txt"), optimized).expect("Failed to write optimized");
        Self { dir }
    }

    pub fn original(&self) -> PathBuf {
        self.dir.path().join("original.txt")
    }

    pub fn optimized(&self) -> PathBuf {
        self.dir.path().join("optimized.txt")
    }

    /// Write `config.toml` next to the listings and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Command line as it would be typed, with both listing paths first
    pub fn argv(&self, extra: &[&str]) -> Vec<String> {
        let mut argv = vec![
            "optdiff".to_string(),
            self.original().display().to_string(),
            self.optimized().display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv
    }
}
