//! optdiff - original vs optimized code viewer
//!
//! Diffs an original code listing against an optimized rewrite and explains
//! the difference.
//!
//! This library provides:
//! - [`engine`]: Comment stripping, line alignment and explanation heuristics
//! - [`model`]: Domain models
//! - [`app`]: Viewer state and logic
//! - [`ui`]: User interface components
//! - [`keys`]: Key binding definitions
//! - [`config`], [`cli`], [`logging`], [`output`]: Command line front end

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod keys;
pub mod listing;
pub mod logging;
pub mod model;
pub mod output;
pub mod ui;

pub use error::OptdiffError;
