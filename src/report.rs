//! Bundle progress reporting
//!
//! The bundler notifies a [`BundleSink`] as it goes. [`BundleReport`]
//! records what happened; [`ConsoleSink`] prints the user-facing lines.

use std::path::{Path, PathBuf};

use crate::config::Verbosity;
use crate::models::AssetEntry;

pub trait BundleSink {
    /// Configured file does not exist; the entry is skipped
    fn on_missing(&mut self, entry: &AssetEntry);

    /// File was read and encoded
    fn on_encoded(&mut self, _entry: &AssetEntry, _byte_len: usize) {}

    /// Document was written to `path`
    fn on_written(&mut self, path: &Path);
}

/// Outcome of a bundle run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleReport {
    /// Keys written to the document, in output order
    pub bundled: Vec<String>,
    /// Configured paths that did not exist
    pub missing: Vec<String>,
    /// Where the document was written
    pub output: Option<PathBuf>,
    /// The rendered document
    pub document: String,
}

impl BundleReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BundleSink for BundleReport {
    fn on_missing(&mut self, entry: &AssetEntry) {
        self.missing.push(entry.path.clone());
    }

    fn on_encoded(&mut self, entry: &AssetEntry, _byte_len: usize) {
        self.bundled.push(entry.key.clone());
    }

    fn on_written(&mut self, path: &Path) {
        self.output = Some(path.to_path_buf());
    }
}

/// Prints warnings and the completion line to stdout
///
/// `display_output` is the output path as the user configured it, so the
/// default run prints `assets.js created` rather than a resolved path.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    verbosity: Verbosity,
    display_output: String,
}

impl ConsoleSink {
    pub fn new(verbosity: Verbosity, display_output: impl Into<String>) -> Self {
        Self {
            verbosity,
            display_output: display_output.into(),
        }
    }

    pub fn warning_line(entry: &AssetEntry) -> String {
        format!("Warning: {} not found", entry.path)
    }

    pub fn created_line(&self) -> String {
        format!("{} created", self.display_output)
    }
}

impl BundleSink for ConsoleSink {
    fn on_missing(&mut self, entry: &AssetEntry) {
        println!("{}", Self::warning_line(entry));
    }

    fn on_encoded(&mut self, entry: &AssetEntry, byte_len: usize) {
        if self.verbosity == Verbosity::Verbose {
            eprintln!("bundled {} <- {} ({} bytes)", entry.key, entry.path, byte_len);
        }
    }

    fn on_written(&mut self, _path: &Path) {
        println!("{}", self.created_line());
    }
}

/// Forwards every notification to two sinks
pub struct Tee<'a, A: ?Sized, B: ?Sized> {
    pub first: &'a mut A,
    pub second: &'a mut B,
}

impl<A: BundleSink + ?Sized, B: BundleSink + ?Sized> BundleSink for Tee<'_, A, B> {
    fn on_missing(&mut self, entry: &AssetEntry) {
        self.first.on_missing(entry);
        self.second.on_missing(entry);
    }

    fn on_encoded(&mut self, entry: &AssetEntry, byte_len: usize) {
        self.first.on_encoded(entry, byte_len);
        self.second.on_encoded(entry, byte_len);
    }

    fn on_written(&mut self, path: &Path) {
        self.first.on_written(path);
        self.second.on_written(path);
    }
}
