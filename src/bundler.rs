//! Asset bundler
//!
//! One straight pass over the configured entries: encode the files that
//! exist, report the ones that don't, then write the document in one go.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::encode::{data_uri, render_document};
use crate::error::BundleResult;
use crate::fs::{FileSystem, LocalFs};
use crate::models::{AssetEntry, EncodedAsset};
use crate::report::{BundleReport, BundleSink, ConsoleSink, Tee};

/// Bundles assets found under `root` using file system `F`
#[derive(Debug, Clone)]
pub struct Bundler<F: FileSystem = LocalFs> {
    fs: F,
    root: PathBuf,
}

impl Bundler<LocalFs> {
    /// Bundler over the local disk rooted at `root`
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::new(LocalFs::new(), root)
    }
}

impl<F: FileSystem> Bundler<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Resolve a configured path against the root (absolute paths pass through)
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Encode every entry whose file exists, in entry order
    ///
    /// Missing files go to `sink.on_missing` and are skipped. A file that
    /// exists but cannot be read aborts the run.
    pub fn encode_all(
        &self,
        assets: &[AssetEntry],
        mime: &str,
        sink: &mut dyn BundleSink,
    ) -> BundleResult<Vec<EncodedAsset>> {
        let mut encoded = Vec::with_capacity(assets.len());

        for entry in assets {
            let path = self.resolve(&entry.path);
            if !self.fs.is_file(&path) {
                sink.on_missing(entry);
                continue;
            }

            let bytes = self.fs.read_bytes(&path)?;
            sink.on_encoded(entry, bytes.len());
            encoded.push(EncodedAsset {
                key: entry.key.clone(),
                data_uri: data_uri(mime, &bytes),
            });
        }

        Ok(encoded)
    }

    /// Build the document and write it to the configured output
    pub fn run(&self, config: &Config, sink: &mut dyn BundleSink) -> BundleResult<BundleReport> {
        let mut report = BundleReport::new();
        let mut tee = Tee {
            first: &mut report,
            second: sink,
        };

        let encoded = self.encode_all(&config.assets, &config.mime, &mut tee)?;
        let document = render_document(&config.global, &encoded);

        let output = self.resolve(&config.output);
        self.fs.write_atomic(&output, &document)?;
        tee.on_written(&output);

        report.document = document;
        Ok(report)
    }
}

/// Bundle `assets` from the current directory into `assets.js`
///
/// Prints a warning per missing file and a completion line to stdout.
/// Only I/O failures on existing inputs or on the output are errors.
pub fn bundle(assets: &[AssetEntry]) -> BundleResult<()> {
    let config = Config {
        assets: assets.to_vec(),
        ..Config::default()
    };
    let mut sink = ConsoleSink::new(config.verbosity, config.output.display().to_string());
    Bundler::local(".").run(&config, &mut sink)?;
    Ok(())
}
