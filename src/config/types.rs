//! Configuration type definitions

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::{DEFAULT_GLOBAL, DEFAULT_MIME};
use crate::error::{BundleError, BundleResult};
use crate::models::{default_assets, AssetEntry};

use super::loader::{self, ConfigWarning};

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

/// Bundle configuration, also the shape of a manifest file
///
/// ```toml
/// output = "assets.js"
/// global = "GAME_ASSETS"
///
/// [[assets]]
/// key = "knight"
/// path = "unit_knight.png"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output document path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Name assigned on `window`
    #[serde(default = "default_global")]
    pub global: String,

    /// MIME type written into every data URI
    #[serde(default = "default_mime")]
    pub mime: String,

    #[serde(default)]
    pub verbosity: Verbosity,

    /// Ordered key -> path mapping; omitted means the built-in set
    #[serde(default = "default_assets")]
    pub assets: Vec<AssetEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            global: default_global(),
            mime: default_mime(),
            verbosity: Verbosity::default(),
            assets: default_assets(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("assets.js")
}

fn default_global() -> String {
    DEFAULT_GLOBAL.to_string()
}

fn default_mime() -> String {
    DEFAULT_MIME.to_string()
}

impl Config {
    /// Load configuration from a TOML manifest
    pub fn load(path: &Path) -> BundleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BundleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (GAMEPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check everything that would produce a broken document
    ///
    /// Paths are not checked here; missing files are reported at bundle time.
    pub fn validate(&self) -> BundleResult<()> {
        if !is_identifier(&self.global) {
            return Err(BundleError::InvalidGlobal {
                name: self.global.clone(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.assets {
            if !is_literal_safe(&entry.key) {
                return Err(BundleError::InvalidKey {
                    key: entry.key.clone(),
                });
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(BundleError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }

        Ok(())
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Key can sit between single quotes unescaped
fn is_literal_safe(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '\'' | '\\' | '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}
