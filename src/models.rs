//! Core data models for gamepack
//!
//! - `AssetEntry`: a configured (key, path) pair
//! - `EncodedAsset`: an entry whose file was read and turned into a data URI
//! - `default_assets`: the built-in Crown Clash art mapping

use serde::{Deserialize, Serialize};

/// A logical key and the file that backs it
///
/// The path is kept as the configured string; it is resolved against the
/// bundler root only when the file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Name the game looks the image up by (e.g. `knight`)
    pub key: String,

    /// File path, relative to the bundler root unless absolute
    pub path: String,
}

impl AssetEntry {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// An asset ready to be written into the output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub key: String,
    /// Full `data:<mime>;base64,<payload>` string
    pub data_uri: String,
}

/// Built-in mapping used when no manifest supplies one
pub const DEFAULT_ASSETS: &[(&str, &str)] = &[
    ("knight", "unit_knight.png"),
    ("archer", "unit_archer.png"),
    ("giant", "unit_giant.png"),
    ("tower_player", "tower_blue.png"),
    ("tower_enemy", "tower_red.png"),
    ("arena", "arena_bg.png"),
];

/// The built-in mapping as owned entries, in declaration order
pub fn default_assets() -> Vec<AssetEntry> {
    DEFAULT_ASSETS
        .iter()
        .map(|(key, path)| AssetEntry::new(*key, *path))
        .collect()
}
