//! gamepack - bundles game art into a single script
//!
//! Reads an ordered key -> file mapping, encodes each existing file as a
//! base64 `data:` URI and writes one `window.GAME_ASSETS = { ... };`
//! document, so a browser game can load its art without extra requests.

pub mod bundler;
pub mod config;
pub mod encode;
pub mod error;
pub mod fs;
pub mod models;
pub mod report;

// Re-exports for convenience
pub use bundler::{bundle, Bundler};
pub use config::{Config, ConfigWarning, Verbosity};
pub use encode::{data_uri, render_document};
pub use error::{BundleError, BundleResult};
pub use fs::{FileSystem, LocalFs};
pub use models::{default_assets, AssetEntry, EncodedAsset};
pub use report::{BundleReport, BundleSink, ConsoleSink};
