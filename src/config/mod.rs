//! Configuration module for gamepack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GAMEPACK_*)
//! 3. Manifest (`--manifest gamepack.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, Verbosity};
