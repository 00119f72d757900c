//! Manifest loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, BundleResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundleError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (GAMEPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // GAMEPACK_OUTPUT
    if let Some(output) = var("GAMEPACK_OUTPUT") {
        if !output.trim().is_empty() {
            config.output = PathBuf::from(output);
        }
    }

    // GAMEPACK_VERBOSITY
    if let Some(verbosity) = var("GAMEPACK_VERBOSITY") {
        config.verbosity = match verbosity.to_lowercase().as_str() {
            "verbose" | "debug" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// 1-based line where `key` is assigned (`key = ...`), ignoring values
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

/// Closest manifest key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &["output", "global", "mime", "verbosity", "assets", "key", "path"];

    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(known, _)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        // `diag` holds the previous row's value at j, `row[j]` already the new one
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diag + usize::from(ca != *cb);
            diag = row[j + 1];
            row[j + 1] = substitute.min(diag + 1).min(row[j] + 1);
        }
    }

    row[b.len()]
}
