//! gamepack CLI - bundles game art into a single script
//!
//! Usage: gamepack [OPTIONS]
//!
//! With no options, encodes the built-in Crown Clash art set from the
//! current directory into `assets.js`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use gamepack::{Bundler, Config, ConsoleSink, Verbosity};

/// gamepack - embed game art as base64 data URIs in one script
#[derive(Parser, Debug)]
#[command(name = "gamepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML manifest with the asset list and output settings
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory that asset paths and the output are resolved against
    /// (defaults to the manifest's directory, or the current directory)
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Output file (overrides manifest and GAMEPACK_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a line per bundled asset to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    config.validate().context("invalid configuration")?;

    let root = resolve_root(&cli);
    let bundler = Bundler::local(&root);
    let mut sink = ConsoleSink::new(config.verbosity, config.output.display().to_string());

    bundler
        .run(&config, &mut sink)
        .with_context(|| format!("bundling assets in '{}'", root.display()))?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.manifest {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("load manifest '{}'", path.display()))?;
            for warning in warnings {
                eprintln!("warning: {}", warning);
            }
            config
        }
        None => Config::default(),
    };

    let mut config = config.with_env_overrides();

    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if cli.verbose {
        config.verbosity = Verbosity::Verbose;
    }

    Ok(config)
}

fn resolve_root(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.dir {
        return dir.clone();
    }
    cli.manifest
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf()
}
