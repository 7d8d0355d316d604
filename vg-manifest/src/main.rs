//! vg-manifest - Main entry point
//!
//! Regenerates `servers_history/info.json` for the VPN Gate mirror.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vg_manifest::{config::Config, report, utils, ManifestGenerator};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// History directory to scan (overrides config)
    #[arg(long, value_name = "DIR")]
    history_dir: Option<PathBuf>,

    /// Base download URL (overrides config)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error generating file list: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(dir) = args.history_dir {
        config.history.dir = dir;
    }
    if let Some(url) = args.base_url {
        config.site.base_url = url;
    }
    config.validate()?;

    // Initialize logging
    let log_level = args.log_level.as_deref().unwrap_or(&config.log.level);
    utils::logger::init(log_level)?;

    tracing::info!("Starting vg-manifest v{}", env!("CARGO_PKG_VERSION"));

    let generator = ManifestGenerator::new(config);
    let manifest = generator.generate()?;
    let path = generator.write(&manifest)?;

    tracing::info!(
        "Wrote manifest with {} files to {}",
        manifest.total_files,
        path.display()
    );

    print!("{}", report::summary(&manifest));

    Ok(())
}
