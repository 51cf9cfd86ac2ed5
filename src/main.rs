use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "quickbin",
    version,
    about = "Recycle Bin tray utility: single click opens the bin, double click empties it"
)]
struct Cli {
    /// Settings file location (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "quickbin=debug"
    } else {
        "quickbin=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let settings_path = match cli.config {
        Some(path) => path,
        None => {
            quickbin::settings::default_path().context("could not resolve the settings location")?
        }
    };

    run(settings_path)
}

#[cfg(windows)]
fn run(settings_path: PathBuf) -> anyhow::Result<()> {
    use tracing::info;

    let settings = quickbin::Settings::load(&settings_path)
        .with_context(|| format!("could not load settings from {}", settings_path.display()))?;
    info!("starting tray, settings at {}", settings_path.display());

    quickbin::tray::run(settings, settings_path)?;
    Ok(())
}

#[cfg(not(windows))]
fn run(_settings_path: PathBuf) -> anyhow::Result<()> {
    anyhow::bail!(
        "quickbin drives the Windows shell's Recycle Bin; there is no tray backend for this platform"
    )
}
