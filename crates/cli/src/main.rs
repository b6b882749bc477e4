use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avif2jpg_core::{
    load_config, load_default_config, validate_config, Config, ImageTranscoder, Orchestrator,
    Transcoder,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file picked up from the working directory when present.
const DEFAULT_CONFIG_FILE: &str = "avif2jpg.toml";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn load() -> Result<Config> {
    match std::env::var("AVIF2JPG_CONFIG") {
        Ok(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        Err(_) => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                info!("Loading configuration from {:?}", path);
                load_config(&path)
                    .with_context(|| format!("Failed to load config from {:?}", path))
            } else {
                debug!("No config file, using defaults");
                load_default_config().context("Failed to load default config")
            }
        }
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("avif2jpg v{}", VERSION);

    let config = load()?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!(
        "Effective config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let transcoder = ImageTranscoder::new(config.converter.clone());
    debug!("Codec capabilities: {:?}", transcoder.capabilities());
    transcoder
        .validate()
        .context("Transcoder is not usable in this build")?;
    info!(
        "Using transcoder: {} (quality {}, optimize {})",
        transcoder.name(),
        transcoder.config().quality,
        transcoder.config().optimize
    );

    let mut orchestrator = Orchestrator::new(config, transcoder);
    info!(
        "Converting {:?} into {:?}",
        orchestrator.config().source.dir,
        orchestrator.destination()
    );
    orchestrator.run().context("Conversion run failed")?;

    Ok(())
}
