//! Command line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use physics::{Gravity, RigConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "swordswing", version, about = "Swing a sword around on a verlet stick")]
pub struct Args {
    /// JSON rig config; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without a window, stepping a fixed number of ticks
    #[arg(long)]
    pub headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 1000)]
    pub steps: u64,

    /// Fixed time step in seconds for headless mode
    #[arg(long, default_value_t = 0.016)]
    pub dt: f32,

    /// Override the config's gravity (clamped to 0..=5)
    #[arg(long)]
    pub gravity: Option<f32>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Reload the config file whenever it changes
    #[arg(long, requires = "config")]
    pub watch: bool,
}

impl Args {
    /// Resolve the rig config from `--config` and `--gravity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is invalid.
    pub fn rig_config(&self) -> Result<RigConfig> {
        let mut config = match &self.config {
            Some(path) => RigConfig::load(path)
                .with_context(|| format!("failed to load rig config {}", path.display()))?,
            None => RigConfig::default(),
        };
        if let Some(requested) = self.gravity {
            let gravity = Gravity::new(requested).get();
            if (gravity - requested).abs() > f32::EPSILON {
                tracing::warn!("Gravity {requested} out of range, clamped to {gravity}");
            }
            config.gravity = gravity;
        }
        config.validate()?;
        Ok(config)
    }
}
