//! # Application Logic
//!
//! Wires the command line, logging, config and the rig together. With the
//! `render` feature the rig runs in a window driven by
//! [`render::run`]; otherwise, or with `--headless`, a fixed number of ticks
//! are stepped against a virtual viewport and progress is logged.

use anyhow::Result;
use physics::{RigConfig, RigPose, RigSim, ViewportBounds};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Ticks between headless progress lines
const LOG_INTERVAL: u64 = 50;

/// Outcome of a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub steps: u64,
    /// Tick on which the rig left the viewport, if it did
    pub frozen_at: Option<u64>,
    pub final_pose: RigPose,
}

/// Install the `tracing` subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the rig as described by `args`.
///
/// # Errors
///
/// Returns any config, renderer or file watcher error.
pub fn run(args: &Args) -> Result<()> {
    init_logging();
    let config = args.rig_config()?;

    if args.headless || !cfg!(feature = "render") {
        let report = run_headless(&config, args.steps, args.dt, args.width, args.height)?;
        tracing::info!("Final pose: {:?}", report.final_pose);
        return Ok(());
    }

    run_windowed(args, config)
}

#[cfg(feature = "render")]
fn run_windowed(args: &Args, config: RigConfig) -> Result<()> {
    let (updates, _watcher) = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (tx, rx) = std::sync::mpsc::channel();
            match crate::watcher::start(path, tx) {
                Ok(watcher) => (Some(rx), Some(watcher)),
                Err(e) => {
                    tracing::error!("Failed to start config watcher: {e:?}");
                    (None, None)
                }
            }
        }
        _ => (None, None),
    };

    tracing::info!("Opening {}x{} window", args.width, args.height);
    render::run(render::RunSettings {
        config,
        width: args.width,
        height: args.height,
        updates,
    })
}

#[cfg(not(feature = "render"))]
fn run_windowed(_args: &Args, _config: RigConfig) -> Result<()> {
    anyhow::bail!("built without the `render` feature; use --headless")
}

/// Step a rig built from `config` for `steps` ticks of `dt` seconds inside a
/// virtual `width` x `height` viewport.
///
/// # Errors
///
/// Returns an error if `config` is invalid.
pub fn run_headless(
    config: &RigConfig,
    steps: u64,
    dt: f32,
    width: u32,
    height: u32,
) -> Result<HeadlessReport> {
    let mut sim = RigSim::from_config(config)?;
    let bounds = ViewportBounds::from_window(width, height, config.pixels_to_world);
    tracing::info!("Starting headless loop for {steps} steps with dt = {dt}...");

    let mut frozen_at = None;
    let mut pose = sim.pose();
    for i in 0..steps {
        pose = sim.tick(dt, &bounds);
        if pose.frozen && frozen_at.is_none() {
            frozen_at = Some(i + 1);
        }
        if (i + 1) % LOG_INTERVAL == 0 {
            let info = sim.get_debug_info();
            tracing::info!(
                "Step {} complete. Free end: ({:.3}, {:.3}), separation {:.4}",
                i + 1,
                info.free_end.x,
                info.free_end.y,
                info.separation
            );
        }
    }

    if let Some(step) = frozen_at {
        tracing::info!("Rig froze on step {step}");
    }
    Ok(HeadlessReport {
        steps,
        frozen_at,
        final_pose: pose,
    })
}
