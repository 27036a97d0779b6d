//! # Config Hot-Reloading
//!
//! Watches the rig config file and pushes every successfully parsed version
//! down a channel for the frame loop to pick up between ticks. The parent
//! directory is watched rather than the file itself, since many editors save
//! by replacing the file.
//!
//! The caller must keep the returned [`RecommendedWatcher`] alive; dropping
//! it stops the watch.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use physics::RigConfig;
use tracing::{error, info, warn};

/// Re-reads the config whenever a relevant event arrives.
struct ConfigChangeHandler {
    path: PathBuf,
    file_name: OsString,
    updates: Sender<RigConfig>,
}

impl ConfigChangeHandler {
    fn handle_event(&self, result: notify::Result<Event>) {
        match result {
            Ok(event) if is_config_event(&event, &self.file_name) => self.reload(),
            Ok(_) => {}
            Err(e) => error!("File watcher error: {e:?}"),
        }
    }

    fn reload(&self) {
        match RigConfig::load(&self.path) {
            Ok(config) => {
                if self.updates.send(config).is_err() {
                    warn!("Frame loop gone; dropping reloaded config");
                }
            }
            Err(e) => warn!("Ignoring config change: {e}"),
        }
    }
}

/// Only modifications and creations of the watched file matter.
fn is_config_event(event: &Event, file_name: &OsString) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

/// Start watching `path`, sending each reloaded config on `updates`.
///
/// # Errors
///
/// Returns an error if `path` has no file name, or if the watcher cannot be
/// created or attached to the file's directory.
pub fn start(path: &Path, updates: Sender<RigConfig>) -> Result<RecommendedWatcher> {
    info!("Initializing config watcher for {}", path.display());

    let file_name = path
        .file_name()
        .context("config path has no file name")?
        .to_os_string();
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let handler = ConfigChangeHandler {
        path: path.to_path_buf(),
        file_name,
        updates,
    };
    let mut watcher =
        notify::recommended_watcher(move |result: notify::Result<Event>| {
            handler.handle_event(result);
        })
        .context("failed to create file watcher")?;
    watcher
        .watch(&directory, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", directory.display()))?;

    info!("Config watcher active - monitoring '{}'", directory.display());
    Ok(watcher)
}
