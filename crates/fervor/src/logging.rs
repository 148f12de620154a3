//! File logging. The terminal belongs to the UI, so log lines go to
//! `fervor.log` in the platform data directory.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use fervor_config::Config;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FERVOR_LOG";

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when logging could not be set up.
pub fn init() -> Option<PathBuf> {
    let dir = Config::project_dirs()?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join("fervor.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
