// src/log.rs
//
// File logger for the GUI and CLI. Lines look like `[uptime][LEVEL] msg`
// and land in `.store/debug.log`; stderr is used if the file can't be opened.
// The `logf!/logd!/loge!` macros are thin aliases over `tracing` events.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Path of the debug log relative to the working directory.
pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = fs::create_dir_all(STORE_DIR).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
    });

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_ansi(false);

    let installed = match file {
        Ok(f) => builder.with_writer(Mutex::new(f)).try_init(),
        Err(e) => {
            eprintln!("Log: cannot open {} ({e}), using stderr", log_path().display());
            builder.with_writer(std::io::stderr).try_init()
        }
    };

    if installed.is_ok() {
        tracing::info!("Log: started v{}", env!("CARGO_PKG_VERSION"));
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
