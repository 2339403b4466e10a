//! Tracing subscriber setup
//!
//! The terminal UI owns the screen, so while it runs events go to a log file
//! under the cache directory. Batch commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CONCIERGE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `<cache dir>/concierge/concierge.log`
    File,
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("concierge").join("concierge.log"))
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "concierge=debug"
        } else {
            "concierge=info"
        })
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(verbose: bool, target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .with(filter(verbose))
                .try_init();
        }
        LogTarget::File => {
            let file = log_file_path().and_then(|path| {
                let _ = std::fs::create_dir_all(path.parent()?);
                OpenOptions::new().create(true).append(true).open(path).ok()
            });
            // No usable log file: stay silent rather than draw over the UI
            let Some(file) = file else {
                return;
            };
            let _ = tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter(verbose))
                .try_init();
        }
    }
}
