//! Hand a mail link to the platform's default mail client

use std::process::Command;

use tracing::{info, warn};

use super::mailto::MailLink;
use crate::error::{ConciergeError, Result};

pub trait MailLauncher {
    fn open(&self, link: &MailLink) -> Result<()>;
}

/// Spawns the OS opener (`xdg-open`, `open`, or the Windows URL handler)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMailLauncher;

impl MailLauncher for SystemMailLauncher {
    fn open(&self, link: &MailLink) -> Result<()> {
        let uri = link.uri();
        let mut command = opener_command(&uri);
        let status = command.status().map_err(|e| {
            warn!(error = %e, "mail opener could not be started");
            ConciergeError::Launch(e.to_string())
        })?;
        if !status.success() {
            warn!(%status, "mail opener failed");
            return Err(ConciergeError::Launch(format!("opener exited with {}", status)));
        }
        info!(bytes = uri.len(), "mail link handed to the mail client");
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(uri: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(uri);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(uri: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", uri]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(uri: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(uri);
    command
}
