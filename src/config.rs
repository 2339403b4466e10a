//! Runtime configuration
//!
//! Resolution order: `--config FILE`, then `$CONCIERGE_CONFIG`, then
//! `<config dir>/concierge/config.json` when it exists, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delivery::Recipients;
use crate::error::{ConciergeError, Result};

pub const CONFIG_ENV: &str = "CONCIERGE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    /// Shown in the wizard header
    pub brand: String,
    pub recipients: Recipients,
    /// Contact line shown in the dock under every step
    pub dock_phone: String,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            brand: "Dunes Concierge".to_string(),
            recipients: Recipients::default(),
            dock_phone: "+971 4 555 0199".to_string(),
        }
    }
}

impl ConciergeConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("concierge").join("config.json"))
    }

    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConciergeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.recipients.invalid_address() {
            Some(address) => Err(ConciergeError::Config(format!(
                "invalid recipient address '{}'",
                address
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_files_keep_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"brand": "Palm Desk"}}"#).unwrap();
        let config = ConciergeConfig::from_path(file.path()).unwrap();
        assert_eq!(config.brand, "Palm Desk");
        assert_eq!(config.recipients, Recipients::default());
    }

    #[test]
    fn malformed_recipients_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"recipients": {{"primary": "nobody", "cc": "cc@example.com"}}}}"#
        )
        .unwrap();
        let err = ConciergeConfig::from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = ConciergeConfig::load(Some(Path::new("/definitely/not/here.json")))
            .unwrap_err();
        assert!(matches!(err, ConciergeError::Config(_)));
    }
}
