//! File-backed settings for hosts without a configuration store of their
//! own (the CLI binaries read `gleampark.toml`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigStore, PasteMethod, ShareMethod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The two configuration enumerations, with their defaults.
///
/// ```toml
/// share_method = "both"
/// paste_method = "ask"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub share_method: ShareMethod,
    pub paste_method: PasteMethod,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    /// Loads `path`, falling back to defaults when the file is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "using default settings");
                Self::default()
            }
        }
    }
}

impl ConfigStore for Settings {
    fn share_method(&self) -> ShareMethod {
        self.share_method
    }

    fn paste_method(&self) -> PasteMethod {
        self.paste_method
    }
}
