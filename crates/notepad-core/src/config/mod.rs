//! Application configuration.
//!
//! `AppConfig` is stored as pretty JSON. Every field has a default, so a
//! missing file or a partial file is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::{Screen, Theme};

const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Characters of body text shown in an unlocked preview
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// User-editable settings read at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,
    /// Start with the two sample notes
    pub seed_demo_notes: bool,
    /// Body characters shown in unlocked previews
    pub preview_chars: usize,
    pub theme: Theme,
    pub start_screen: Screen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_SCHEMA_VERSION,
            seed_demo_notes: true,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            theme: Theme::Light,
            start_screen: Screen::Home,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config payload.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to load config at {}: {error}",
                path.display()
            ))
        })
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.version != CONFIG_SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "unsupported config version {} (expected {})",
                self.version, CONFIG_SCHEMA_VERSION
            )));
        }
        if self.preview_chars == 0 {
            return Err(Error::Config(
                "preview_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
