//! Mask configuration persistence
//!
//! Stores provider defaults, locale symbol tables and named mask presets in
//! `~/.config/maskedit/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mask::{LocaleSymbols, LocaleTable, ProviderOptions};

/// Configuration shared by every provider the tool builds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Provider defaults; missing fields keep their built-in values
    pub options: ProviderOptions,
    /// Key into `locales` used for separator symbols
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub locales: LocaleTable,
    /// Named masks, e.g. `phone: "(999) 000-0000"`
    pub presets: BTreeMap<String, String>,
}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path, reporting any failure
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Expand a preset name; anything else is taken as a literal mask
    pub fn resolve_mask<'a>(&'a self, name_or_mask: &'a str) -> &'a str {
        match self.presets.get(name_or_mask) {
            Some(mask) => {
                tracing::debug!("Preset {:?} -> {:?}", name_or_mask, mask);
                mask
            }
            None => name_or_mask,
        }
    }

    /// Provider options with the selected locale's symbols folded in
    pub fn provider_options(&self) -> ProviderOptions {
        let mut options = self.options.clone();
        if let Some(locale) = &self.locale {
            options.symbols = LocaleSymbols::resolve(&self.locales, locale);
        }
        options
    }
}
