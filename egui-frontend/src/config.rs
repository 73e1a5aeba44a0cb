//! # Wallet UI Configuration
//!
//! Local, per-user settings stored as YAML in the platform config directory.
//!
//! ## File Location
//!
//! ```text
//! <config_dir>/wallet-ui/config.yaml
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! theme: dark
//! window_width: 480.0
//! window_height: 760.0
//! receive_addresses:
//!   Bitcoin: bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq
//!   Ethereum: "0x52908400098527886E0F7030069857D2E4169EE7"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::CryptoAsset;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::components::theme::ThemeMode;

const CONFIG_DIR_NAME: &str = "wallet-ui";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletUiConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    /// Deposit addresses shown by the receive modal, as issued by the API
    pub receive_addresses: BTreeMap<CryptoAsset, String>,
}

impl Default for WalletUiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            window_width: 480.0,
            window_height: 760.0,
            receive_addresses: BTreeMap::new(),
        }
    }
}

impl WalletUiConfig {
    /// `<config_dir>/wallet-ui/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, falling back to defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: WalletUiConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save the config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {:?}", parent))?;
                info!("Created config directory: {:?}", parent);
            }
        }

        let yaml_content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        // Write to a temp file, then rename over the old config
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, path).with_context(|| format!("Failed to replace {:?}", path))?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Configured deposit address for `asset`
    pub fn receive_address(&self, asset: CryptoAsset) -> Option<&str> {
        self.receive_addresses
            .get(&asset)
            .map(|address| address.trim())
            .filter(|address| !address.is_empty())
    }
}
