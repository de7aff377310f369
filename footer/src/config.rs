//! Optional `footer.toml` overriding the storefront literals.
//!
//! Every field is optional; missing ones keep their default value:
//!
//! ```toml
//! store_name = "Ruwaid's Clothing"
//! brands = ["Gul Ahmed", "Khaadi"]
//!
//! [contact]
//! phone = "+92 321 0000000"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::FooterError;
use crate::types::FooterContent;

/// Default config file name looked up by hosts and the CLI.
pub const CONFIG_FILE_NAME: &str = "footer.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Pin the copyright year instead of reading the clock
    pub year: Option<i32>,
    /// Footer content; fields not present keep the storefront literals
    #[serde(flatten)]
    pub content: FooterContent,
}

impl FooterConfig {
    /// Load `footer.toml` from the given directory, or defaults if absent or invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_or_default(&root.join(CONFIG_FILE_NAME))
    }

    /// Parse config from a TOML string and validate the resulting content.
    pub fn from_toml_str(raw: &str, path: &Path) -> Result<Self, FooterError> {
        let config: FooterConfig = toml::from_str(raw).map_err(|source| FooterError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.content.validate()?;
        Ok(config)
    }

    /// Load config from a specific path. Missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, FooterError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FooterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw, path)?;
        tracing::debug!("loaded footer config from {}", path.display());
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using built-in footer content", e);
                Self::default()
            }
        }
    }
}
