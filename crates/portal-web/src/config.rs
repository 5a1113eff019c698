/// Configuration for the navigation shell
///
/// Presentation settings loaded from a TOML file on the server and handed to the
/// hydrating client as JSON embedded in the page.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable naming the shell config file.
pub const CONFIG_ENV_VAR: &str = "PORTAL_WEB_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portal-web.toml";
/// DOM id of the `<script>` element carrying the serialized config.
pub const CONFIG_ELEMENT_ID: &str = "portal-shell-config";

pub const MIN_DRAWER_WIDTH: u32 = 160;
pub const MAX_DRAWER_WIDTH: u32 = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerVariant {
    /// Hidden entirely while closed.
    #[default]
    Persistent,
    /// Collapses to an icon rail while closed.
    Mini,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub title: String,
    pub logo_src: Option<String>,
    pub drawer_width: u32,
    pub drawer_variant: DrawerVariant,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Portal Admin".to_string(),
            logo_src: None,
            drawer_width: 240,
            drawer_variant: DrawerVariant::Persistent,
        }
    }
}

impl ShellConfig {
    /// Load from `PORTAL_WEB_CONFIG`, falling back to `portal-web.toml`.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No shell config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading shell config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON for embedding in a `<script>` element. `<` is escaped so string
    /// values can never close the element.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace('<', "\\u003c"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }

        if !(MIN_DRAWER_WIDTH..=MAX_DRAWER_WIDTH).contains(&self.drawer_width) {
            return Err(ConfigError::InvalidDrawerWidth(self.drawer_width));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Drawer width {0}px is outside 160..=480")]
    InvalidDrawerWidth(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
