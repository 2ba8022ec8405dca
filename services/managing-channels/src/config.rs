//! Configuration types for the channel step layer

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub setup: SetupConfig,
}

/// Which UI driver the steps run against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverConfig {
    /// In-process admin panel (requires the `mock` feature)
    #[serde(rename = "mock")]
    Mock,
    #[serde(rename = "webdriver")]
    WebDriver {
        #[serde(default = "default_webdriver_url")]
        url: String,
        #[serde(default = "default_true")]
        headless: bool,
    },
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig::Mock
    }
}

impl DriverConfig {
    pub fn type_name(&self) -> &str {
        match self {
            DriverConfig::Mock => "mock",
            DriverConfig::WebDriver { .. } => "webdriver",
        }
    }
}

/// Where the admin panel lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_channels_path")]
    pub channels_path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            channels_path: default_channels_path(),
        }
    }
}

impl AdminConfig {
    fn channels_prefix(&self) -> &str {
        self.channels_path.trim_end_matches('/')
    }

    pub fn index_route(&self) -> String {
        format!("{}/", self.channels_prefix())
    }

    pub fn create_route(&self) -> String {
        format!("{}/new", self.channels_prefix())
    }

    pub fn update_route(&self) -> String {
        format!("{}/{{id}}/edit", self.channels_prefix())
    }
}

/// Values used when setup steps create channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            default_locale: default_locale(),
        }
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_channels_path() -> String {
    "/admin/channels".to_string()
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::StepError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
