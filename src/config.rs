use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_BASE_URL;
use crate::favorites::FAVORITES_KEY;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Spoonacular API key (can also be set via SPOONACULAR_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for the catalog API (for proxies or test servers)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Results per search page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Where favorites are kept
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout: default_timeout(),
            favorites: FavoritesConfig::default(),
        }
    }
}

/// Configuration for favorites storage
#[derive(Debug, Deserialize, Clone)]
pub struct FavoritesConfig {
    /// Directory holding the favorites file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage key (file stem) of the favorites list
    #[serde(default = "default_favorites_key")]
    pub key: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_favorites_key(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    8
}

fn default_timeout() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".recipe-browser")
}

fn default_favorites_key() -> String {
    FAVORITES_KEY.to_string()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__FAVORITES__DATA_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from an optional explicit file and environment variables
///
/// An explicit `path` must exist; without one, `recipe-browser.toml` in the
/// current directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<BrowserConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-browser").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_BROWSER__FAVORITES__KEY
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
