//! # Front-end configuration — `market.toml`
//!
//! The web binary embeds this file at build time and parses it on start-up.
//!
//! ```toml
//! [api]
//! base_url = "/api"      # prefix for every backend request
//!
//! [app]
//! title = "PROFI.ru"
//! log_level = "info"     # trace | debug | info | warn | error
//! ```
//!
//! Every section and key has a default, so an empty file is a valid configuration.

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Absolute URL, or a path resolved against the page origin.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Shown in the header.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_title() -> String {
    "PROFI.ru".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
        }
    }
}

impl MarketConfig {
    pub fn filename() -> &'static str {
        "market.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
