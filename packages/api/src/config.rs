//! # Client configuration: `tutorfinder.toml`
//!
//! The front end never guesses where the backend lives. The platform entry point
//! loads a [`ClientConfig`] and hands it to the UI, which builds its
//! [`ApiClient`](crate::ApiClient) from it.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000/api"   # includes the /api prefix
//!
//! [dashboard]
//! use_ai_explanations = true               # initial state of the AI toggle
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured: a backend running locally.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, including any path prefix such as `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Student dashboard defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Whether recommendations ask the backend for natural-language explanations.
    #[serde(default = "default_use_ai")]
    pub use_ai_explanations: bool,
}

fn default_use_ai() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            use_ai_explanations: default_use_ai(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            dashboard: DashboardConfig::default(),
        }
    }

    /// Builder method to override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
