//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Library lookups
    #[serde(default)]
    pub library: LibraryConfig,

    /// Login storage
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Backend base URL; the environment and built-in default apply when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Library lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// City whose library systems are queried
    #[serde(default = "default_city")]
    pub default_city: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
        }
    }
}

fn default_city() -> String {
    "宮崎市".to_string()
}

/// Credential storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Where the bearer token is kept between runs
    #[serde(default)]
    pub token_file: Option<String>,
}
