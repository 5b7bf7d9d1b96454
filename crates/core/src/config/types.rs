use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub rawg: RawgConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl Config {
    /// Shared secret expected on `/import`.
    ///
    /// Falls back to the RAWG API key when no dedicated import key is set.
    pub fn import_key(&self) -> &str {
        self.auth
            .import_key
            .as_deref()
            .unwrap_or(&self.rawg.api_key)
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("revalis.db")
}

/// RAWG API client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawgConfig {
    /// RAWG API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL of the RAWG API
    #[serde(default = "default_rawg_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum number of detail requests in flight per search (1 = sequential)
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,
}

impl RawgConfig {
    /// Config with the given key and every other field at its default.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_rawg_base_url(),
            timeout_secs: default_timeout(),
            detail_concurrency: default_detail_concurrency(),
        }
    }
}

fn default_rawg_base_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_detail_concurrency() -> usize {
    1
}

/// Authentication configuration for privileged endpoints
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret required by `/import`. Defaults to `rawg.api_key` when unset.
    #[serde(default)]
    pub import_key: Option<String>,
}

/// Import configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    /// Upper bound for the `pages` parameter of `/import`
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Results requested from RAWG per imported page
    #[serde(default = "default_import_page_size")]
    pub page_size: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            page_size: default_import_page_size(),
        }
    }
}

fn default_max_pages() -> u32 {
    10
}

fn default_import_page_size() -> u32 {
    10
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rawg: SanitizedRawgConfig,
    pub auth: SanitizedAuthConfig,
    pub import: ImportConfig,
}

/// Sanitized RAWG config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedRawgConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u64,
    pub detail_concurrency: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAuthConfig {
    /// Whether `/import` uses a dedicated key rather than the RAWG key
    pub dedicated_import_key: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            database: config.database.clone(),
            rawg: SanitizedRawgConfig {
                base_url: config.rawg.base_url.clone(),
                api_key_configured: !config.rawg.api_key.is_empty(),
                timeout_secs: config.rawg.timeout_secs,
                detail_concurrency: config.rawg.detail_concurrency,
            },
            auth: SanitizedAuthConfig {
                dedicated_import_key: config.auth.import_key.is_some(),
            },
            import: config.import.clone(),
        }
    }
}
