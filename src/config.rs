use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub lrclib: LrclibSettings,
    #[serde(default)]
    #[validate(nested)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Upstream LRCLIB connection settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LrclibSettings {
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    pub user_agent: Option<String>,
    /// Request timeout. Unset means the transport default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl LrclibSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LrclibSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String { "https://lrclib.net".to_string() }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthSettings {
    #[serde(default = "default_api_keys")]
    #[validate(length(min = 1, message = "at least one API key must be configured"))]
    pub api_keys: Vec<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { api_keys: default_api_keys() }
    }
}

fn default_api_keys() -> Vec<String> {
    vec!["apikey1".to_string(), "apikey2".to_string()]
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LRC_PROXY)
    /// 5. `PORT`, the conventional platform port variable
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LRC_PROXY__SERVER__PORT -> server.port
            //       LRC_PROXY__AUTH__API_KEYS=a,b -> auth.api_keys
            .add_source(environment())
            .build()?;

        let settings = apply_port_override(settings)?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LRC_PROXY")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("auth.api_keys")
        .try_parsing(true)
}

/// `PORT` wins over everything else when present
fn apply_port_override(settings: Config) -> Result<Config, ConfigError> {
    let Ok(port) = std::env::var("PORT") else {
        return Ok(settings);
    };

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|e| ConfigError::Message(format!("invalid PORT {:?}: {}", port, e)))?;

    Config::builder()
        .add_source(settings)
        .set_override("server.port", i64::from(port))?
        .build()
}
