//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use zenith_providers::ProviderSettings;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External provider credentials and endpoints.
    #[serde(default)]
    pub providers: ProviderSettings,

    /// Artifact and feedback storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "zenith_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for synthesized audio artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Path to the append-only feedback log file.
    #[serde(default = "default_feedback_path")]
    pub feedback_path: String,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> String {
    "audio_output".to_string()
}

fn default_feedback_path() -> String {
    "feedback_log.jsonl".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            feedback_path: default_feedback_path(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `ZENITH_HOST` overrides `server.host`
/// - `ZENITH_PORT` overrides `server.port`
/// - `ZENITH_LOG_LEVEL` overrides `logging.level`
/// - `ZENITH_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `ZENITH_OUTPUT_DIR` overrides `storage.output_dir`
/// - `ZENITH_FEEDBACK_PATH` overrides `storage.feedback_path`
/// - `ZENITH_ANTHROPIC_API_KEY`, `ZENITH_GEMINI_API_KEY`,
///   `ZENITH_ELEVENLABS_API_KEY`, `ZENITH_MUSIC_API_KEY` override the
///   corresponding provider credentials
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("ZENITH_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("ZENITH_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(level) = std::env::var("ZENITH_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("ZENITH_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(dir) = std::env::var("ZENITH_OUTPUT_DIR") {
        config.storage.output_dir = dir;
    }
    if let Ok(path) = std::env::var("ZENITH_FEEDBACK_PATH") {
        config.storage.feedback_path = path;
    }
    if let Ok(key) = std::env::var("ZENITH_ANTHROPIC_API_KEY") {
        config.providers.anthropic_api_key = key;
    }
    if let Ok(key) = std::env::var("ZENITH_GEMINI_API_KEY") {
        config.providers.gemini_api_key = key;
    }
    if let Ok(key) = std::env::var("ZENITH_ELEVENLABS_API_KEY") {
        config.providers.elevenlabs_api_key = key;
    }
    if let Ok(key) = std::env::var("ZENITH_MUSIC_API_KEY") {
        config.providers.music_api_key = key;
    }

    Ok(config)
}
