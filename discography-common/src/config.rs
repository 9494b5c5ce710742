//! Configuration loading and resolution
//!
//! Each value is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable(s)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Backend credentials have no compiled default. When either is missing the
//! server runs in unconfigured mode instead of refusing to start.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 5780;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default client-side deadline for one backend request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Environment variables consulted for the backend URL, first match wins
pub const BACKEND_URL_ENV_VARS: &[&str] = &[
    "DISCOGRAPHY_BACKEND_URL",
    "NEXT_PUBLIC_SUPABASE_URL",
    "SUPABASE_URL",
];

/// Environment variables consulted for the backend access key, first match wins
pub const BACKEND_KEY_ENV_VARS: &[&str] = &[
    "DISCOGRAPHY_BACKEND_KEY",
    "NEXT_PUBLIC_SUPABASE_ANON_KEY",
    "SUPABASE_ANON_KEY",
];

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV_VAR: &str = "DISCOGRAPHY_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; anything missing falls through to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub backend_url: Option<String>,

    #[serde(default)]
    pub backend_key: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Per-request deadline for backend calls, in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Top-level log level; takes precedence over `[logging] level`
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Parse TOML config text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read the config file if there is one.
    ///
    /// `Ok(None)` when no path was given or the file does not exist.
    pub fn read(path: Option<&Path>) -> Result<Option<Self>> {
        match path {
            Some(path) if path.exists() => Self::load(path).map(Some),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Read the config file, falling back to defaults.
    ///
    /// A missing file yields defaults silently. An unreadable or malformed
    /// file also yields defaults, and its error is handed back so the caller
    /// can report it once logging is up.
    pub fn read_or_default(path: Option<&Path>) -> (Self, Option<Error>) {
        match Self::read(path) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Effective log level: `log_level`, then `[logging] level`
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(self.logging.level.as_str())
    }
}

/// Default configuration file path for the platform
///
/// `~/.config/discography/config.toml` on Linux, the platform equivalent
/// elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("discography").join("config.toml"))
}

/// Config file to consult: explicit path, then `DISCOGRAPHY_CONFIG`, then
/// the platform default
pub fn locate_config_file(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    cli_path
        .or_else(|| first_env(&[CONFIG_PATH_ENV_VAR]).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub backend_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: Option<String>,
    pub backend_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub log_level: String,
    /// Config file that was consulted, whether or not it existed
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Combine CLI values, environment, the loaded TOML file and defaults
    pub fn from_sources(
        overrides: ConfigOverrides,
        toml: TomlConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        let log_level = toml.log_level().to_string();

        let backend_url = non_empty(overrides.backend_url)
            .or_else(|| first_env(BACKEND_URL_ENV_VARS))
            .or_else(|| non_empty(toml.backend_url));

        let backend_key = non_empty(overrides.backend_key)
            .or_else(|| first_env(BACKEND_KEY_ENV_VARS))
            .or_else(|| non_empty(toml.backend_key));

        let host = non_empty(overrides.host)
            .or_else(|| non_empty(toml.host))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let timeout_secs = toml
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            backend_url,
            backend_key,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level,
            config_path,
        }
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// First non-empty environment variable among `names`
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().and_then(|v| non_empty(Some(v))))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
