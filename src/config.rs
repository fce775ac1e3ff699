//! Startup configuration for the CORS policy.
//!
//! Values come from built-in defaults, optionally overlaid by a TOML file and
//! then by `CORS_*` environment variables.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, MATCH_ALL_PATHS, WILDCARD, method};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use crate::policy::CorsPolicy;
use crate::util::split_header_list;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const ENV_PATH_PATTERN: &str = "CORS_PATH_PATTERN";
pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "CORS_MAX_AGE";

/// Origins the FileScout frontend is served from.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3001",
    "https://aquamarine-selkie-7ea2ff.netlify.app",
    "https://filemanagerapp.harshaanc.dev",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub path_pattern: String,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Seconds, or `false` to omit `Access-Control-Max-Age`. `true` keeps the default.
    #[serde(deserialize_with = "deserialize_max_age")]
    pub max_age: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaxAgeSetting {
    Seconds(u64),
    Enabled(bool),
}

fn deserialize_max_age<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MaxAgeSetting::deserialize(deserializer)? {
        MaxAgeSetting::Seconds(seconds) => Some(seconds),
        MaxAgeSetting::Enabled(true) => Some(DEFAULT_MAX_AGE_SECS),
        MaxAgeSetting::Enabled(false) => None,
    })
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CORS config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CORS config")]
    Toml(#[from] toml::de::Error),
    #[error("{key} must be 'true' or 'false', got {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} must be a non-negative number of seconds, got {value:?}")]
    InvalidInteger { key: &'static str, value: String },
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            path_pattern: MATCH_ALL_PATHS.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
            allowed_methods: [method::GET, method::POST, method::PUT, method::DELETE]
                .map(String::from)
                .to_vec(),
            allowed_headers: vec![WILDCARD.to_string()],
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

impl CorsConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "loaded CORS configuration file");
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`, keyed by the `CORS_*` names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Optional file, then the process environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Replaces every field whose variable `lookup` returns.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PATH_PATTERN) {
            self.path_pattern = value.trim().to_string();
        }
        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            self.allowed_origins = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            self.allowed_methods = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            self.allowed_headers = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_EXPOSED_HEADERS) {
            self.exposed_headers = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            self.allow_credentials = parse_bool(ENV_ALLOW_CREDENTIALS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_AGE) {
            self.max_age = parse_max_age(&value)?;
        }
        Ok(self)
    }

    pub fn into_policy(self) -> CorsPolicy {
        CorsPolicy {
            path_pattern: self.path_pattern,
            allowed_origins: AllowedOrigins::list(self.allowed_origins),
            allowed_methods: AllowedMethods::list(self.allowed_methods),
            allowed_headers: AllowedHeaders::list(self.allowed_headers),
            exposed_headers: ExposedHeaders::list(self.exposed_headers),
            allow_credentials: self.allow_credentials,
            max_age: self.max_age,
        }
    }
}

impl From<CorsConfig> for CorsPolicy {
    fn from(config: CorsConfig) -> Self {
        config.into_policy()
    }
}

fn parse_list(value: &str) -> Vec<String> {
    split_header_list(value).map(str::to_string).collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        })
    }
}

fn parse_max_age(value: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidInteger {
            key: ENV_MAX_AGE,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
