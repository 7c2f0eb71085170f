//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and ports are not part of this struct; they come from
//! `[package.metadata.leptos]` (overridable with `LEPTOS_SITE_ADDR`).

/// Default `Cache-Control: max-age` for static assets, in seconds
pub const DEFAULT_STATIC_CACHE_MAX_AGE: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds browsers may cache static assets
    /// Example: STATIC_CACHE_MAX_AGE=86400
    pub static_cache_max_age: u64,

    /// Whether responses are brotli/gzip compressed
    /// Example: COMPRESSION=false
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Malformed values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::defaults();

        let static_cache_max_age = lookup("STATIC_CACHE_MAX_AGE")
            .map(|v| parse_seconds("STATIC_CACHE_MAX_AGE", &v))
            .transpose()
            .unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, defaults.static_cache_max_age);
                None
            })
            .unwrap_or(defaults.static_cache_max_age);

        let compression = lookup("COMPRESSION")
            .map(|v| parse_flag("COMPRESSION", &v))
            .transpose()
            .unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, defaults.compression);
                None
            })
            .unwrap_or(defaults.compression);

        Self {
            static_cache_max_age,
            compression,
        }
    }

    pub fn defaults() -> Self {
        Self {
            static_cache_max_age: DEFAULT_STATIC_CACHE_MAX_AGE,
            compression: true,
        }
    }

    /// `Cache-Control` header value for static assets
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.static_cache_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_seconds(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
