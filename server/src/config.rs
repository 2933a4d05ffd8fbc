//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `COOKIE_SECURE`: `1|true|yes|on` or `0|false|no|off`, default false
//! - `THEME_COOKIE_MAX_AGE_SECS`: theme cookie lifetime, default one year

use time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_THEME_COOKIE_MAX_AGE_SECS: i64 = 31_536_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid THEME_COOKIE_MAX_AGE_SECS: {0:?}")]
    InvalidCookieMaxAge(String),
    #[error("invalid boolean for {var}: {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Attributes applied to the theme cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age: Duration,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self { secure: false, max_age: Duration::seconds(DEFAULT_THEME_COOKIE_MAX_AGE_SECS) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cookie: CookieSettings,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "COOKIE_SECURE", value: raw })?,
            None => false,
        };

        let max_age_secs = match lookup("THEME_COOKIE_MAX_AGE_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidCookieMaxAge(raw))?,
            None => DEFAULT_THEME_COOKIE_MAX_AGE_SECS,
        };

        Ok(Self { port, cookie: CookieSettings { secure, max_age: Duration::seconds(max_age_secs) } })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
