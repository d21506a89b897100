//! # Client configuration
//!
//! [`ClientConfig`] gathers what the client needs to reach the longitude service:
//!
//! - the **base URL** the three routes are appended to,
//! - a global **timeout** applied to every request,
//! - whether requests are **validated locally** before being sent.
//!
//! Values come from [`Default`], from the environment ([`ClientConfig::from_env`]) or from
//! the builder-style `with_*` methods, in that order of precedence for the CLI.
//!
//! ```rust
//! use horolong::config::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::default()
//!     .with_base_url("http://astro.example.org/api")
//!     .with_timeout(Duration::from_secs(3));
//! assert!(config.check().is_ok());
//! ```

use std::{env, time::Duration};

use reqwest::Url;

use crate::{
    constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_BASE_URL, ENV_TIMEOUT_SECS, ENV_VALIDATE},
    horolong_errors::{HoroLongError, Result},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub validate_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            validate_requests: false,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the process environment, falling back to the defaults.
    ///
    /// Variables
    /// -----------------
    /// * `HOROLONG_BASE_URL`: base URL of the service.
    /// * `HOROLONG_TIMEOUT_SECS`: request timeout, in whole seconds.
    /// * `HOROLONG_VALIDATE`: `1`/`true`/`yes` to validate requests before sending them.
    ///
    /// Return
    /// ----------
    /// * The configuration, or [`HoroLongError::Config`] if a variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                HoroLongError::Config(format!("{ENV_TIMEOUT_SECS}={secs} is not a number"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(flag) = lookup(ENV_VALIDATE) {
            config.validate_requests = parse_flag(&flag).ok_or_else(|| {
                HoroLongError::Config(format!("{ENV_VALIDATE}={flag} is not a boolean"))
            })?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_validation(mut self, validate_requests: bool) -> Self {
        self.validate_requests = validate_requests;
        self
    }

    /// Reject configurations the transport cannot work with.
    pub fn check(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| HoroLongError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HoroLongError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                self.base_url,
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(HoroLongError::Config("timeout must be positive".into()));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
