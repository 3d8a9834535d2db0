//! Connection settings for the probes.
//!
//! Credentials never live in source. They come from CLI flags, the
//! environment, or both (see [`crate::cli::ConnectionArgs`]).

use std::time::Duration;

use crate::error::{Error, Result};

/// Default login environment.
pub const DEFAULT_DOMAIN: &str = "login";

/// Default Salesforce API version.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to open a session against one org.
///
/// Password and security token are redacted in Debug output.
#[derive(Clone)]
pub struct ProbeConfig {
    pub username: String,
    pub password: String,
    /// May be empty when the org trusts the caller's IP range.
    pub security_token: String,
    /// `login`, `test`, a My Domain host, or a full Lightning URL.
    pub domain: String,
    pub api_version: String,
    /// Send the SOAP login here instead of the URL derived from `domain`.
    pub login_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("api_version", &self.api_version)
            .field("login_url", &self.login_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProbeConfig {
    /// Create a config for the production login environment.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        security_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            security_token: security_token.into(),
            domain: DEFAULT_DOMAIN.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            login_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load settings from environment variables.
    ///
    /// Required:
    /// - `SF_USERNAME` or `SALESFORCE_USERNAME`
    /// - `SF_PASSWORD` or `SALESFORCE_PASSWORD`
    ///
    /// Optional:
    /// - `SF_SECURITY_TOKEN` or `SALESFORCE_SECURITY_TOKEN` (default: empty)
    /// - `SF_DOMAIN` or `SALESFORCE_DOMAIN` (default: "login")
    /// - `SF_API_VERSION` or `SALESFORCE_API_VERSION` (default: "62.0")
    /// - `SF_LOGIN_URL` or `SALESFORCE_LOGIN_URL`
    /// - `SF_TIMEOUT_SECS` or `SALESFORCE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(&format!("SF_{name}"))
                .or_else(|| lookup(&format!("SALESFORCE_{name}")))
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| {
            var(name).ok_or_else(|| {
                Error::operation_failed(format!("Configuration error: SF_{name} is not set"))
            })
        };

        let mut config = Self::new(
            required("USERNAME")?,
            required("PASSWORD")?,
            var("SECURITY_TOKEN").unwrap_or_default(),
        );
        if let Some(domain) = var("DOMAIN") {
            config.domain = domain;
        }
        if let Some(version) = var("API_VERSION") {
            config.api_version = version;
        }
        config.login_url = var("LOGIN_URL");
        if let Some(secs) = var("TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::operation_failed(format!(
                    "Configuration error: SF_TIMEOUT_SECS must be a number of seconds, got '{secs}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Reject incomplete settings before any network call.
    pub fn validate(&self) -> Result<()> {
        let missing = |what: &str| {
            Err(Error::operation_failed(format!(
                "Configuration error: {what} is required"
            )))
        };
        if self.username.trim().is_empty() {
            return missing("username");
        }
        if self.password.is_empty() {
            return missing("password");
        }
        if self.domain.trim().is_empty() {
            return missing("domain");
        }
        if self.api_version.trim().is_empty() {
            return missing("API version");
        }
        Ok(())
    }

    /// HTTP settings shared by the login and REST clients.
    #[cfg(feature = "salesforce")]
    pub fn client_config(&self) -> volprobe_sf_client::ClientConfig {
        volprobe_sf_client::ClientConfig::builder()
            .with_timeout(self.timeout)
            .build()
    }
}
