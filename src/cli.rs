//! Command-line options shared by both probes.

use std::time::Duration;

use clap::Args;

use crate::config::{ProbeConfig, DEFAULT_API_VERSION, DEFAULT_DOMAIN};

/// Org connection options. Every flag falls back to an environment variable.
///
/// Username and password are optional at parse time so that a missing value
/// surfaces as a configuration error in the probe's own report.
#[derive(Args, Clone)]
pub struct ConnectionArgs {
    /// Salesforce username
    #[arg(long, env = "SF_USERNAME", default_value = "")]
    pub username: String,

    /// Salesforce password
    #[arg(long, env = "SF_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Security token appended to the password
    #[arg(long, env = "SF_SECURITY_TOKEN", default_value = "", hide_env_values = true)]
    pub security_token: String,

    /// Login environment (`login`, `test`) or a Lightning / My Domain URL
    #[arg(long, env = "SF_DOMAIN", default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Salesforce API version
    #[arg(long, env = "SF_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Send the SOAP login to this base URL instead of the one derived from --domain
    #[arg(long, env = "SF_LOGIN_URL")]
    pub login_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SF_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("api_version", &self.api_version)
            .field("login_url", &self.login_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl From<ConnectionArgs> for ProbeConfig {
    fn from(args: ConnectionArgs) -> Self {
        let mut config = ProbeConfig::new(args.username, args.password, args.security_token)
            .with_domain(args.domain)
            .with_api_version(args.api_version)
            .with_timeout(Duration::from_secs(args.timeout_secs));
        config.login_url = args.login_url;
        config
    }
}

/// Logging options.
#[derive(Args, Debug, Clone, Copy)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
