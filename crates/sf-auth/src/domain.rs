//! Domain normalization and login target selection.

use crate::error::{Error, ErrorKind, Result};
use crate::{LIGHTNING_DOMAIN_MARKER, MY_DOMAIN_API_MARKER};

/// Reduce a user-supplied domain or URL to a bare host.
///
/// Input carrying a URL scheme is parsed and only its network location
/// (host, plus port when present) is kept. Leftover scheme prefixes and
/// trailing slashes are then stripped.
///
/// ```rust
/// use volprobe_sf_auth::normalize_domain;
///
/// assert_eq!(
///     normalize_domain("https://wmm.lightning.force.com/").unwrap(),
///     "wmm.lightning.force.com"
/// );
/// assert_eq!(normalize_domain("test").unwrap(), "test");
/// ```
pub fn normalize_domain(raw: &str) -> Result<String> {
    let mut domain = raw.trim().to_string();

    if domain.contains("://") {
        let parsed = url::Url::parse(&domain)?;
        let host = parsed.host_str().ok_or_else(|| {
            Error::new(ErrorKind::InvalidDomain(format!(
                "no host in '{}'",
                domain
            )))
        })?;
        domain = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
    }

    let domain = domain
        .replace("https://", "")
        .replace("http://", "")
        .trim_end_matches('/')
        .to_string();

    if domain.is_empty() {
        return Err(Error::new(ErrorKind::InvalidDomain(
            "domain is empty".to_string(),
        )));
    }

    Ok(domain)
}

/// Where the SOAP login is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginTarget {
    /// Custom Lightning domain `https://{host}`.
    ///
    /// Lightning hosts do not serve the SOAP API, so the login itself goes
    /// to the org's My Domain host (`{name}.my.salesforce.com`).
    InstanceUrl(String),
    /// Named login environment such as `login` or `test`:
    /// log in against `https://{domain}.salesforce.com`.
    Domain(String),
}

impl LoginTarget {
    /// Normalize `raw` and pick the authentication mode for it.
    pub fn from_domain(raw: &str) -> Result<Self> {
        let host = normalize_domain(raw)?;
        Ok(Self::for_host(host))
    }

    /// Pick the authentication mode for an already-normalized host.
    pub fn for_host(host: impl Into<String>) -> Self {
        let host = host.into();
        if host.contains(LIGHTNING_DOMAIN_MARKER) {
            LoginTarget::InstanceUrl(format!("https://{host}"))
        } else {
            LoginTarget::Domain(host)
        }
    }

    /// Base URL of the login endpoint.
    pub fn login_url(&self) -> String {
        match self {
            LoginTarget::InstanceUrl(url) => url
                .trim_end_matches('/')
                .replacen(LIGHTNING_DOMAIN_MARKER, MY_DOMAIN_API_MARKER, 1),
            LoginTarget::Domain(domain) => format!("https://{domain}.salesforce.com"),
        }
    }

    /// SOAP partner endpoint for the given API version.
    pub fn soap_login_url(&self, api_version: &str) -> String {
        soap_endpoint(&self.login_url(), api_version)
    }
}

impl std::fmt::Display for LoginTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginTarget::InstanceUrl(url) => {
                write!(f, "instance URL {url} (login via {})", self.login_url())
            }
            LoginTarget::Domain(domain) => write!(f, "login domain '{domain}'"),
        }
    }
}

pub(crate) fn soap_endpoint(base: &str, api_version: &str) -> String {
    format!(
        "{}/services/Soap/u/{}",
        base.trim_end_matches('/'),
        api_version
    )
}
