//! Credentials trait and implementations.
//!
//! All credential types implement custom Debug to redact sensitive data.

use crate::error::{Error, ErrorKind, Result};

/// Trait for an authenticated Salesforce session.
pub trait Credentials: Send + Sync {
    /// Get the Salesforce instance URL.
    fn instance_url(&self) -> &str;

    /// Get the session id used as bearer token.
    fn access_token(&self) -> &str;

    /// Get the API version (e.g., "62.0").
    fn api_version(&self) -> &str;
}

/// Session returned by a successful login.
///
/// The session id is redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone)]
pub struct SalesforceCredentials {
    instance_url: String,
    access_token: String,
    api_version: String,
    user_id: Option<String>,
    organization_id: Option<String>,
}

impl std::fmt::Debug for SalesforceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceCredentials")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("user_id", &self.user_id)
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

impl SalesforceCredentials {
    /// Create new credentials with the given values.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            instance_url: instance_url.into(),
            access_token: access_token.into(),
            api_version: api_version.into(),
            user_id: None,
            organization_id: None,
        }
    }

    /// Attach the user and org ids reported by the login call.
    pub fn with_identity(
        mut self,
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        self.user_id = Some(user_id.into());
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Id of the logged-in user, when the login call reported it.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Id of the org, when the login call reported it.
    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Host portion of the instance URL (`wmm.my.salesforce.com`).
    ///
    /// Falls back to the raw instance URL when it does not parse.
    pub fn instance_host(&self) -> String {
        match url::Url::parse(&self.instance_url) {
            Ok(parsed) => match (parsed.host_str(), parsed.port()) {
                (Some(host), Some(port)) => format!("{host}:{port}"),
                (Some(host), None) => host.to_string(),
                _ => self.instance_url.clone(),
            },
            Err(_) => self.instance_url.clone(),
        }
    }
}

impl Credentials for SalesforceCredentials {
    fn instance_url(&self) -> &str {
        &self.instance_url
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Username, password and security token for the SOAP login call.
///
/// Password and token are redacted in Debug output.
#[derive(Clone)]
pub struct PasswordCredentials {
    username: String,
    password: String,
    security_token: String,
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .finish()
    }
}

impl PasswordCredentials {
    /// Create a new credential triple. The security token may be empty for
    /// orgs that trust the caller's IP range.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        security_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            security_token: security_token.into(),
        }
    }

    /// Login username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password with the security token appended, as the partner API expects.
    pub(crate) fn password_with_token(&self) -> String {
        format!("{}{}", self.password, self.security_token)
    }

    /// Reject obviously incomplete credentials before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "username is required".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "password is required".to_string(),
            )));
        }
        Ok(())
    }
}
