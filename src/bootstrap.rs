//! Connection bootstrap: normalize the domain, log in, verify the session.
//!
//! [`bootstrap`] never fails. Every outcome, including a build without the
//! Salesforce client stack, ends up in a [`ConnectionReport`].

use serde::{Deserialize, Serialize};

use crate::config::ProbeConfig;
use crate::error::{Error, ErrorKind};

#[cfg(feature = "salesforce")]
pub use self::session::{connect, verify_user, Session};

/// Message reported on a successful bootstrap.
pub const SUCCESS_MESSAGE: &str = "Successfully connected to Salesforce";

/// JSON document printed by `test-sf-connection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionReport {
    pub success: bool,
    pub message: String,
    /// Verified user record on success (`null` when no user matched).
    /// Absent on failure.
    #[serde(rename = "userInfo", default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<serde_json::Value>,
    /// Instance host of the session. Absent on failure.
    #[serde(rename = "organizationId", default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl ConnectionReport {
    pub fn connected(user: Option<serde_json::Value>, instance_host: impl Into<String>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            user_info: Some(user.unwrap_or(serde_json::Value::Null)),
            organization_id: Some(instance_host.into()),
        }
    }

    pub fn failed(err: &Error) -> Self {
        let message = match err.kind {
            ErrorKind::DependencyMissing(_) => err.to_string(),
            ErrorKind::OperationFailed(_) => format!("Connection failed: {err}"),
        };
        Self {
            success: false,
            message,
            user_info: None,
            organization_id: None,
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\n  \"success\": false,\n  \"message\": \"report serialization failed: {}\"\n}}",
                e.to_string().replace('"', "'")
            )
        })
    }
}

/// Connect, verify the user and describe the outcome.
#[cfg(feature = "salesforce")]
pub async fn bootstrap(config: &ProbeConfig) -> ConnectionReport {
    let outcome = async {
        let session = connect(config).await?;
        let user = verify_user(&session, &config.username).await?;
        Ok::<_, Error>(ConnectionReport::connected(user, session.instance_host()))
    }
    .await;

    outcome.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Bootstrap failed");
        ConnectionReport::failed(&err)
    })
}

/// Without the client stack there is nothing to connect with.
#[cfg(not(feature = "salesforce"))]
pub async fn bootstrap(config: &ProbeConfig) -> ConnectionReport {
    tracing::warn!(domain = %config.domain, "Salesforce client stack not compiled in");
    ConnectionReport::failed(&missing_client_stack())
}

/// Error reported when the binary was built without the client stack.
pub fn missing_client_stack() -> Error {
    Error::dependency_missing(
        "volunteer-probe was built without the `salesforce` feature; rebuild with `--features salesforce`",
    )
}

#[cfg(feature = "salesforce")]
mod session {
    use serde_json::Value;
    use tracing::{info, instrument};
    use volprobe_sf_auth::{LoginTarget, PasswordCredentials, SalesforceCredentials, SoapLogin};
    use volprobe_sf_rest::{QueryBuilder, SalesforceRestClient};

    use crate::config::ProbeConfig;
    use crate::error::Result;

    /// Authenticated session: login result plus a REST client bound to it.
    #[derive(Debug, Clone)]
    pub struct Session {
        credentials: SalesforceCredentials,
        rest: SalesforceRestClient,
    }

    impl Session {
        /// Host of the instance the login landed on.
        pub fn instance_host(&self) -> String {
            self.credentials.instance_host()
        }

        pub fn rest(&self) -> &SalesforceRestClient {
            &self.rest
        }
    }

    /// Normalize the domain, pick the login mode and open a session.
    #[instrument(skip(config), fields(username = %config.username, domain = %config.domain))]
    pub async fn connect(config: &ProbeConfig) -> Result<Session> {
        config.validate()?;

        let target = LoginTarget::from_domain(&config.domain)?;
        info!(target = %target, "Using domain");

        let mut login = SoapLogin::with_config(&config.api_version, config.client_config())?;
        if let Some(url) = &config.login_url {
            login = login.with_login_url(url);
        }

        let password = PasswordCredentials::new(
            &config.username,
            &config.password,
            &config.security_token,
        );
        let credentials = login.login(&target, &password).await?;
        let rest = SalesforceRestClient::from_credentials_with_config(
            &credentials,
            config.client_config(),
        )?;

        info!(instance = %credentials.instance_host(), "Connected");
        Ok(Session { credentials, rest })
    }

    /// Look up the logged-in user by username.
    ///
    /// Returns the raw record (including its `attributes`) or `None` when no
    /// user matched.
    #[instrument(skip(session))]
    pub async fn verify_user(session: &Session, username: &str) -> Result<Option<Value>> {
        let users: Vec<Value> = QueryBuilder::new("User")?
            .select(&["Id", "Name", "Email"])
            .where_eq("Username", username)?
            .limit(1)
            .execute(session.rest())
            .await?;
        Ok(users.into_iter().next())
    }
}
