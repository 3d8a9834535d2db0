//! Salesforce REST API client.
//!
//! This client wraps `SalesforceClient` from `sf-client` and provides the
//! typed query and describe calls the probes make.

use volprobe_sf_auth::Credentials;
use volprobe_sf_client::{ClientConfig, SalesforceClient};

use crate::error::Result;

mod describe;
mod query;

/// Salesforce REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use volprobe_sf_rest::SalesforceRestClient;
///
/// let client = SalesforceRestClient::from_credentials(&session)?;
///
/// let jobs = client
///     .query_records::<serde_json::Value>("SELECT Id, Name FROM GW_Volunteers__Volunteer_Job__c LIMIT 5")
///     .await?;
/// let describe = client.describe_sobject("GW_Volunteers__Volunteer_Shift__c").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceRestClient {
    client: SalesforceClient,
}

impl SalesforceRestClient {
    /// Create a new REST client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = SalesforceClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a REST client for an authenticated session, keeping its API version.
    pub fn from_credentials(credentials: &impl Credentials) -> Result<Self> {
        Self::from_credentials_with_config(credentials, ClientConfig::default())
    }

    /// Like [`Self::from_credentials`] with custom HTTP configuration.
    pub fn from_credentials_with_config(
        credentials: &impl Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SalesforceClient::with_config(
            credentials.instance_url(),
            credentials.access_token(),
            config,
        )?
        .with_api_version(credentials.api_version());
        Ok(Self { client })
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volprobe_sf_auth::SalesforceCredentials;

    #[test]
    fn test_client_creation() {
        let client = SalesforceRestClient::new("https://na1.salesforce.com", "token123").unwrap();

        assert_eq!(client.instance_url(), "https://na1.salesforce.com");
        assert_eq!(client.api_version(), "62.0");
    }

    #[test]
    fn test_from_credentials_keeps_session_version() {
        let session =
            SalesforceCredentials::new("https://wmm.my.salesforce.com/", "sid", "59.0");
        let client = SalesforceRestClient::from_credentials(&session).unwrap();

        assert_eq!(client.instance_url(), "https://wmm.my.salesforce.com");
        assert_eq!(client.api_version(), "59.0");
    }
}
