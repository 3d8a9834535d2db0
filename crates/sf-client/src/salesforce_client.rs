//! High-level Salesforce client with typed HTTP methods.
//!
//! `SalesforceClient` pairs a session (instance URL + session id) with an
//! [`SfHttpClient`] and builds REST URLs for the configured API version.
//!
//! ## Security
//!
//! - The session id is redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::DEFAULT_API_VERSION;

/// High-level Salesforce API client.
///
/// # Example
///
/// ```rust,ignore
/// use volprobe_sf_client::SalesforceClient;
///
/// let client = SalesforceClient::new("https://wmm.my.salesforce.com", session_id)?;
///
/// let describe: serde_json::Value = client
///     .rest_get("sobjects/GW_Volunteers__Volunteer_Job__c/describe")
///     .await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a new Salesforce client with the given instance URL and session id.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new Salesforce client with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the instance URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/User")` -> `{instance}/services/data/v62.0/sobjects/User`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let full_url = self.url(url);
        let request = self.get(&full_url);
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// GET request to REST API with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json(&self.rest_url(path)).await
    }

    /// Execute a SOQL query via REST API.
    ///
    /// Only the first page is returned; callers bound their queries with `LIMIT`.
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        let encoded = urlencoding::encode(soql);
        let url = format!(
            "{}/services/data/v{}/query?q={}",
            self.instance_url, self.api_version, encoded
        );
        self.get_json(&url).await
    }
}

/// Result of a SOQL query.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    pub done: bool,

    /// URL to fetch next batch of results.
    #[serde(rename = "nextRecordsUrl")]
    pub next_records_url: Option<String>,

    /// The records.
    pub records: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_url_building() {
        let client = SalesforceClient::new("https://wmm.my.salesforce.com", "session123").unwrap();

        assert_eq!(
            client.url("/services/data"),
            "https://wmm.my.salesforce.com/services/data"
        );
        assert_eq!(
            client.url("services/data"),
            "https://wmm.my.salesforce.com/services/data"
        );
        assert_eq!(client.url("https://other.com/path"), "https://other.com/path");
        assert_eq!(
            client.rest_url("sobjects/GW_Volunteers__Volunteer_Job__c/describe"),
            "https://wmm.my.salesforce.com/services/data/v62.0/sobjects/GW_Volunteers__Volunteer_Job__c/describe"
        );
    }

    #[test]
    fn test_api_version_and_trailing_slash() {
        let client = SalesforceClient::new("https://wmm.my.salesforce.com/", "session")
            .unwrap()
            .with_api_version("59.0");

        assert_eq!(client.instance_url(), "https://wmm.my.salesforce.com");
        assert_eq!(client.api_version(), "59.0");
        assert_eq!(
            client.rest_url("query"),
            "https://wmm.my.salesforce.com/services/data/v59.0/query"
        );
    }

    #[test]
    fn test_debug_redacts_session() {
        let client = SalesforceClient::new("https://wmm.my.salesforce.com", "00Dxx!secret").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_query_encodes_soql() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/query"))
            .and(query_param("q", "SELECT Id FROM User LIMIT 1"))
            .and(header("Authorization", "Bearer session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalSize": 1,
                "done": true,
                "records": [{"Id": "005000000000001AAA"}]
            })))
            .mount(&mock_server)
            .await;

        let client = SalesforceClient::new(mock_server.uri(), "session").unwrap();
        let result: QueryResult<serde_json::Value> =
            client.query("SELECT Id FROM User LIMIT 1").await.unwrap();

        assert_eq!(result.total_size, 1);
        assert!(result.done);
        assert_eq!(result.records[0]["Id"], "005000000000001AAA");
    }
}
