//! SOAP partner `login` call.
//!
//! The login endpoint answers `200` with a `loginResponse` on success and
//! `500` with a SOAP fault on failure, so responses are read with
//! [`SfHttpClient::execute_raw`] and the body decides the outcome.

use tracing::{debug, info, instrument, warn};
use volprobe_sf_client::security::xml;
use volprobe_sf_client::{ClientConfig, SfHttpClient};

use crate::credentials::{PasswordCredentials, SalesforceCredentials};
use crate::domain::{soap_endpoint, LoginTarget};
use crate::error::{Error, ErrorKind, Result};

const PARTNER_NAMESPACE: &str = "urn:partner.soap.sforce.com";
const CLIENT_ID: &str = "volunteer-probe";

/// Performs username/password logins against the SOAP partner API.
#[derive(Debug, Clone)]
pub struct SoapLogin {
    http: SfHttpClient,
    api_version: String,
    login_url_override: Option<String>,
}

impl SoapLogin {
    /// Create a login client for the given API version.
    pub fn new(api_version: impl Into<String>) -> Result<Self> {
        Self::with_config(api_version, ClientConfig::default())
    }

    /// Create a login client with a custom HTTP configuration.
    pub fn with_config(api_version: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            api_version: api_version.into(),
            login_url_override: None,
        })
    }

    /// Send logins to `base` instead of the URL derived from the target.
    pub fn with_login_url(mut self, base: impl Into<String>) -> Self {
        self.login_url_override = Some(base.into());
        self
    }

    /// API version used in the SOAP endpoint path.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Full SOAP endpoint a login for `target` is posted to.
    pub fn endpoint_for(&self, target: &LoginTarget) -> String {
        match &self.login_url_override {
            Some(base) => soap_endpoint(base, &self.api_version),
            None => target.soap_login_url(&self.api_version),
        }
    }

    /// Log in and return the resulting session.
    #[instrument(skip(self, credentials), fields(target = %target, username = %credentials.username()))]
    pub async fn login(
        &self,
        target: &LoginTarget,
        credentials: &PasswordCredentials,
    ) -> Result<SalesforceCredentials> {
        credentials.validate()?;

        let endpoint = self.endpoint_for(target);
        debug!(endpoint = %endpoint, "Posting SOAP login");

        let request = self
            .http
            .post(&endpoint)
            .xml(login_envelope(credentials))
            .soap_action("login");

        let response = self.http.execute_raw(&request).await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(fault) = parse_fault(&body) {
            warn!(status, fault_code = %fault.0, "SOAP login fault");
            return Err(Error::new(ErrorKind::LoginFault {
                fault_code: fault.0,
                fault_string: fault.1,
            }));
        }

        if !(200..300).contains(&status) {
            return Err(Error::new(ErrorKind::Http(format!(
                "login endpoint returned HTTP {status}"
            ))));
        }

        let session = self.parse_login_result(&body)?;
        info!(instance = %session.instance_host(), "SOAP login succeeded");
        Ok(session)
    }

    fn parse_login_result(&self, body: &str) -> Result<SalesforceCredentials> {
        let missing = |tag: &str| {
            Error::new(ErrorKind::UnexpectedResponse(format!(
                "missing <{tag}> in login response"
            )))
        };

        let session_id = extract_element(body, "sessionId").ok_or_else(|| missing("sessionId"))?;
        let server_url = extract_element(body, "serverUrl").ok_or_else(|| missing("serverUrl"))?;
        let instance_url = instance_url_from_server_url(&server_url)?;

        let mut session = SalesforceCredentials::new(instance_url, session_id, &self.api_version);
        if let (Some(user_id), Some(org_id)) = (
            extract_element(body, "userId"),
            extract_element(body, "organizationId"),
        ) {
            session = session.with_identity(user_id, org_id);
        }
        Ok(session)
    }
}

/// Build the SOAP envelope for a partner `login` call.
fn login_envelope(credentials: &PasswordCredentials) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<env:Envelope
        xmlns:xsd="http://www.w3.org/2001/XMLSchema"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xmlns:env="http://schemas.xmlsoap.org/soap/envelope/"
        xmlns:urn="{ns}">
    <env:Header>
        <urn:CallOptions>
            <urn:client>{client}</urn:client>
            <urn:defaultNamespace>sf</urn:defaultNamespace>
        </urn:CallOptions>
    </env:Header>
    <env:Body>
        <n1:login xmlns:n1="{ns}">
            <n1:username>{username}</n1:username>
            <n1:password>{password}</n1:password>
        </n1:login>
    </env:Body>
</env:Envelope>"#,
        ns = PARTNER_NAMESPACE,
        client = CLIENT_ID,
        username = xml::escape(credentials.username()),
        password = xml::escape(&credentials.password_with_token()),
    )
}

/// Pull `(faultcode, faultstring)` out of a SOAP fault body.
fn parse_fault(body: &str) -> Option<(String, String)> {
    if !body.contains("Fault>") {
        return None;
    }
    let code = extract_element(body, "faultcode").unwrap_or_default();
    let message = extract_element(body, "faultstring")
        .or_else(|| extract_element(body, "exceptionMessage"))
        .unwrap_or_else(|| "unknown SOAP fault".to_string());
    Some((code, message))
}

/// Text of the first `<tag>` element, with or without a namespace prefix.
fn extract_element(body: &str, tag: &str) -> Option<String> {
    let start_patterns = [
        format!("<{tag}>"),
        format!("<sf:{tag}>"),
        format!("<soapenv:{tag}>"),
    ];

    for start in &start_patterns {
        if let Some(start_idx) = body.find(start.as_str()) {
            let content_start = start_idx + start.len();
            let rest = &body[content_start..];
            let end_tag = start.replacen('<', "</", 1);
            if let Some(end_idx) = rest.find(&end_tag) {
                return Some(xml::unescape(rest[..end_idx].trim()));
            }
        }
    }
    None
}

/// `https://host[:port]/services/Soap/u/62.0/00D...` -> `https://host[:port]`
fn instance_url_from_server_url(server_url: &str) -> Result<String> {
    let parsed = url::Url::parse(server_url)?;
    let host = parsed.host_str().ok_or_else(|| {
        Error::new(ErrorKind::UnexpectedResponse(format!(
            "serverUrl has no host: {server_url}"
        )))
    })?;
    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}
