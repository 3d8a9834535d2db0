use serde_json::{json, Value};
use volunteer_probe::ProbeConfig;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "ops@example.org";
pub const SESSION_ID: &str = "00Dxx0000001234!AQ0AQ.mock";
pub const ORG_ID: &str = "00Dxx0000001234EAA";

pub fn config_for(server: &MockServer) -> ProbeConfig {
    ProbeConfig::new(USERNAME, "secret", "TOKEN")
        .with_domain("https://wmm.lightning.force.com/")
        .with_login_url(server.uri())
}

/// Host the mock server's `serverUrl` points at, e.g. `127.0.0.1:53211`.
pub fn mock_host(server: &MockServer) -> String {
    server
        .uri()
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

pub fn login_success_body(server: &MockServer) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns="urn:partner.soap.sforce.com">
  <soapenv:Body>
    <loginResponse>
      <result>
        <passwordExpired>false</passwordExpired>
        <sandbox>false</sandbox>
        <serverUrl>{uri}/services/Soap/u/62.0/00Dxx0000001234</serverUrl>
        <sessionId>{session}</sessionId>
        <userId>005xx0000012345AAA</userId>
        <userInfo>
          <organizationId>{org}</organizationId>
          <userName>{user}</userName>
        </userInfo>
      </result>
    </loginResponse>
  </soapenv:Body>
</soapenv:Envelope>"#,
        uri = server.uri(),
        session = SESSION_ID,
        org = ORG_ID,
        user = USERNAME,
    )
}

pub const INVALID_LOGIN_FAULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:sf="urn:fault.partner.soap.sforce.com">
  <soapenv:Body>
    <soapenv:Fault>
      <faultcode>sf:INVALID_LOGIN</faultcode>
      <faultstring>INVALID_LOGIN: Invalid username, password, security token; or user locked out.</faultstring>
    </soapenv:Fault>
  </soapenv:Body>
</soapenv:Envelope>"#;

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/Soap/u/62.0"))
        .and(header("SOAPAction", "login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_success_body(server)))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_query(server: &MockServer, soql: &str, records: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", soql))
        .and(header("Authorization", format!("Bearer {SESSION_ID}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": records.len(),
            "done": true,
            "records": records
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_describe(server: &MockServer, sobject: &str, fields: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/services/data/v62.0/sobjects/{sobject}/describe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": sobject,
            "label": sobject,
            "custom": true,
            "fields": fields
        })))
        .expect(1)
        .mount(server)
        .await;
}
