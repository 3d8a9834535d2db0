use serde_json::{json, Value};
use volunteer_probe::{bootstrap, ProbeConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::*;

const USER_QUERY: &str =
    "SELECT Id, Name, Email FROM User WHERE Username = 'ops@example.org' LIMIT 1";

fn report_json(report: &volunteer_probe::ConnectionReport) -> Value {
    serde_json::from_str(&report.to_json_pretty()).expect("report should be valid JSON")
}

#[tokio::test]
async fn test_bootstrap_reports_user_and_instance_host() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let user = json!({
        "attributes": {"type": "User", "url": "/services/data/v62.0/sobjects/User/005xx0000012345AAA"},
        "Id": "005xx0000012345AAA",
        "Name": "Ops Team",
        "Email": "ops@example.org"
    });
    mount_query(&server, USER_QUERY, vec![user.clone()]).await;

    let report = bootstrap(&config_for(&server)).await;

    assert_eq!(
        report_json(&report),
        json!({
            "success": true,
            "message": "Successfully connected to Salesforce",
            "userInfo": user,
            "organizationId": mock_host(&server)
        })
    );
}

#[tokio::test]
async fn test_bootstrap_without_matching_user() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_query(&server, USER_QUERY, vec![]).await;

    let report = bootstrap(&config_for(&server)).await;
    let value = report_json(&report);

    assert_eq!(value["success"], true);
    assert_eq!(value["userInfo"], Value::Null);
    assert!(value.as_object().unwrap().contains_key("userInfo"));
}

#[tokio::test]
async fn test_bootstrap_escapes_username_in_user_query() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_query(
        &server,
        "SELECT Id, Name, Email FROM User WHERE Username = 'o\\'neil@example.org' LIMIT 1",
        vec![],
    )
    .await;

    let config = ProbeConfig::new("o'neil@example.org", "secret", "TOKEN")
        .with_login_url(server.uri());
    let report = bootstrap(&config).await;

    assert!(report.success, "{}", report.message);
}

#[tokio::test]
async fn test_bootstrap_invalid_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/Soap/u/62.0"))
        .respond_with(ResponseTemplate::new(500).set_body_string(INVALID_LOGIN_FAULT))
        .mount(&server)
        .await;

    let report = bootstrap(&config_for(&server)).await;

    assert_eq!(
        report_json(&report),
        json!({
            "success": false,
            "message": "Connection failed: Login failed: INVALID_LOGIN: Invalid username, password, security token; or user locked out."
        })
    );
}

#[tokio::test]
async fn test_bootstrap_incomplete_config_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ProbeConfig::new(USERNAME, "", "").with_login_url(server.uri());
    let report = bootstrap(&config).await;

    assert!(!report.success);
    assert_eq!(
        report.message,
        "Connection failed: Configuration error: password is required"
    );
}

#[tokio::test]
async fn test_bootstrap_rejects_empty_domain() {
    let config = ProbeConfig::new(USERNAME, "secret", "").with_domain("https:///");
    let report = bootstrap(&config).await;

    assert!(!report.success);
    assert!(report.message.starts_with("Connection failed: "));
}
