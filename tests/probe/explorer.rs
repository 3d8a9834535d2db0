use serde_json::json;
use volunteer_probe::explorer::{job_query, shift_query, JOB_OBJECT, SHIFT_OBJECT};
use volunteer_probe::explore;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::*;

const PANTRY_ID: &str = "a0B000000000001AAA";
const TUTORING_ID: &str = "a0B000000000002AAA";

async fn mount_describes(server: &MockServer) {
    mount_describe(
        server,
        JOB_OBJECT,
        json!([
            {"name": "Id", "label": "Record ID", "type": "id"},
            {"name": "OwnerId", "label": "Owner ID", "type": "reference"},
            {"name": "Name", "label": "Volunteer Job Name", "type": "string"},
            {"name": "GW_Volunteers__Campaign__c", "label": "Campaign", "type": "reference"},
            {"name": "GW_Volunteers__Display_on_Website__c", "label": "Display on Website", "type": "boolean"},
            {"name": "GW_Volunteers__Inactive__c", "label": "Inactive", "type": "boolean"}
        ]),
    )
    .await;
    mount_describe(
        server,
        SHIFT_OBJECT,
        json!([
            {"name": "Id", "label": "Record ID", "type": "id"},
            {"name": "GW_Volunteers__Start_Date_Time__c", "label": "Start Date & Time", "type": "datetime"},
            {"name": "GW_Volunteers__Duration__c", "label": "Duration", "type": "double"},
            {"name": "CreatedDate", "label": "Created Date", "type": "datetime"},
            {"name": "GW_Volunteers__Volunteer_Job__c", "label": "Volunteer Job", "type": "reference"}
        ]),
    )
    .await;
}

fn shift(id: &str, start: Option<&str>, duration: f64, total: Option<f64>, still: f64) -> serde_json::Value {
    json!({
        "attributes": {"type": "GW_Volunteers__Volunteer_Shift__c"},
        "Id": id,
        "Name": format!("S-{id}"),
        "GW_Volunteers__Start_Date_Time__c": start,
        "GW_Volunteers__Duration__c": duration,
        "GW_Volunteers__Total_Volunteers__c": total,
        "GW_Volunteers__Number_of_Volunteers_Still_Needed__c": still,
        "GW_Volunteers__Description__c": null
    })
}

#[tokio::test]
async fn test_explore_prints_fields_jobs_and_shifts() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_describes(&server).await;

    mount_query(
        &server,
        &job_query().unwrap(),
        vec![
            json!({
                "attributes": {"type": "GW_Volunteers__Volunteer_Job__c"},
                "Id": PANTRY_ID,
                "Name": "Food Pantry",
                "GW_Volunteers__Description__c": "Sort donations",
                "GW_Volunteers__Location__c": "Main St",
                "GW_Volunteers__Campaign__c": "7015g000000AAAAAAA",
                "GW_Volunteers__Skills_Needed__c": null,
                "GW_Volunteers__Display_on_Website__c": true
            }),
            json!({
                "attributes": {"type": "GW_Volunteers__Volunteer_Job__c"},
                "Id": TUTORING_ID,
                "Name": "Tutoring",
                "GW_Volunteers__Description__c": null,
                "GW_Volunteers__Location__c": null,
                "GW_Volunteers__Campaign__c": null,
                "GW_Volunteers__Skills_Needed__c": "Math;Reading",
                "GW_Volunteers__Display_on_Website__c": false
            }),
        ],
    )
    .await;

    mount_query(
        &server,
        &shift_query(PANTRY_ID).unwrap(),
        vec![
            shift("a0C000000000001AAA", Some("2026-11-02T15:00:00.000+0000"), 3.0, Some(10.0), 3.0),
            shift("a0C000000000002AAA", Some("2026-10-20T09:00:00.000+0000"), 2.5, None, 0.0),
        ],
    )
    .await;

    // More rows than asked for, one without a start: the client-side bound still holds.
    mount_query(
        &server,
        &shift_query(TUTORING_ID).unwrap(),
        vec![
            shift("a0C000000000011AAA", None, 1.0, Some(4.0), 1.0),
            shift("a0C000000000012AAA", Some("2026-12-01T17:00:00.000+0000"), 1.0, Some(4.0), 1.0),
            shift("a0C000000000013AAA", Some("2026-11-24T17:00:00.000+0000"), 1.0, Some(0.0), 0.0),
            shift("a0C000000000014AAA", Some("2026-11-17T17:00:00.000+0000"), 1.0, Some(2.0), 5.0),
            shift("a0C000000000015AAA", Some("2026-11-10T17:00:00.000+0000"), 1.0, Some(3.0), 0.0),
        ],
    )
    .await;

    let mut out = Vec::new();
    explore(&config_for(&server), &mut out).await.unwrap();

    let expected = "\
✅ Connected to Salesforce!

=== VOLUNTEER JOB FIELDS ===
Id: Record ID (id)
Name: Volunteer Job Name (string)
GW_Volunteers__Campaign__c: Campaign (reference)
GW_Volunteers__Display_on_Website__c: Display on Website (boolean)

=== VOLUNTEER SHIFT FIELDS ===
Id: Record ID (id)
GW_Volunteers__Start_Date_Time__c: Start Date & Time (datetime)
GW_Volunteers__Duration__c: Duration (double)
GW_Volunteers__Volunteer_Job__c: Volunteer Job (reference)

=== SAMPLE VOLUNTEER JOBS ===
Found 2 total jobs

Job: Food Pantry
  ID: a0B000000000001AAA
  Description: Sort donations
  Location: Main St
  Campaign: 7015g000000AAAAAAA
  Skills Needed: N/A
  Display on Website: true
  Recent Shifts: 2
    - 2026-11-02T15:00:00.000+0000 (3h) - 7/10 spots
    - 2026-10-20T09:00:00.000+0000 (2.5h) - 0/N/A spots

Job: Tutoring
  ID: a0B000000000002AAA
  Description: N/A
  Location: N/A
  Campaign: N/A
  Skills Needed: Math;Reading
  Display on Website: false
  Recent Shifts: 3
    - 2026-12-01T17:00:00.000+0000 (1h) - 3/4 spots
    - 2026-11-24T17:00:00.000+0000 (1h) - 0/0 spots
    - 2026-11-17T17:00:00.000+0000 (1h) - 0/2 spots
";

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_explore_keeps_output_written_before_failure() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/services/data/v62.0/sobjects/{JOB_OBJECT}/describe")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
            "errorCode": "NOT_FOUND",
            "message": "The requested resource does not exist"
        }])))
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let err = explore(&config_for(&server), &mut out).await.unwrap_err();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "✅ Connected to Salesforce!\n\n=== VOLUNTEER JOB FIELDS ===\n"
    );
    assert!(err.to_string().contains("NOT_FOUND"), "{err}");
}

#[tokio::test]
async fn test_explore_login_failure_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/Soap/u/62.0"))
        .respond_with(ResponseTemplate::new(500).set_body_string(INVALID_LOGIN_FAULT))
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let err = explore(&config_for(&server), &mut out).await.unwrap_err();

    assert!(out.is_empty());
    assert!(err.to_string().starts_with("Login failed: INVALID_LOGIN"));
}
