use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::query::QueryResult;

impl super::SalesforceRestClient {
    /// Execute a SOQL query.
    ///
    /// Returns the first page of results. The probes bound every query with
    /// `LIMIT`, so no pagination is performed.
    ///
    /// # Security
    ///
    /// **IMPORTANT**: If you are including user-provided values in the WHERE clause,
    /// you MUST escape them to prevent SOQL injection attacks. Use the security utilities
    /// or [`crate::QueryBuilder`]:
    ///
    /// ```rust,ignore
    /// use volprobe_sf_client::security::soql;
    ///
    /// let safe_value = soql::escape_string(username);
    /// let query = format!("SELECT Id FROM User WHERE Username = '{}'", safe_value);
    /// ```
    #[instrument(skip(self))]
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        let result: QueryResult<T> = self.client.query(soql).await?;
        debug!(
            total_size = result.total_size,
            returned = result.records.len(),
            "Query complete"
        );
        Ok(result)
    }

    /// Execute a SOQL query and return only its records.
    pub async fn query_records<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        Ok(self.query(soql).await?.records)
    }
}

#[cfg(test)]
mod tests {
    use crate::SalesforceRestClient;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_query_sends_bearer_and_encoded_soql() {
        let server = MockServer::start().await;
        let soql = "SELECT Id, Name FROM GW_Volunteers__Volunteer_Job__c LIMIT 5";

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/query"))
            .and(query_param("q", soql))
            .and(header("Authorization", "Bearer sid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalSize": 2,
                "done": true,
                "records": [
                    {"attributes": {"type": "GW_Volunteers__Volunteer_Job__c"}, "Id": "a0B000000000001AAA", "Name": "Food Pantry"},
                    {"attributes": {"type": "GW_Volunteers__Volunteer_Job__c"}, "Id": "a0B000000000002AAA", "Name": "Tutoring"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SalesforceRestClient::new(server.uri(), "sid").unwrap();
        let result = client.query::<serde_json::Value>(soql).await.unwrap();

        assert_eq!(result.total_size, 2);
        assert!(result.done);
        assert_eq!(result.records[1]["Name"], "Tutoring");
    }

    #[tokio::test]
    async fn test_query_records_maps_salesforce_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/query"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!([{
                "errorCode": "INVALID_TYPE",
                "message": "sObject type 'GW_Volunteers__Volunteer_Job__c' is not supported."
            }])))
            .mount(&server)
            .await;

        let client = SalesforceRestClient::new(server.uri(), "sid").unwrap();
        let err = client
            .query_records::<serde_json::Value>("SELECT Id FROM GW_Volunteers__Volunteer_Job__c")
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), Some("INVALID_TYPE"));
    }
}
