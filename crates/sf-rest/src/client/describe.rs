use tracing::instrument;

use volprobe_sf_client::security::soql;

use crate::describe::DescribeSObjectResult;
use crate::error::{Error, ErrorKind, Result};

impl super::SalesforceRestClient {
    /// Describe an SObject and its fields.
    #[instrument(skip(self))]
    pub async fn describe_sobject(&self, sobject: &str) -> Result<DescribeSObjectResult> {
        if !soql::is_safe_sobject_name(sobject) {
            return Err(Error::new(ErrorKind::Salesforce {
                error_code: "INVALID_SOBJECT".to_string(),
                message: "Invalid SObject name".to_string(),
            }));
        }
        let path = format!("sobjects/{}/describe", sobject);
        self.client.rest_get(&path).await.map_err(Into::into)
    }
}
