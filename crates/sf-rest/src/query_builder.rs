//! Safe query builder with automatic SOQL injection prevention.
//!
//! # Example
//!
//! ```rust,ignore
//! use volprobe_sf_rest::QueryBuilder;
//!
//! let shifts: Vec<serde_json::Value> = QueryBuilder::new("GW_Volunteers__Volunteer_Shift__c")?
//!     .select(&["Id", "GW_Volunteers__Start_Date_Time__c"])
//!     .where_eq("GW_Volunteers__Volunteer_Job__c", job_id)?  // Automatically escaped!
//!     .where_not_null("GW_Volunteers__Start_Date_Time__c")?
//!     .order_by("GW_Volunteers__Start_Date_Time__c", false)?
//!     .limit(3)
//!     .execute(&client)
//!     .await?;
//! ```

use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::{Error, ErrorKind, Result, SalesforceRestClient};
use volprobe_sf_client::security::soql;

/// Safe SOQL query builder with automatic injection prevention.
///
/// Generic over the result type `T` for type-safe query results.
pub struct QueryBuilder<T> {
    sobject: String,
    fields: Vec<String>,
    conditions: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u32>,
    _phantom: PhantomData<T>,
}

fn invalid_field(field: &str) -> Error {
    Error::new(ErrorKind::Salesforce {
        error_code: "INVALID_FIELD".to_string(),
        message: format!("Invalid field name: {}", field),
    })
}

impl<T: DeserializeOwned> QueryBuilder<T> {
    /// Create a new query builder for the given SObject.
    ///
    /// Validates the SObject name for safety.
    pub fn new(sobject: impl AsRef<str>) -> Result<Self> {
        let sobject = sobject.as_ref();

        if !soql::is_safe_sobject_name(sobject) {
            return Err(Error::new(ErrorKind::Salesforce {
                error_code: "INVALID_SOBJECT".to_string(),
                message: format!("Invalid SObject name: {}", sobject),
            }));
        }

        Ok(Self {
            sobject: sobject.to_string(),
            fields: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            _phantom: PhantomData,
        })
    }

    /// Select fields to retrieve.
    ///
    /// Invalid field names are silently ignored.
    pub fn select(mut self, fields: &[impl AsRef<str>]) -> Self {
        for field in fields {
            let field: &str = field.as_ref();
            if soql::is_safe_field_name(field) {
                self.fields.push(field.to_string());
            }
        }
        self
    }

    /// Add a WHERE condition with equality check.
    ///
    /// The value is escaped as a SOQL string literal.
    pub fn where_eq(mut self, field: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let field = field.as_ref();
        if !soql::is_safe_field_name(field) {
            return Err(invalid_field(field));
        }

        let escaped_value = soql::escape_string(value.as_ref());
        self.conditions
            .push(format!("{} = '{}'", field, escaped_value));
        Ok(self)
    }

    /// Add a `field != null` condition.
    pub fn where_not_null(mut self, field: impl AsRef<str>) -> Result<Self> {
        let field = field.as_ref();
        if !soql::is_safe_field_name(field) {
            return Err(invalid_field(field));
        }

        self.conditions.push(format!("{} != null", field));
        Ok(self)
    }

    /// Add ORDER BY clause.
    pub fn order_by(mut self, field: impl AsRef<str>, ascending: bool) -> Result<Self> {
        let field = field.as_ref();
        if !soql::is_safe_field_name(field) {
            return Err(invalid_field(field));
        }

        let direction = if ascending { "ASC" } else { "DESC" };
        self.order_by.push(format!("{} {}", field, direction));
        Ok(self)
    }

    /// Set LIMIT clause.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the SOQL query string.
    ///
    /// Returns an error if no fields were selected.
    pub fn build(&self) -> Result<String> {
        if self.fields.is_empty() {
            return Err(Error::new(ErrorKind::Salesforce {
                error_code: "NO_FIELDS".to_string(),
                message: "No fields selected for query".to_string(),
            }));
        }

        let mut query = format!("SELECT {} FROM {}", self.fields.join(", "), self.sobject);

        if !self.conditions.is_empty() {
            query.push_str(&format!(" WHERE {}", self.conditions.join(" AND ")));
        }

        if !self.order_by.is_empty() {
            query.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(limit) = self.limit {
            query.push_str(&format!(" LIMIT {}", limit));
        }

        Ok(query)
    }

    /// Execute the query and return the first page of records.
    pub async fn execute(self, client: &SalesforceRestClient) -> Result<Vec<T>> {
        let query = self.build()?;
        client.query_records(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_query_build() {
        let query = QueryBuilder::<serde_json::Value>::new("GW_Volunteers__Volunteer_Job__c")
            .unwrap()
            .select(&["Id", "Name", "GW_Volunteers__Location__c"])
            .limit(5)
            .build()
            .unwrap();

        assert_eq!(
            query,
            "SELECT Id, Name, GW_Volunteers__Location__c FROM GW_Volunteers__Volunteer_Job__c LIMIT 5"
        );
    }

    #[test]
    fn test_shift_query_shape() {
        let query = QueryBuilder::<serde_json::Value>::new("GW_Volunteers__Volunteer_Shift__c")
            .unwrap()
            .select(&["Id", "GW_Volunteers__Start_Date_Time__c"])
            .where_eq("GW_Volunteers__Volunteer_Job__c", "a0B000000000001AAA")
            .unwrap()
            .where_not_null("GW_Volunteers__Start_Date_Time__c")
            .unwrap()
            .order_by("GW_Volunteers__Start_Date_Time__c", false)
            .unwrap()
            .limit(3)
            .build()
            .unwrap();

        assert_eq!(
            query,
            "SELECT Id, GW_Volunteers__Start_Date_Time__c FROM GW_Volunteers__Volunteer_Shift__c \
             WHERE GW_Volunteers__Volunteer_Job__c = 'a0B000000000001AAA' \
             AND GW_Volunteers__Start_Date_Time__c != null \
             ORDER BY GW_Volunteers__Start_Date_Time__c DESC LIMIT 3"
        );
    }

    #[test]
    fn test_where_eq_escaping() {
        let query = QueryBuilder::<serde_json::Value>::new("User")
            .unwrap()
            .select(&["Id", "Name"])
            .where_eq("Username", "o'neil@example.org")
            .unwrap()
            .build()
            .unwrap();

        assert!(query.contains("Username = 'o\\'neil@example.org'"));
    }

    #[test]
    fn test_order_by_ascending() {
        let query = QueryBuilder::<serde_json::Value>::new("Account")
            .unwrap()
            .select(&["Id", "Name"])
            .order_by("Name", true)
            .unwrap()
            .build()
            .unwrap();

        assert!(query.ends_with("ORDER BY Name ASC"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(QueryBuilder::<serde_json::Value>::new("Account'; DROP TABLE--").is_err());

        let builder = QueryBuilder::<serde_json::Value>::new("Account").unwrap();
        assert!(builder.where_not_null("Name != null OR Id").is_err());
    }

    #[test]
    fn test_invalid_field_filtered() {
        let query = QueryBuilder::<serde_json::Value>::new("Account")
            .unwrap()
            .select(&["Id", "Name'; DROP TABLE--", "Industry"])
            .build()
            .unwrap();

        assert_eq!(query, "SELECT Id, Industry FROM Account");
    }

    #[test]
    fn test_no_fields() {
        let err = QueryBuilder::<serde_json::Value>::new("Account")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), Some("NO_FIELDS"));
    }
}
