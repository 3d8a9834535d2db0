//! # volprobe-sf-rest
//!
//! Salesforce REST API calls used by the volunteer probes.
//!
//! ## Features
//!
//! - **SOQL Query** - Execute bounded queries and read the first page
//! - **Describe** - Get object and field metadata
//! - **Query builder** - Compose SOQL with escaped literals and checked names
//!
//! ## Example
//!
//! ```rust,ignore
//! use volprobe_sf_rest::{QueryBuilder, SalesforceRestClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), volprobe_sf_rest::Error> {
//!     let client = SalesforceRestClient::new(
//!         "https://wmm.my.salesforce.com",
//!         "session_id_here",
//!     )?;
//!
//!     let describe = client.describe_sobject("GW_Volunteers__Volunteer_Job__c").await?;
//!     for field in &describe.fields {
//!         println!("{}: {} ({})", field.name, field.label, field.field_type);
//!     }
//!
//!     let jobs: Vec<serde_json::Value> = QueryBuilder::new("GW_Volunteers__Volunteer_Job__c")?
//!         .select(&["Id", "Name"])
//!         .limit(5)
//!         .execute(&client)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod query;
mod query_builder;

// Main client
pub use client::SalesforceRestClient;

// Describe types
pub use describe::{DescribeSObjectResult, FieldDescribe};

// Error types
pub use error::{Error, ErrorKind, Result};

// Query types
pub use query::QueryResult;

// Query builder (safe by default)
pub use query_builder::QueryBuilder;

// Re-export sf-client types that users might need
pub use volprobe_sf_client::{ClientConfig, ClientConfigBuilder};
