//! # volprobe-sf-client
//!
//! Core HTTP transport shared by the volunteer probes.
//!
//! This crate provides:
//! - A thin `reqwest` wrapper that maps Salesforce error bodies to typed errors
//! - Request building with bearer auth and SOAP (XML) bodies
//! - `SalesforceClient`, which pairs a session with REST URL building and
//!   typed JSON methods
//! - Escaping helpers for SOQL literals and SOAP payloads
//!
//! Requests are sent exactly once. There is no retry, backoff or rate-limit
//! handling: a failed call surfaces to the caller as an [`Error`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │            volprobe-sf-auth / volprobe-sf-rest              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Holds instance URL + session id + API version            │
//! │  - REST URL building, get_json, query                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Single-shot HTTP, compression, error mapping             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use volprobe_sf_client::SalesforceClient;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), volprobe_sf_client::Error> {
//!     let client = SalesforceClient::new("https://wmm.my.salesforce.com", session_id)?;
//!
//!     let users: volprobe_sf_client::QueryResult<serde_json::Value> = client
//!         .query("SELECT Id, Name FROM User LIMIT 1")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod salesforce_client;
pub mod security;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};
pub use salesforce_client::{QueryResult, SalesforceClient};

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("volunteer-probe/", env!("CARGO_PKG_VERSION"));
