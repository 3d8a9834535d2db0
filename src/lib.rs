//! # volunteer-probe
//!
//! Diagnostic probes for orgs running Volunteers for Salesforce.
//!
//! - **test-sf-connection** normalizes the configured domain, logs in,
//!   looks up the logged-in user and prints a JSON [`ConnectionReport`].
//! - **explore-sf-fields** describes the Volunteer Job and Volunteer Shift
//!   objects, then prints up to five jobs with their three most recent shifts.
//!
//! ## Security
//!
//! - Credentials come from flags or the environment, never from source
//! - Passwords, security tokens and session ids are redacted in Debug output
//! - Logs go to stderr and skip credential parameters
//!
//! ## Crates
//!
//! - **volprobe-sf-client** - HTTP transport, error mapping, SOQL/XML escaping
//! - **volprobe-sf-auth** - Domain normalization, login target selection, SOAP login
//! - **volprobe-sf-rest** - Query, describe and the safe query builder
//!
//! The client stack sits behind the default `salesforce` feature. A build
//! without it still produces `test-sf-connection`, which then reports the
//! missing client instead of connecting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use volunteer_probe::{bootstrap, ProbeConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), volunteer_probe::Error> {
//!     let config = ProbeConfig::from_env()?;
//!     let report = bootstrap(&config).await;
//!     println!("{}", report.to_json_pretty());
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
mod error;
#[cfg(feature = "salesforce")]
pub mod explorer;
pub mod logging;
pub mod volunteers;

pub use bootstrap::{bootstrap, ConnectionReport};
pub use config::ProbeConfig;
pub use error::{Error, ErrorKind, Result};
pub use logging::init_logging;

#[cfg(feature = "salesforce")]
pub use bootstrap::{connect, Session};
#[cfg(feature = "salesforce")]
pub use explorer::{explore, Explorer, FieldSummary};

// Re-export the client crates for convenient access
#[cfg(feature = "salesforce")]
pub use volprobe_sf_auth as auth;
#[cfg(feature = "salesforce")]
pub use volprobe_sf_client as client;
#[cfg(feature = "salesforce")]
pub use volprobe_sf_rest as rest;
