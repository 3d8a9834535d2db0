//! # volprobe-sf-auth
//!
//! Username/password authentication against a Salesforce org.
//!
//! ## Security
//!
//! - Passwords, security tokens and session ids are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages never include credential values
//!
//! ## Login flow
//!
//! 1. [`normalize_domain`] reduces user input such as
//!    `https://wmm.lightning.force.com/` to a bare host.
//! 2. [`LoginTarget::from_domain`] picks the authentication mode: a custom
//!    Lightning host is an explicit instance URL whose login goes to the
//!    matching `my.salesforce.com` host, anything else is a named login
//!    environment (`login`, `test`, ...).
//! 3. [`SoapLogin::login`] performs the SOAP partner `login` call and returns
//!    [`SalesforceCredentials`] holding the session.
//!
//! ## Example
//!
//! ```rust,ignore
//! use volprobe_sf_auth::{LoginTarget, PasswordCredentials, SoapLogin};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), volprobe_sf_auth::Error> {
//!     let target = LoginTarget::from_domain("https://wmm.lightning.force.com/")?;
//!     let password = PasswordCredentials::new(username, password, security_token);
//!
//!     let session = SoapLogin::new("62.0")?.login(&target, &password).await?;
//!     println!("connected to {}", session.instance_host());
//!     Ok(())
//! }
//! ```

mod credentials;
mod domain;
mod error;
mod login;

pub use credentials::{Credentials, PasswordCredentials, SalesforceCredentials};
pub use domain::{normalize_domain, LoginTarget};
pub use error::{Error, ErrorKind, Result};
pub use login::SoapLogin;

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";

/// Hosts containing this marker are custom Lightning domains.
pub const LIGHTNING_DOMAIN_MARKER: &str = "lightning.force.com";

/// API counterpart of [`LIGHTNING_DOMAIN_MARKER`] for the same org.
pub const MY_DOMAIN_API_MARKER: &str = "my.salesforce.com";
