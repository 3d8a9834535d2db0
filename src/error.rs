//! Error types for the probes.
//!
//! Only two outcomes reach the binaries: the Salesforce client stack was
//! not compiled in, or an operation against the org failed.

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for probe operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    pub fn dependency_missing(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::DependencyMissing(detail.into()))
    }

    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OperationFailed(message.into()))
    }

    /// Returns true when the Salesforce client stack is unavailable.
    pub fn is_dependency_missing(&self) -> bool {
        matches!(self.kind, ErrorKind::DependencyMissing(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The binary was built without the `salesforce` feature.
    #[error("Salesforce client not installed: {0}")]
    DependencyMissing(String),

    /// Configuration, login, query, describe or output failure.
    #[error("{0}")]
    OperationFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(
            ErrorKind::OperationFailed(format!("write failed: {err}")),
            err,
        )
    }
}

#[cfg(feature = "salesforce")]
impl From<volprobe_sf_auth::Error> for Error {
    fn from(err: volprobe_sf_auth::Error) -> Self {
        Error::with_source(ErrorKind::OperationFailed(err.to_string()), err)
    }
}

#[cfg(feature = "salesforce")]
impl From<volprobe_sf_rest::Error> for Error {
    fn from(err: volprobe_sf_rest::Error) -> Self {
        Error::with_source(ErrorKind::OperationFailed(err.to_string()), err)
    }
}

#[cfg(feature = "salesforce")]
impl From<volprobe_sf_client::Error> for Error {
    fn from(err: volprobe_sf_client::Error) -> Self {
        Error::with_source(ErrorKind::OperationFailed(err.to_string()), err)
    }
}
