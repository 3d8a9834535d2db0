//! Error types for volprobe-sf-rest.

/// Result type alias for sf-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Salesforce error code such as `INVALID_FIELD`, when there is one.
    pub fn error_code(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Salesforce { error_code, .. } => Some(error_code),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),

    #[error("Salesforce error: {error_code} - {message}")]
    Salesforce { error_code: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl From<volprobe_sf_client::Error> for Error {
    fn from(err: volprobe_sf_client::Error) -> Self {
        let kind = match &err.kind {
            volprobe_sf_client::ErrorKind::SalesforceApi {
                error_code,
                message,
                ..
            } => ErrorKind::Salesforce {
                error_code: error_code.clone(),
                message: message.clone(),
            },
            _ => ErrorKind::Client(err.to_string()),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}
