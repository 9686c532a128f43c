use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskSubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Cloud Tasks API error {code} ({status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },
}

impl TaskSubmitError {
    /// Canonical status of a remote rejection, e.g. `NOT_FOUND`
    pub fn api_status(&self) -> Option<&str> {
        match self {
            TaskSubmitError::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}
