use axum::http::StatusCode;

/// Failures of a call that got past input validation.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("emotion service at {endpoint} unavailable: {reason}")]
    Unavailable { endpoint: String, reason: String },

    #[error("malformed response from emotion service: {reason}")]
    MalformedResponse { reason: String },
}

impl AnalysisError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AnalysisError::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Both kinds are operational problems, not bad input.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::Unavailable { .. } | AnalysisError::MalformedResponse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
