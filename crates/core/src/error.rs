use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallscopeError {
    #[error("Not a supported video URL: {url}")]
    UnsupportedUrl { url: String },

    #[error("Analysis failed: {reason}")]
    AnalysisFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, CallscopeError>;
