use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntiscamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no fingerprints available")]
    NoFingerprints,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Reputation lookup failed: {0}")]
    Reputation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AntiscamError>;
