use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid battle speed multiplier: {0} (expected 1, 2, or 3)")]
    InvalidSpeed(u8),

    #[error("Invalid engine state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
