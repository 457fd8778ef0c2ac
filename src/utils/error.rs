use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO-fel: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialiseringsfel: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Hittades inte: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
