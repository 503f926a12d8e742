use greeting_core::AppError;
use thiserror::Error;

/// Image rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            RenderError::DecodeFailed(msg) => AppError::Decode(msg),
            RenderError::EncodeFailed(msg) => AppError::Internal(msg),
        }
    }
}
