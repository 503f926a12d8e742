//! Error types module
//!
//! This module provides the unified error type used at the service boundary.
//! Each component crate owns a narrower error enum (`StorageError`, `ConfigError`,
//! `RenderError`) and converts into `AppError` so the host only has to deal with one
//! type when reporting a failed action.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like invalid input
    Debug,
    /// Warning level - for conditions the render recovers from
    Warn,
    /// Error level - for failed user actions
    Error,
}

/// Metadata describing how an error should be presented to the user
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "STORAGE_WRITE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the render can carry on without the failed piece
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// User-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Configuration file is corrupt: {0}")]
    ConfigCorrupt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(format!("Validation error: {}", err))
    }
}

/// Static metadata for each variant: (error_code, recoverable, suggested_action, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (&'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        AppError::StorageWrite(_) => (
            "STORAGE_WRITE_ERROR",
            false,
            Some("Check that the storage directory exists and is writable"),
            LogLevel::Error,
        ),
        AppError::StorageRead(_) => (
            "STORAGE_READ_ERROR",
            true,
            Some("Check permissions on the storage directory"),
            LogLevel::Warn,
        ),
        AppError::ConfigCorrupt(_) => (
            "CONFIG_CORRUPT",
            true,
            Some("Save the settings again to replace the damaged file"),
            LogLevel::Warn,
        ),
        AppError::NotFound(_) => (
            "NOT_FOUND",
            true,
            Some("Upload the image again"),
            LogLevel::Debug,
        ),
        AppError::Decode(_) => (
            "IMAGE_DECODE_ERROR",
            true,
            Some("Use a PNG or JPEG image"),
            LogLevel::Warn,
        ),
        AppError::InvalidArgument(_) => (
            "INVALID_ARGUMENT",
            true,
            Some("Choose an image size greater than zero"),
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            "INVALID_INPUT",
            false,
            Some("Check the form values and try again"),
            LogLevel::Debug,
        ),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => (
            "INTERNAL_ERROR",
            false,
            None,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error reports
    pub fn error_type(&self) -> &str {
        match self {
            AppError::StorageWrite(_) => "StorageWrite",
            AppError::StorageRead(_) => "StorageRead",
            AppError::ConfigCorrupt(_) => "ConfigCorrupt",
            AppError::NotFound(_) => "NotFound",
            AppError::Decode(_) => "Decode",
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).1
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::StorageWrite(_) => "Failed to save your settings".to_string(),
            AppError::StorageRead(_) => "Failed to read saved data".to_string(),
            AppError::ConfigCorrupt(_) => {
                "Saved settings could not be read, default settings are shown".to_string()
            }
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::Decode(_) | AppError::InvalidArgument(_) => {
                "Unable to display this image".to_string()
            }
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Something went wrong".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_storage_write() {
        let err = AppError::StorageWrite("read-only filesystem".to_string());
        assert_eq!(err.error_code(), "STORAGE_WRITE_ERROR");
        assert!(!err.is_recoverable());
        assert_eq!(err.client_message(), "Failed to save your settings");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_config_corrupt_is_recoverable() {
        let err = AppError::ConfigCorrupt("expected value at line 1".to_string());
        assert_eq!(err.error_code(), "CONFIG_CORRUPT");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_image_errors_share_client_message() {
        let decode = AppError::Decode("unsupported format".to_string());
        let invalid = AppError::InvalidArgument("target width must be positive".to_string());
        assert_eq!(decode.client_message(), "Unable to display this image");
        assert_eq!(invalid.client_message(), decode.client_message());
        assert!(decode.is_recoverable());
        assert!(invalid.is_recoverable());
    }

    #[test]
    fn test_detailed_message_includes_source() {
        let err = AppError::from(anyhow::anyhow!("disk full").context("writing config"));
        let details = err.detailed_message();
        assert!(details.contains("Internal error with source"));
        assert!(details.contains("writing config"));
        assert_eq!(err.error_type(), "Internal");
    }

    #[test]
    fn test_suggested_actions() {
        let err = AppError::NotFound("ghost.png".to_string());
        assert_eq!(err.suggested_action(), Some("Upload the image again"));

        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.suggested_action(), None);
    }
}
