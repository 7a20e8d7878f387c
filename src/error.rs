//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::relay::RelayError;
pub use crate::state::StateError;
pub use crate::validation::FormError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Email relay errors
    #[error("Email relay error: {0}")]
    Relay(#[from] RelayError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Form input errors
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    Argument(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_relay_error() {
        let app_error: AppError = RelayError::NotConfigured.into();
        assert!(matches!(app_error, AppError::Relay(_)));
        assert!(app_error.to_string().contains("Email relay error"));
    }

    #[test]
    fn test_app_error_from_state_error() {
        let state_error = StateError::SenderNotSet;
        let app_error: AppError = state_error.into();
        assert!(matches!(app_error, AppError::State(_)));
        assert!(app_error.to_string().contains("State error"));
    }

    #[test]
    fn test_app_error_from_form_error() {
        let app_error: AppError = FormError::UnknownField("phone".to_string()).into();
        assert!(matches!(app_error, AppError::Form(_)));
        assert!(app_error.to_string().contains("phone"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_terminal() {
        let error = AppError::Terminal("Terminal error".to_string());
        assert!(error.to_string().contains("Terminal error"));
    }

    #[test]
    fn test_app_error_argument() {
        let error = AppError::Argument("bad theme".to_string());
        assert_eq!(error.to_string(), "Invalid argument: bad theme");
    }
}
