//! Email relay error types.

/// Errors that can occur while handing a contact record to the relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Service, template or public key missing
    #[error("Email relay is not configured correctly, check the relay settings")]
    NotConfigured,

    /// Name, email or message missing from the record
    #[error("All fields are required")]
    MissingFields,

    /// Sender address rejected by the email rule
    #[error("Invalid email format")]
    InvalidEmail,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Relay answered with a non-success status
    #[error("Relay error (status {status}): {message}")]
    Status { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display() {
        let error = RelayError::NotConfigured;
        assert!(error.to_string().contains("not configured"));

        let error = RelayError::MissingFields;
        assert_eq!(error.to_string(), "All fields are required");

        let error = RelayError::InvalidEmail;
        assert_eq!(error.to_string(), "Invalid email format");
    }

    #[test]
    fn test_relay_error_status() {
        let error = RelayError::Status {
            status: 400,
            message: "The template ID is invalid".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("400"));
        assert!(error_str.contains("template ID"));
    }
}
