//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Network channel was never attached to the state
    #[error("Network sender not set in state")]
    SenderNotSet,

    /// Network thread stopped receiving events
    #[error("Failed to dispatch network event: {0}")]
    DispatchFailed(String),

    /// Contact form rejected an input
    #[error("Form error: {0}")]
    Form(#[from] crate::validation::FormError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormError;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SenderNotSet;
        assert!(error.to_string().contains("Network sender not set"));

        let error = StateError::DispatchFailed("receiver closed".to_string());
        assert!(error.to_string().contains("Failed to dispatch"));
        assert!(error.to_string().contains("receiver closed"));
    }

    #[test]
    fn test_state_error_from_form_error() {
        let error: StateError = FormError::UnknownField("phone".to_string()).into();
        assert!(matches!(error, StateError::Form(_)));
        assert!(error.to_string().contains("phone"));
    }
}
