//! Form-specific error types.

/// Structural errors raised when addressing a form. Validation failures are
/// never errors; they are reported through the form's error map.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Input name does not match any configured field
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_display() {
        let error = FormError::UnknownField("phone".to_string());
        assert!(error.to_string().contains("Unknown form field"));
        assert!(error.to_string().contains("phone"));
    }
}
