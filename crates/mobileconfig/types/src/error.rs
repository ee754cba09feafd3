//! Error types for profile construction.

use crate::FieldKind;

/// Errors that can occur while constructing a profile.
///
/// Construction is all-or-nothing: an error aborts the current call and
/// leaves no partially-built entity behind. Errors are never caught
/// internally; they surface to the caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// A supplied value failed the kind check for its declared field.
    #[error("Argument '{field}' is wrong type, should be '{expected}'.")]
    InvalidField { field: String, expected: FieldKind },
}

impl ProfileError {
    pub fn invalid_field(field: impl Into<String>, expected: FieldKind) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidField { field, .. } => field,
        }
    }
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = ProfileError::invalid_field("host", FieldKind::Text);
        assert_eq!(
            err.to_string(),
            "Argument 'host' is wrong type, should be 'text'."
        );
    }
}
