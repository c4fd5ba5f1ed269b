//! Error types for the Hauler application.

use thiserror::Error;

/// A shared error type for the entire Hauler application.
///
/// This provides typed, structured error variants so front ends can branch
/// on the kind of failure (show a field hint, offer a retry, fall back to a
/// different photo source) instead of parsing messages.
#[derive(Error, Debug, Clone)]
pub enum HaulerError {
    /// Form input rejected, with the offending field
    #[error("Validation error: {field} - {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Media failure (oversized image, camera busy/unavailable, geolocation denied)
    #[error("Media error: {0}")]
    Media(String),

    /// Storage read/write failure (repository layer)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Identity provider rejection
    #[error("Auth error: {0}")]
    Auth(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HaulerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error for a named form field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a Media error
    pub fn media(message: impl Into<String>) -> Self {
        Self::Media(message.into())
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Media error
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Media(_))
    }

    /// Check if this is a Persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether retrying the same operation can reasonably succeed.
    ///
    /// Returns true for `Persistence` (and the serialization failures that
    /// surface through the same storage paths). Front ends use this to offer
    /// a retry action instead of a plain dismissal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Serialization { .. })
    }

    /// The form field a Validation error points at, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HaulerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for HaulerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for HaulerError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, HaulerError>`.
pub type Result<T> = std::result::Result<T, HaulerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_field() {
        let err = HaulerError::validation("address", "address is required");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("address"));
        assert_eq!(
            err.to_string(),
            "Validation error: address - address is required"
        );
    }

    #[test]
    fn test_only_storage_failures_are_retryable() {
        assert!(HaulerError::persistence("write failed").is_retryable());
        assert!(!HaulerError::media("image too large").is_retryable());
        assert!(!HaulerError::auth("rejected").is_retryable());
        assert!(!HaulerError::validation("phone", "phone is required").is_retryable());
    }

    #[test]
    fn test_json_errors_map_to_serialization() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let converted: HaulerError = err.into();
        assert!(matches!(converted, HaulerError::Serialization { .. }));
        assert!(converted.is_retryable());
    }
}
