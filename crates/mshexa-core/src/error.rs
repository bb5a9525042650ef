//! Error Types
//!
//! Failures surfaced by the remote document store and by local input checks.

use serde::{Deserialize, Serialize};

/// Common result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Remote store errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    Network(String),
    Permission(String),
    NotFound(String),
    Decode(String),
    Internal(String),
}

impl StoreError {
    /// Map a store error code (e.g. `permission-denied`) to a variant
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("permission-denied") | Some("unauthenticated") => StoreError::Permission(message),
            Some("not-found") => StoreError::NotFound(message),
            Some("unavailable") | Some("deadline-exceeded") => StoreError::Network(message),
            _ => StoreError::Internal(message),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {}", msg),
            StoreError::Permission(msg) => write!(f, "Permission denied: {}", msg),
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StoreError::Decode(msg) => write!(f, "Decode error: {}", msg),
            StoreError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Local input rejected before any remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    EmptyField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(_) => write!(f, "請輸入正確數值"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            StoreError::from_code(Some("permission-denied"), "no"),
            StoreError::Permission("no".to_string())
        );
        assert_eq!(
            StoreError::from_code(Some("unavailable"), "offline"),
            StoreError::Network("offline".to_string())
        );
        assert_eq!(
            StoreError::from_code(None, "boom"),
            StoreError::Internal("boom".to_string())
        );
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(ValidationError::EmptyField("soul").to_string(), "請輸入正確數值");
    }
}
