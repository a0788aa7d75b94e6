//! Port infrastructure
//!
//! Each domain defines a port trait describing the operations it needs from
//! its data source; adapters (PostgreSQL, in-memory) implement those traits
//! and report failures through the unified [`PortError`] type, so callers
//! never depend on a concrete storage backend's error surface.

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// All port implementations use this type, ensuring consistent error
/// handling regardless of the backing store.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Connection error without an underlying source
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error without an underlying source
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Checks whether this error indicates a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for domain port implementations
///
/// Ports are shared across the async runtime, so every implementation must
/// be `Send + Sync`.
pub trait DomainPort: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = PortError::not_found("Member", "abc-123");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Member"));
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn test_internal_is_not_not_found() {
        assert!(!PortError::internal("boom").is_not_found());
    }
}
