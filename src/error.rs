//! Custom error types for Purse
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Purse operations
#[derive(Error, Debug)]
pub enum PurseError {
    /// Income or expense amount was zero or negative
    #[error("Invalid amount {amount}: amount must be positive")]
    InvalidAmount { amount: Money },

    /// Budget limit was negative
    #[error("Invalid budget {limit} for category '{category}': budget cannot be negative")]
    InvalidBudget { category: String, limit: Money },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and persisted records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A transfer could not be completed; neither wallet was changed
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PurseError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount { .. } | Self::InvalidBudget { .. }
        )
    }
}

impl From<std::io::Error> for PurseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PurseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Purse operations
pub type PurseResult<T> = Result<T, PurseError>;
