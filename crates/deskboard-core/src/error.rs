//! Error types for deskboard-core
//!
//! The error surface is intentionally small: everything here is a local
//! validation failure handled at the point of occurrence and surfaced as a
//! notification, never propagated to a global boundary.

use crate::collection::RecordId;
use thiserror::Error;

/// Core error type for deskboard operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: RecordId },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True for errors the user fixes by correcting form input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
