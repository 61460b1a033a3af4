//! Error types for the resource handlers
//!
//! This module defines all error types used throughout the workspace.

use thiserror::Error;

/// Result type alias for handler and client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for resource handlers and controller clients
#[derive(Error, Debug)]
pub enum Error {
    /// The remote record does not exist
    ///
    /// Clients return this as a sentinel. Handlers treat it as absence on
    /// read, never as a failure.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The resource identifier belongs to a different controller
    #[error(
        "Identifier mismatch: resource ID '{id}' does not match controller ID '{expected}', please re-import with the correct ID"
    )]
    IdentityMismatch {
        /// Identifier held in the declarative state
        id: String,
        /// Identifier derived from the current controller address
        expected: String,
    },

    /// A create/update/delete call against the controller failed
    #[error("Failed to {operation}: {message}")]
    RemoteOperation {
        /// The action that failed (e.g. "enable private OOB")
        operation: String,
        /// Underlying client error
        message: String,
    },

    /// Reading remote state failed for a reason other than absence
    #[error("Couldn't read {resource}: {message}")]
    Read {
        /// Resource context (resource type and key)
        resource: String,
        /// Underlying client error
        message: String,
    },

    /// Raw controller API failure, as reported by a client
    #[error("Controller error: {0}")]
    Controller(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not supported by this resource type
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an identity mismatch error
    pub fn identity_mismatch(id: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::IdentityMismatch {
            id: id.into(),
            expected: expected.into(),
        }
    }

    /// Wrap a failed remote call with the action that was attempted
    pub fn remote(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::RemoteOperation {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a failed read with the resource it was reading
    pub fn read(resource: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Read {
            resource: resource.into(),
            message: err.to_string(),
        }
    }

    /// Create a controller API error
    pub fn controller(msg: impl Into<String>) -> Self {
        Self::Controller(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unsupported operation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this is the client's "not found" sentinel
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
