//! Error types for the composite build core.
//!
//! Lookups never fail: a missing substitution or project is reported as `None`.
//! Errors only come out of registration, where malformed input or a policy
//! violation is rejected before any state changes.

use thiserror::Error;

/// Main error type for composite build registration.
#[derive(Debug, Error)]
pub enum CompositeError {
    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Module {coordinate} is already substituted by project {existing}, refusing {attempted}")]
    DuplicateSubstitution {
        coordinate: String,
        existing: String,
        attempted: String,
    },

    #[error("Registry is sealed, cannot register {coordinate}")]
    RegistrationSealed { coordinate: String },

    #[error("Substitution registry lock poisoned")]
    LockPoisoned,
}

/// Result type alias for composite build operations.
pub type Result<T> = std::result::Result<T, CompositeError>;

impl CompositeError {
    /// Create an invalid-argument error for the named input field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CompositeError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if the caller caused this error and must change its input.
    ///
    /// Retrying a caller error with the same arguments yields the same error.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CompositeError::InvalidArgument { .. }
                | CompositeError::DuplicateSubstitution { .. }
                | CompositeError::RegistrationSealed { .. }
        )
    }
}
