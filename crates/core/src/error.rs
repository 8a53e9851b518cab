use crate::lifecycle::{CommandKind, ProjectStatus};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Rejection of a lifecycle command or schedule edit.
///
/// Every variant carries enough context for a caller to show a field-level
/// message. A command that fails with any of these has not touched the
/// project.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Cannot {command} a project that is {status}")]
    IllegalTransition {
        command: CommandKind,
        status: ProjectStatus,
    },
}

impl LifecycleError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => Some(*field),
            Self::IllegalTransition { .. } => None,
        }
    }
}
