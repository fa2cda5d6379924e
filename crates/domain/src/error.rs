//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FitbookError`] via `#[from]`.

/// Top-level error returned by every service and repository operation.
#[derive(Debug, thiserror::Error)]
pub enum FitbookError {
    /// Malformed or missing input; the caller must correct and retry.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness rule would be violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The persistence adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that fails shape or format checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be blank")]
    Blank { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid email format: {0:?}")]
    InvalidEmail(String),

    #[error("invalid {field} format {value:?}, use ISO 8601")]
    InvalidFormat { field: &'static str, value: String },

    #[error("invalid id {0:?}, it must be a number")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found (id {id})")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

/// A write would break a uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("email already in use: {0}")]
    EmailInUse(String),
}
