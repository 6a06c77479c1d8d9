use thiserror::Error;

use crate::model::{EventId, GuestId};

/// Result type alias using DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that crosses a backend boundary is classified into one of
/// these kinds. Each kind maps to a stable code usable by callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A referenced guest or event does not exist
    NotFound,
    /// Duplicate (guest, event) membership, or a schema checksum mismatch
    ConstraintViolation,
    /// Storage I/O or transaction failure
    BackendFailure,
    /// Filesystem failure outside the database (creating the data directory)
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::BackendFailure => "ERR_BACKEND_FAILURE",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context (operation name and the
/// entity the failure concerns) for logs and CLI output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by directory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// Guest referenced by a membership does not exist
    #[error("Guest not found: {guest_id}")]
    GuestNotFound { guest_id: GuestId },

    /// Event referenced by a membership does not exist
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: EventId },

    /// The (guest, event) pair already has a membership
    #[error("Guest {guest_id} is already a member of event {event_id}")]
    DuplicateMembership { guest_id: GuestId, event_id: EventId },
}

impl From<DirectoryError> for ExError {
    fn from(err: DirectoryError) -> Self {
        let message = err.to_string();
        match err {
            DirectoryError::GuestNotFound { guest_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(format!("guest:{}", guest_id))
                .with_message(message),
            DirectoryError::EventNotFound { event_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(format!("event:{}", event_id))
                .with_message(message),
            DirectoryError::DuplicateMembership { guest_id, event_id } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(format!("membership:{}:{}", guest_id, event_id))
                    .with_message(message)
            }
        }
    }
}
