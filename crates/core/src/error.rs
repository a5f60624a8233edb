//! Domain error model.

use thiserror::Error;

/// Result type used across the modeling layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (malformed attribute bags,
/// schema/entity drift, registry conflicts). Nothing here touches IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An attribute bag failed validation (unknown key, wrong type, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A props model does not line up with the entity it describes.
    #[error("invalid schema: {0}")]
    Schema(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An update tried to set a read-only field.
    #[error("field '{0}' is not writable")]
    NotWritable(String),

    /// A create supplied a field that must stay unset on new entities.
    #[error("field '{0}' must not be set on a new entity")]
    UnsetForNew(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. duplicate registration).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_writable(field: impl Into<String>) -> Self {
        Self::NotWritable(field.into())
    }

    pub fn unset_for_new(field: impl Into<String>) -> Self {
        Self::UnsetForNew(field.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
