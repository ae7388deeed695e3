use thiserror::Error;

/// Errors produced by the validation and lookup stages.
///
/// Exactly two kinds exist: a request that fails a validation stage, and a
/// route id that matches nothing in the collection. Both carry the final
/// human-readable message surfaced to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }
}
