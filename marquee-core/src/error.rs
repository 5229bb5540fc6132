use marquee_model::EntityKind;
use thiserror::Error;

use crate::notify::TransportError;

/// Failure taxonomy for catalog operations.
///
/// Absence signals from the store surface here as [`CatalogError::NotFound`]
/// regardless of which collection or lookup key produced them. Nothing is
/// retried internally.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("notification transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("store error: {0}")]
    Store(String),
}

impl CatalogError {
    pub(crate) fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
