use models::{errors::ModelError, EntityKind};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ModelError),
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },
    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: EntityKind, id: String },
    #[error("creator {0} not found")]
    CreatorNotFound(String),
    #[error("user reference {0} is invalid")]
    InvalidUserReference(String),
    #[error("quiz {0} not found")]
    QuizNotFound(String),
    #[error("team reference {0} is invalid")]
    InvalidTeamReference(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn not_found(kind: EntityKind, id: &str) -> Self {
        Self::NotFound { kind, id: id.to_string() }
    }

    pub fn already_exists(kind: EntityKind, id: &str) -> Self {
        Self::AlreadyExists { kind, id: id.to_string() }
    }
}
