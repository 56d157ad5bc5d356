//! Storage abstractions for the service layer.
//!
//! The whole registry is one document with three keyed collections. A
//! [`DocumentStore`] reads and writes that document wholesale; it keeps no
//! copy of its own.

use std::{io, path::PathBuf};

use async_trait::async_trait;
use models::{Quiz, Team, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod collection;
pub mod json_document_store;

pub use collection::Collection;
pub use json_document_store::JsonFileStore;

/// The three collections as persisted: top-level keys `users`, `teams`,
/// `quizzes`, each a map from id to record. Absent keys load as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default)]
    pub users: Collection<User>,
    #[serde(default)]
    pub teams: Collection<Team>,
    #[serde(default)]
    pub quizzes: Collection<Quiz>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed document {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    /// True when the document simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, StorageError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Whole-document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> Result<Collections, StorageError>;
    async fn save(&self, collections: &Collections) -> Result<(), StorageError>;
}
