use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;

use super::{Collections, DocumentStore, StorageError};

/// JSON file-backed document store.
///
/// Every save rewrites the entire file. The new content goes to a sibling
/// `.tmp` file first and is renamed over the target, so a reader sees either
/// the old document or the new one.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("data.json"));
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Collections, StorageError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|source| StorageError::Read { path: self.file_path.clone(), source })?;
        serde_json::from_slice(&bytes)
            .map_err(|source| StorageError::Parse { path: self.file_path.clone(), source })
    }

    async fn save(&self, collections: &Collections) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(collections).map_err(StorageError::Encode)?;
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Write { path: parent.to_path_buf(), source })?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, data)
            .await
            .map_err(|source| StorageError::Write { path: tmp.clone(), source })?;
        fs::rename(&tmp, &self.file_path)
            .await
            .map_err(|source| StorageError::Write { path: self.file_path.clone(), source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Quiz, Team, User};

    fn tmp_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("quizboard_store_{}", uuid::Uuid::new_v4()))
            .join("data.json")
    }

    #[tokio::test]
    async fn save_then_load_round_trips() -> anyhow::Result<()> {
        let path = tmp_file();
        let store = JsonFileStore::new(&path);

        let mut doc = Collections::default();
        doc.users.insert(User { id: "u2".into(), name: "Bob".into(), password: "b".into(), is_team_leader: true })?;
        doc.users.insert(User { id: "u1".into(), name: "Alice".into(), password: "a".into(), is_team_leader: false })?;
        doc.teams.insert(Team {
            id: "t1".into(),
            name: "A-Team".into(),
            user_list: vec!["u1".into(), "u2".into()],
            quiz_id: None,
            creator_id: "u1".into(),
        })?;
        doc.quizzes.insert(Quiz {
            id: "q1".into(),
            title: "Pub quiz".into(),
            description: "Weekly".into(),
            date: "2024-05-01".into(),
            team_list: vec!["t1".into()],
            location: "The Crown".into(),
            theme: "General".into(),
        })?;

        store.save(&doc).await?;
        let loaded = store.load().await?;
        assert_eq!(loaded, doc);
        assert!(fs::metadata(store.tmp_path()).await.is_err());

        let text = fs::read_to_string(&path).await?;
        assert!(text.starts_with("{\n  \"users\": {"));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let store = JsonFileStore::new(tmp_file());
        let err = store.load().await.unwrap_err();
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() -> anyhow::Result<()> {
        let path = tmp_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&path, b"{ not json").await?;
        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(!err.is_missing());
        Ok(())
    }

    #[tokio::test]
    async fn absent_keys_load_as_empty() -> anyhow::Result<()> {
        let path = tmp_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&path, br#"{"users":{"u1":{"id":"u1","name":"A","password":"p"}}}"#).await?;
        let doc = JsonFileStore::new(&path).load().await?;
        assert_eq!(doc.users.len(), 1);
        assert!(doc.teams.is_empty());
        assert!(doc.quizzes.is_empty());
        Ok(())
    }
}
