use std::sync::Arc;

use models::{Entity, EntityKind, Quiz, Team, User};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::{
    errors::ServiceError,
    integrity,
    storage::{Collections, DocumentStore},
};

/// Process-wide owner of the user, team and quiz collections.
///
/// Reads share the lock. Each mutation holds the write lock through
/// validation, the in-memory change and the document save, so mutations
/// never interleave. A failed save does not undo the in-memory change: the
/// request still succeeds and the document catches up on the next good save.
pub struct Registry {
    state: RwLock<Collections>,
    store: Arc<dyn DocumentStore>,
}

impl Registry {
    /// Load the persisted document. Any load failure (missing file, bad
    /// JSON, I/O error) is logged and the registry starts empty.
    pub async fn open(store: Arc<dyn DocumentStore>) -> Arc<Self> {
        let state = match store.load().await {
            Ok(c) => {
                info!(
                    event = "document_loaded",
                    users = c.users.len(),
                    teams = c.teams.len(),
                    quizzes = c.quizzes.len(),
                    "registry loaded"
                );
                c
            }
            Err(e) if e.is_missing() => {
                info!(event = "document_missing", error = %e, "starting with empty collections");
                Collections::default()
            }
            Err(e) => {
                warn!(event = "document_load_failed", error = %e, "starting with empty collections");
                Collections::default()
            }
        };
        Arc::new(Self { state: RwLock::new(state), store })
    }

    /// Write the current state out. Used by the shutdown hook.
    pub async fn flush(&self) -> Result<(), ServiceError> {
        let state = self.state.read().await;
        self.store.save(&*state).await?;
        Ok(())
    }

    pub async fn snapshot(&self) -> Collections {
        self.state.read().await.clone()
    }

    pub async fn user(&self, id: &str) -> Result<User, ServiceError> {
        let state = self.state.read().await;
        state.users.get(id).cloned().ok_or_else(|| ServiceError::not_found(EntityKind::User, id))
    }

    pub async fn users(&self) -> Vec<User> {
        self.state.read().await.users.list().to_vec()
    }

    pub async fn create_user(&self, user: User) -> Result<(), ServiceError> {
        user.validate()?;
        let id = user.id.clone();
        self.update(EntityKind::User, &id, "created", |c| c.users.insert(user)).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<User, ServiceError> {
        self.update(EntityKind::User, id, "deleted", |c| c.users.remove(id)).await
    }

    pub async fn team(&self, id: &str) -> Result<Team, ServiceError> {
        let state = self.state.read().await;
        state.teams.get(id).cloned().ok_or_else(|| ServiceError::not_found(EntityKind::Team, id))
    }

    pub async fn teams(&self) -> Vec<Team> {
        self.state.read().await.teams.list().to_vec()
    }

    pub async fn create_team(&self, team: Team) -> Result<(), ServiceError> {
        team.validate()?;
        let id = team.id.clone();
        self.update(EntityKind::Team, &id, "created", |c| {
            integrity::validate_team_creation(c, &team.id, &team.creator_id, &team.user_list, team.quiz_ref())?;
            c.teams.insert(team)
        })
        .await
    }

    pub async fn delete_team(&self, id: &str) -> Result<Team, ServiceError> {
        self.update(EntityKind::Team, id, "deleted", |c| c.teams.remove(id)).await
    }

    pub async fn quiz(&self, id: &str) -> Result<Quiz, ServiceError> {
        let state = self.state.read().await;
        state.quizzes.get(id).cloned().ok_or_else(|| ServiceError::not_found(EntityKind::Quiz, id))
    }

    pub async fn quizzes(&self) -> Vec<Quiz> {
        self.state.read().await.quizzes.list().to_vec()
    }

    pub async fn create_quiz(&self, quiz: Quiz) -> Result<(), ServiceError> {
        quiz.validate()?;
        let id = quiz.id.clone();
        self.update(EntityKind::Quiz, &id, "created", |c| {
            integrity::validate_quiz_creation(c, &quiz.id, &quiz.team_list)?;
            c.quizzes.insert(quiz)
        })
        .await
    }

    pub async fn delete_quiz(&self, id: &str) -> Result<Quiz, ServiceError> {
        self.update(EntityKind::Quiz, id, "deleted", |c| c.quizzes.remove(id)).await
    }

    /// Apply one mutation and persist the whole document.
    async fn update<T, F>(&self, kind: EntityKind, id: &str, action: &'static str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Collections) -> Result<T, ServiceError>,
    {
        let mut state = self.state.write().await;
        let out = f(&mut *state)?;
        info!(event = action, entity = %kind, %id, "record {action}");
        if let Err(e) = self.store.save(&*state).await {
            error!(event = "save_failed", entity = %kind, %id, error = %e, "persisted document is stale");
        }
        Ok(out)
    }
}
