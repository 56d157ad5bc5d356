//! Entity definitions for the three record collections.
//!
//! Records are keyed by a caller-supplied string id. Cross-collection fields
//! (`Team::user_list`, `Team::creator_id`, `Team::quiz_id`, `Quiz::team_list`)
//! hold plain ids; whether they resolve is checked by the service layer at
//! creation time only.

use std::fmt;

pub mod errors;
pub mod quiz;
pub mod team;
pub mod user;

pub use quiz::Quiz;
pub use team::Team;
pub use user::User;

/// Which collection a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Team,
    Quiz,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Team => "Team",
            EntityKind::Quiz => "Quiz",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record stored in a keyed collection.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Field-level checks that do not need other collections.
    fn validate(&self) -> Result<(), errors::ModelError> {
        validate_id(Self::KIND, self.id())
    }
}

pub fn validate_id(kind: EntityKind, id: &str) -> Result<(), errors::ModelError> {
    if id.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!(
            "{} id required",
            kind.as_str().to_lowercase()
        )));
    }
    Ok(())
}
