use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// Account record. `password` is kept exactly as submitted and is returned
/// by every read; it is not hashed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub password: String,
    #[serde(rename = "isTeamLeader")]
    pub is_team_leader: bool,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }
}
