use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub team_list: Vec<String>,
    pub location: String,
    pub theme: String,
}

impl Entity for Quiz {
    const KIND: EntityKind = EntityKind::Quiz;

    fn id(&self) -> &str {
        &self.id
    }
}
