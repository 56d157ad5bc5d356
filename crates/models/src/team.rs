use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub user_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    pub creator_id: String,
}

impl Team {
    /// The referenced quiz, treating an empty string the same as no quiz.
    pub fn quiz_ref(&self) -> Option<&str> {
        self.quiz_id.as_deref().filter(|q| !q.is_empty())
    }
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_quiz_id_is_no_reference() -> anyhow::Result<()> {
        let team: Team = serde_json::from_str(
            r#"{"id":"t1","name":"A","user_list":[],"quiz_id":"","creator_id":"u1"}"#,
        )?;
        assert_eq!(team.quiz_ref(), None);

        let team: Team =
            serde_json::from_str(r#"{"id":"t1","name":"A","user_list":[],"creator_id":"u1"}"#)?;
        assert_eq!(team.quiz_id, None);
        assert!(serde_json::to_value(&team)?.get("quiz_id").is_none());

        let bare: Team = serde_json::from_str(r#"{"id":"t1"}"#)?;
        assert!(bare.user_list.is_empty());
        assert_eq!(bare.creator_id, "");
        Ok(())
    }
}
