//! Create-time reference checks across collections.
//!
//! These only read the collections. Nothing here runs on delete: removing a
//! user, team or quiz that other records point at is always allowed and
//! leaves those references dangling.

use models::EntityKind;

use crate::{errors::ServiceError, storage::Collections};

/// Checks run in order and the first failure wins: creator, then a free
/// `team_id`, then every member of `user_list`, then `quiz_id` when one is
/// given.
pub fn validate_team_creation(
    collections: &Collections,
    team_id: &str,
    creator_id: &str,
    user_list: &[String],
    quiz_id: Option<&str>,
) -> Result<(), ServiceError> {
    if !collections.users.contains(creator_id) {
        return Err(ServiceError::CreatorNotFound(creator_id.to_string()));
    }
    if collections.teams.contains(team_id) {
        return Err(ServiceError::already_exists(EntityKind::Team, team_id));
    }
    if let Some(missing) = user_list.iter().find(|id| !collections.users.contains(id)) {
        return Err(ServiceError::InvalidUserReference(missing.clone()));
    }
    match quiz_id.filter(|q| !q.is_empty()) {
        Some(q) if !collections.quizzes.contains(q) => Err(ServiceError::QuizNotFound(q.to_string())),
        _ => Ok(()),
    }
}

/// A free `quiz_id` first, then every entry of `team_list`.
pub fn validate_quiz_creation(
    collections: &Collections,
    quiz_id: &str,
    team_list: &[String],
) -> Result<(), ServiceError> {
    if collections.quizzes.contains(quiz_id) {
        return Err(ServiceError::already_exists(EntityKind::Quiz, quiz_id));
    }
    match team_list.iter().find(|id| !collections.teams.contains(id)) {
        Some(missing) => Err(ServiceError::InvalidTeamReference(missing.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Quiz, Team, User};

    fn user(id: &str) -> User {
        User { id: id.into(), name: id.into(), password: "pw".into(), is_team_leader: false }
    }

    fn fixture() -> Collections {
        let mut c = Collections::default();
        c.users.insert(user("u1")).unwrap();
        c.users.insert(user("u2")).unwrap();
        c.teams
            .insert(Team {
                id: "t1".into(),
                name: "A-Team".into(),
                user_list: vec!["u1".into()],
                quiz_id: None,
                creator_id: "u1".into(),
            })
            .unwrap();
        c.quizzes
            .insert(Quiz {
                id: "q1".into(),
                title: "Quiz".into(),
                description: String::new(),
                date: String::new(),
                team_list: vec![],
                location: String::new(),
                theme: String::new(),
            })
            .unwrap();
        c
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_creator_wins_over_bad_members_and_quiz() {
        let c = fixture();
        let err = validate_team_creation(&c, "t9", "ghost", &ids(&["nobody"]), Some("q404")).unwrap_err();
        assert!(matches!(err, ServiceError::CreatorNotFound(ref id) if id == "ghost"));
    }

    #[test]
    fn first_unknown_member_is_reported() {
        let c = fixture();
        let err = validate_team_creation(&c, "t9", "u1", &ids(&["u2", "x", "y"]), Some("q404")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidUserReference(ref id) if id == "x"));
    }

    #[test]
    fn quiz_checked_only_when_present() {
        let c = fixture();
        let members = ids(&["u1", "u2"]);
        assert!(validate_team_creation(&c, "t9", "u1", &members, None).is_ok());
        assert!(validate_team_creation(&c, "t9", "u1", &members, Some("")).is_ok());
        assert!(validate_team_creation(&c, "t9", "u1", &members, Some("q1")).is_ok());
        let err = validate_team_creation(&c, "t9", "u1", &members, Some("q404")).unwrap_err();
        assert!(matches!(err, ServiceError::QuizNotFound(ref id) if id == "q404"));
    }

    #[test]
    fn empty_member_list_only_needs_creator() {
        let c = fixture();
        assert!(validate_team_creation(&c, "t9", "u2", &[], None).is_ok());
    }

    #[test]
    fn quiz_teams_must_exist() {
        let c = fixture();
        assert!(validate_quiz_creation(&c, "q9", &[]).is_ok());
        assert!(validate_quiz_creation(&c, "q9", &ids(&["t1"])).is_ok());
        let err = validate_quiz_creation(&c, "q9", &ids(&["t1", "T1"])).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTeamReference(ref id) if id == "T1"));
    }

    #[test]
    fn taken_team_id_reported_after_creator() {
        let c = fixture();
        let err = validate_team_creation(&c, "t1", "ghost", &[], None).unwrap_err();
        assert!(matches!(err, ServiceError::CreatorNotFound(_)));

        let err = validate_team_creation(&c, "t1", "u1", &ids(&["nobody"]), Some("q404")).unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { kind: EntityKind::Team, ref id } if id == "t1"));
    }

    #[test]
    fn taken_quiz_id_reported_before_teams() {
        let c = fixture();
        let err = validate_quiz_creation(&c, "q1", &ids(&["T1"])).unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { kind: EntityKind::Quiz, ref id } if id == "q1"));
    }
}
