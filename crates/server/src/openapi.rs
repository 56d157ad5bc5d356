use utoipa::OpenApi;
use utoipa::ToSchema;

/// Schema for `common::types::Health`.
#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UserDoc {
    pub id: String,
    pub name: String,
    /// Stored and returned as plain text.
    pub password: String,
    pub isTeamLeader: Option<bool>,
}

#[derive(ToSchema)]
pub struct TeamDoc {
    pub id: String,
    pub name: String,
    pub user_list: Vec<String>,
    pub quiz_id: Option<String>,
    pub creator_id: String,
}

#[derive(ToSchema)]
pub struct QuizDoc {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub team_list: Option<Vec<String>>,
    pub location: Option<String>,
    pub theme: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::get_user,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::delete_user,
        crate::routes::teams::get_team,
        crate::routes::teams::list_teams,
        crate::routes::teams::create_team,
        crate::routes::teams::delete_team,
        crate::routes::quizzes::get_quiz,
        crate::routes::quizzes::list_quizzes,
        crate::routes::quizzes::create_quiz,
        crate::routes::quizzes::delete_quiz,
    ),
    components(schemas(HealthResponse, UserDoc, TeamDoc, QuizDoc)),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "teams"),
        (name = "quiz")
    )
)]
pub struct ApiDoc;
