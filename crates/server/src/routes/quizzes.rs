use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Quiz;

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    get, path = "/quiz/{id}", tag = "quiz",
    params(("id" = String, Path, description = "Quiz id")),
    responses(
        (status = 200, description = "Quiz record", body = crate::openapi::QuizDoc),
        (status = 404, description = "Quiz not found.")
    )
)]
pub async fn get_quiz(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Quiz>, ApiError> {
    Ok(Json(state.registry.quiz(&id).await?))
}

#[utoipa::path(get, path = "/quiz", tag = "quiz", responses((status = 200, description = "All quizzes", body = [crate::openapi::QuizDoc])))]
pub async fn list_quizzes(State(state): State<AppState>) -> Json<Vec<Quiz>> {
    Json(state.registry.quizzes().await)
}

#[utoipa::path(
    post, path = "/quiz", tag = "quiz",
    request_body = crate::openapi::QuizDoc,
    responses(
        (status = 201, description = "Quiz created."),
        (status = 400, description = "Quiz already exists, or a team id is invalid")
    )
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    Json(quiz): Json<Quiz>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.registry.create_quiz(quiz).await?;
    Ok((StatusCode::CREATED, "Quiz created."))
}

#[utoipa::path(
    delete, path = "/quiz/{id}", tag = "quiz",
    params(("id" = String, Path, description = "Quiz id")),
    responses((status = 200, description = "Quiz deleted."), (status = 404, description = "Quiz not found."))
)]
pub async fn delete_quiz(State(state): State<AppState>, Path(id): Path<String>) -> Result<&'static str, ApiError> {
    state.registry.delete_quiz(&id).await?;
    Ok("Quiz deleted.")
}
