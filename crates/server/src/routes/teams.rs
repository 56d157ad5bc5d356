use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Team;

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    get, path = "/teams/{id}", tag = "teams",
    params(("id" = String, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team record", body = crate::openapi::TeamDoc),
        (status = 404, description = "Team not found.")
    )
)]
pub async fn get_team(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Team>, ApiError> {
    Ok(Json(state.registry.team(&id).await?))
}

#[utoipa::path(get, path = "/teams", tag = "teams", responses((status = 200, description = "All teams", body = [crate::openapi::TeamDoc])))]
pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<Team>> {
    Json(state.registry.teams().await)
}

/// Creator, members and quiz must all exist at creation time.
#[utoipa::path(
    post, path = "/teams", tag = "teams",
    request_body = crate::openapi::TeamDoc,
    responses(
        (status = 201, description = "Team created."),
        (status = 400, description = "Team already exists, or a user id is invalid"),
        (status = 404, description = "Creator or quiz not found")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<Team>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.registry.create_team(team).await?;
    Ok((StatusCode::CREATED, "Team created."))
}

#[utoipa::path(
    delete, path = "/teams/{id}", tag = "teams",
    params(("id" = String, Path, description = "Team id")),
    responses((status = 200, description = "Team deleted."), (status = 404, description = "Team not found."))
)]
pub async fn delete_team(State(state): State<AppState>, Path(id): Path<String>) -> Result<&'static str, ApiError> {
    state.registry.delete_team(&id).await?;
    Ok("Team deleted.")
}
