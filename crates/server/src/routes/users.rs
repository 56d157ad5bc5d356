use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::User;

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User record", body = crate::openapi::UserDoc),
        (status = 404, description = "User not found.")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<User>, ApiError> {
    Ok(Json(state.registry.user(&id).await?))
}

/// Reads memory only, like the other listings; the document is loaded once at startup.
#[utoipa::path(get, path = "/users", tag = "users", responses((status = 200, description = "All users", body = [crate::openapi::UserDoc])))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.registry.users().await)
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 201, description = "User created."),
        (status = 400, description = "User already exists with the same ID.")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.registry.create_user(user).await?;
    Ok((StatusCode::CREATED, "User created."))
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses((status = 200, description = "User deleted."), (status = 404, description = "User not found."))
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<&'static str, ApiError> {
    state.registry.delete_user(&id).await?;
    Ok("User deleted.")
}
