use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::EntityKind;
use service::errors::ServiceError;
use tracing::error;

/// Maps service failures onto a status code and a plain-text body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::NotFound { .. }
            | ServiceError::CreatorNotFound(_)
            | ServiceError::QuizNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AlreadyExists { .. }
            | ServiceError::InvalidUserReference(_)
            | ServiceError::InvalidTeamReference(_)
            | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.0 {
            ServiceError::NotFound { kind, .. } => format!("{kind} not found."),
            ServiceError::AlreadyExists { kind, .. } => format!("{kind} already exists with the same ID."),
            ServiceError::CreatorNotFound(_) => "Creator not found.".into(),
            ServiceError::InvalidUserReference(_) => "One or more user IDs are invalid.".into(),
            ServiceError::QuizNotFound(_) => format!("{} not found.", EntityKind::Quiz),
            ServiceError::InvalidTeamReference(_) => "One or more team IDs are invalid.".into(),
            ServiceError::Validation(e) => e.to_string(),
            ServiceError::Storage(_) => "Internal server error.".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        (status, self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_errors_map_to_expected_status() {
        let cases = [
            (ServiceError::CreatorNotFound("u".into()), StatusCode::NOT_FOUND, "Creator not found."),
            (ServiceError::QuizNotFound("q".into()), StatusCode::NOT_FOUND, "Quiz not found."),
            (ServiceError::InvalidUserReference("u".into()), StatusCode::BAD_REQUEST, "One or more user IDs are invalid."),
            (ServiceError::InvalidTeamReference("t".into()), StatusCode::BAD_REQUEST, "One or more team IDs are invalid."),
            (ServiceError::already_exists(EntityKind::Team, "t1"), StatusCode::BAD_REQUEST, "Team already exists with the same ID."),
            (ServiceError::not_found(EntityKind::User, "u1"), StatusCode::NOT_FOUND, "User not found."),
        ];
        for (err, status, msg) in cases {
            let api = ApiError(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.message(), msg);
        }
    }
}
