use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ActivityNotFound | AppError::ParticipantNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
