use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::AppError;
use crate::services::activities_service;
use crate::web::extract::{ActivityName, ParticipantEmail};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    ActivityName(activity_name): ActivityName,
    ParticipantEmail(email): ParticipantEmail,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageResponse>, AppError> {
    match activities_service::sign_up(&directory, &activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn remove_participant_handler(
    ActivityName(activity_name): ActivityName,
    ParticipantEmail(email): ParticipantEmail,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageResponse>, AppError> {
    match activities_service::remove_participant(&directory, &activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "participant removed");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "removal rejected: {}", e);
            Err(e)
        }
    }
}
