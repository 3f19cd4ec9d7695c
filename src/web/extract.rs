use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

use crate::error::AppError;

/// Activity name from the `:activity_name` path segment.
#[derive(Debug)]
pub struct ActivityName(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidRequest(e.body_text()))?;
        Ok(Self(name))
    }
}

/// The `email` query parameter. When it is repeated the last value wins.
#[derive(Debug)]
pub struct ParticipantEmail(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ParticipantEmail
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidRequest(e.body_text()))?;
        pairs
            .into_iter()
            .rev()
            .find_map(|(key, value)| (key == "email").then_some(value))
            .map(Self)
            .ok_or(AppError::MissingParameter("email"))
    }
}
