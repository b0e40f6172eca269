//! Registration, login and password recovery endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Submission};
use crate::domain::user::User;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/password/recover", post(recover_password))
        .route("/password/reset", post(reset_password))
}

#[derive(Debug, Serialize)]
struct RecoveryAccepted {
    status: &'static str,
}

async fn register(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.account_service.register(&submission).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<Json<User>, ApiError> {
    match state.account_service.login(&submission).await? {
        Some(user) => Ok(Json(user)),
        // One answer for unknown user and wrong password
        None => Err(ApiError::unauthorized("Invalid username or password")),
    }
}

async fn recover_password(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    // The response does not reveal whether the email is registered
    if let Some(token) = state.account_service.request_recovery(&submission).await? {
        debug!(token_len = token.len(), "Recovery token issued");
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(RecoveryAccepted { status: "accepted" }),
    ))
}

async fn reset_password(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    state.account_service.reset_password(&submission).await?;

    Ok(StatusCode::NO_CONTENT)
}
