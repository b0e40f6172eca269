//! Complaint endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use super::products::parse_user_id;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Submission};

pub fn create_complaints_router() -> Router<AppState> {
    Router::new().route("/", post(submit_complaint))
}

async fn submit_complaint(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = parse_user_id(&submission)?;
    let complaint = state
        .feedback_service
        .submit_complaint(user_id, &submission)
        .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}
