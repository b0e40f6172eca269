//! Account profile endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Submission};
use crate::domain::complaint::Complaint;
use crate::domain::user::User;

pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/profile", get(get_profile).put(update_profile))
        .route("/{id}/complaints", get(list_complaints))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .account_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", id)))?;

    Ok(Json(user))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Submission(submission): Submission,
) -> Result<Json<User>, ApiError> {
    let user = state.account_service.update_profile(id, &submission).await?;

    Ok(Json(user))
}

async fn list_complaints(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let complaints = state.feedback_service.complaints_for_user(id).await?;

    Ok(Json(complaints))
}
