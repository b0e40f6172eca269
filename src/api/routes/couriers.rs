//! Courier account and profile endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Submission};
use crate::domain::courier::CourierProfile;
use crate::domain::forms::courier::CourierAccountPrefill;
use crate::domain::user::User;

pub fn create_couriers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_courier))
        .route("/available", get(list_available))
        .route("/{id}/account", get(account_prefill).put(update_account))
        .route("/{id}/profile", get(get_profile).put(update_profile))
}

async fn create_courier(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.courier_service.create(&submission).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Edit-form initial values, with the stored phone decomposed into
/// country code and local number
async fn account_prefill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourierAccountPrefill>, ApiError> {
    let prefill = state.courier_service.account_prefill(id).await?;

    Ok(Json(prefill))
}

async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Submission(submission): Submission,
) -> Result<Json<User>, ApiError> {
    let user = state.courier_service.update_account(id, &submission).await?;

    Ok(Json(user))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourierProfile>, ApiError> {
    let profile = state
        .courier_service
        .profile(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Courier profile '{}' not found", id)))?;

    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Submission(submission): Submission,
) -> Result<Json<CourierProfile>, ApiError> {
    let profile = state.courier_service.update_profile(id, &submission).await?;

    Ok(Json(profile))
}

async fn list_available(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourierProfile>>, ApiError> {
    let profiles = state.courier_service.list_available().await?;

    Ok(Json(profiles))
}
