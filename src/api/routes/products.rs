//! Product catalog and review endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Submission};
use crate::domain::product::Product;
use crate::domain::review::Review;

pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/reviews", get(list_reviews).post(submit_review))
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    active: bool,
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = if query.active {
        state.catalog_service.list_active().await?
    } else {
        state.catalog_service.list().await?
    };

    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product '{}' not found", id)))?;

    Ok(Json(product))
}

async fn create_product(
    State(state): State<AppState>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.catalog_service.create(&submission).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Submission(submission): Submission,
) -> Result<Json<Product>, ApiError> {
    let product = state.catalog_service.update(id, &submission).await?;

    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.catalog_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Product '{}' not found", id)))
    }
}

async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.feedback_service.reviews_for_product(id).await?;

    Ok(Json(reviews))
}

async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Submission(submission): Submission,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = parse_user_id(&submission)?;
    let review = state
        .feedback_service
        .submit_review(id, user_id, &submission)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Submissions carry the author in a `user_id` field until a session
/// layer exists
pub(super) fn parse_user_id(
    submission: &crate::domain::forms::RawSubmission,
) -> Result<Uuid, ApiError> {
    submission
        .trimmed("user_id")
        .parse()
        .map_err(|_| ApiError::bad_request("A valid user_id is required"))
}
