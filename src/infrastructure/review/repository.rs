//! In-memory review repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::review::{Review, ReviewRepository};
use crate::domain::DomainError;

/// In-memory implementation of ReviewRepository
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        let duplicate = reviews.values().any(|r| {
            r.product_id() == review.product_id() && r.user_id() == review.user_id()
        });
        if duplicate {
            return Err(DomainError::conflict(
                "User has already reviewed this product",
            ));
        }

        reviews.insert(review.id(), review.clone());
        Ok(review)
    }

    async fn update(&self, review: &Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if !reviews.contains_key(&review.id()) {
            return Err(DomainError::not_found(format!(
                "Review '{}' not found",
                review.id()
            )));
        }

        reviews.insert(review.id(), review.clone());
        Ok(review.clone())
    }

    async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .filter(|r| r.product_id() == product_id)
            .cloned()
            .collect())
    }

    async fn find_by_product_and_user(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .find(|r| r.product_id() == product_id && r.user_id() == user_id)
            .cloned())
    }
}
