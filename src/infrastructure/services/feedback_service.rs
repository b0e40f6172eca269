//! Feedback service: complaints and product reviews

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::complaint::{Complaint, ComplaintRepository};
use crate::domain::forms::{complaint, review, FormError, RawSubmission};
use crate::domain::product::ProductRepository;
use crate::domain::review::{Review, ReviewRepository};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct FeedbackService {
    complaints: Arc<dyn ComplaintRepository>,
    reviews: Arc<dyn ReviewRepository>,
    products: Arc<dyn ProductRepository>,
}

impl FeedbackService {
    pub fn new(
        complaints: Arc<dyn ComplaintRepository>,
        reviews: Arc<dyn ReviewRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            complaints,
            reviews,
            products,
        }
    }

    pub async fn submit_complaint(
        &self,
        user_id: Uuid,
        submission: &RawSubmission,
    ) -> Result<Complaint, FormError> {
        let record = complaint::validate(submission)?;

        let complaint = self
            .complaints
            .create(Complaint::new(user_id, record.reason, record.description))
            .await?;
        info!(complaint_id = %complaint.id(), "Filed complaint");

        Ok(complaint)
    }

    pub async fn complaints_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError> {
        self.complaints.list_for_user(user_id).await
    }

    /// Submit or revise a review; a user keeps a single review per product
    pub async fn submit_review(
        &self,
        product_id: Uuid,
        user_id: Uuid,
        submission: &RawSubmission,
    ) -> Result<Review, FormError> {
        if self.products.get(product_id).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "Product '{}' not found",
                product_id
            ))
            .into());
        }

        let record = review::validate(submission)?;

        let review = match self
            .reviews
            .find_by_product_and_user(product_id, user_id)
            .await?
        {
            Some(mut existing) => {
                existing.apply(record.rating, record.comment);
                self.reviews.update(&existing).await?
            }
            None => {
                self.reviews
                    .create(Review::new(product_id, user_id, record.rating, record.comment))
                    .await?
            }
        };

        Ok(review)
    }

    pub async fn reviews_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, DomainError> {
        self.reviews.list_for_product(product_id).await
    }
}
