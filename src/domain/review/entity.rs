//! Product review entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Valid rating values as form choices
pub const RATING_CHOICES: &[&str] = &["1", "2", "3", "4", "5"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: Uuid,
    product_id: Uuid,
    user_id: Uuid,
    /// 1 to 5 stars
    rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(product_id: Uuid, user_id: Uuid, rating: u8, comment: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            product_id,
            user_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn apply(&mut self, rating: u8, comment: Option<String>) {
        self.rating = rating;
        self.comment = comment;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_creation_and_edit() {
        let product_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut review = Review::new(product_id, user_id, 4, None);

        assert_eq!(review.rating(), 4);
        assert!(review.comment().is_none());

        review.apply(5, Some("Excellent, arrived hot".to_string()));
        assert_eq!(review.rating(), 5);
        assert_eq!(review.comment(), Some("Excellent, arrived hot"));
    }
}
