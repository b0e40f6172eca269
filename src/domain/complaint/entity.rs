//! Complaint entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reason choices for a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintReason {
    LateDelivery,
    WrongItems,
    DamagedProduct,
    MissingItems,
    Other,
}

impl ComplaintReason {
    pub const CHOICES: &'static [&'static str] = &[
        "late_delivery",
        "wrong_items",
        "damaged_product",
        "missing_items",
        "other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LateDelivery => "late_delivery",
            Self::WrongItems => "wrong_items",
            Self::DamagedProduct => "damaged_product",
            Self::MissingItems => "missing_items",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "late_delivery" => Some(Self::LateDelivery),
            "wrong_items" => Some(Self::WrongItems),
            "damaged_product" => Some(Self::DamagedProduct),
            "missing_items" => Some(Self::MissingItems),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Customer complaint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    id: Uuid,
    user_id: Uuid,
    reason: ComplaintReason,
    description: String,
    created_at: DateTime<Utc>,
}

impl Complaint {
    pub fn new(user_id: Uuid, reason: ComplaintReason, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            reason,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn reason(&self) -> ComplaintReason {
        self.reason
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
