//! Courier profile entity
//!
//! Account data (name, email, phone) lives on the `User`; this profile
//! carries the delivery-specific fields, keyed by the user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierProfile {
    user_id: Uuid,
    /// Vehicle description, e.g. "Moto Honda CB190R"
    vehicle: String,
    license_plate: String,
    /// Available for deliveries
    available: bool,
    updated_at: DateTime<Utc>,
}

impl CourierProfile {
    pub fn new(
        user_id: Uuid,
        vehicle: impl Into<String>,
        license_plate: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            user_id,
            vehicle: vehicle.into(),
            license_plate: license_plate.into(),
            available,
            updated_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn apply(
        &mut self,
        vehicle: impl Into<String>,
        license_plate: impl Into<String>,
        available: bool,
    ) {
        self.vehicle = vehicle.into();
        self.license_plate = license_plate.into();
        self.available = available;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation_and_apply() {
        let user_id = Uuid::new_v4();
        let mut profile = CourierProfile::new(user_id, "Moto Honda CB190R", "ABCD12", true);

        assert_eq!(profile.user_id(), user_id);
        assert!(profile.is_available());

        profile.apply("Bicicleta", "BCJR83", false);
        assert_eq!(profile.vehicle(), "Bicicleta");
        assert!(!profile.is_available());
    }
}
