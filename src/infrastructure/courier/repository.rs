//! In-memory courier profile repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::courier::{CourierProfile, CourierRepository};
use crate::domain::DomainError;

/// In-memory implementation of CourierRepository
#[derive(Debug, Default)]
pub struct InMemoryCourierRepository {
    profiles: Arc<RwLock<HashMap<Uuid, CourierProfile>>>,
}

impl InMemoryCourierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourierRepository for InMemoryCourierRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<CourierProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: CourierProfile) -> Result<CourierProfile, DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id(), profile.clone());
        Ok(profile)
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles.remove(&user_id).is_some())
    }

    async fn list_available(&self) -> Result<Vec<CourierProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .filter(|p| p.is_available())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_replaces() {
        let repo = InMemoryCourierRepository::new();
        let user_id = Uuid::new_v4();

        repo.upsert(CourierProfile::new(user_id, "Moto", "ABCD12", true))
            .await
            .unwrap();
        repo.upsert(CourierProfile::new(user_id, "Bicicleta", "ABCD12", false))
            .await
            .unwrap();

        let profile = repo.get(user_id).await.unwrap().unwrap();
        assert_eq!(profile.vehicle(), "Bicicleta");
        assert!(!profile.is_available());
    }

    #[tokio::test]
    async fn test_list_available() {
        let repo = InMemoryCourierRepository::new();
        repo.upsert(CourierProfile::new(Uuid::new_v4(), "Moto", "ABCD12", true))
            .await
            .unwrap();
        repo.upsert(CourierProfile::new(Uuid::new_v4(), "Auto", "BCJR83", false))
            .await
            .unwrap();

        assert_eq!(repo.list_available().await.unwrap().len(), 1);
    }
}
