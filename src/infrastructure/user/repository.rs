//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository, UserRole};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with users
    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        let map: HashMap<Uuid, User> = users.into_iter().map(|u| (u.id(), u)).collect();

        *futures::executor::block_on(repo.users.write()) = map;

        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username() == user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        Ok(users
            .values()
            .filter(|u| role.is_none_or(|r| u.role() == r))
            .cloned()
            .collect())
    }

    async fn record_login(&self, id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        if let Some(user) = users.get_mut(&id) {
            user.record_login();
            Ok(())
        } else {
            Err(DomainError::not_found(format!("User '{}' not found", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(username: &str, email: &str) -> User {
        User::new(username, email, "Test", "User", UserRole::Customer, "hash")
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(create_test_user("maria", "maria@example.com"))
            .await
            .unwrap();

        let by_email = repo.find_by_email("maria@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id(), user.id());

        let by_username = repo.find_by_username("maria").await.unwrap();
        assert_eq!(by_username.unwrap().id(), user.id());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("maria", "a@b.com")).await.unwrap();

        let result = repo.create(create_test_user("maria", "c@d.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("maria", "a@b.com")).await.unwrap();

        let result = repo.create(create_test_user("pedro", "a@b.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_email_exists_default() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("maria", "a@b.com")).await.unwrap();

        assert!(repo.email_exists("a@b.com").await.unwrap());
        assert!(!repo.email_exists("c@d.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_by_role() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("maria", "a@b.com")).await.unwrap();
        repo.create(User::new(
            "pedro",
            "p@b.com",
            "Pedro",
            "Soto",
            UserRole::Courier,
            "hash",
        ))
        .await
        .unwrap();

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
        assert_eq!(
            repo.list(Some(UserRole::Courier)).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_record_login() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(create_test_user("maria", "a@b.com"))
            .await
            .unwrap();

        repo.record_login(user.id()).await.unwrap();

        let stored = repo.get(user.id()).await.unwrap().unwrap();
        assert!(stored.last_login_at().is_some());
    }

    #[tokio::test]
    async fn test_with_users_seeding() {
        let repo = InMemoryUserRepository::with_users(vec![
            create_test_user("maria", "a@b.com"),
            create_test_user("pedro", "p@b.com"),
        ]);

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
    }
}
