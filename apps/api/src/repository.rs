//! User directory behind a repository trait, so handlers and the analysis
//! pipeline never depend on global state. The in-memory implementation is the
//! only backend shipped; a persistent store slots in behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

/// The user directory. Carried in `AppState` as `Arc<dyn UserRepository>`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Creates a user with the given username and password hash.
    /// Fails with `Conflict` if the username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
}

/// Process-local user directory keyed by username. Entries live for the
/// lifetime of the process.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(AppError::Conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find_returns_user() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create("alice", "hash").await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.username, "alice");
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_find_unknown_username_returns_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice", "hash").await.unwrap();

        let err = repo.create("alice", "other-hash").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice", "hash").await.unwrap();

        assert!(repo.find_by_username("Alice").await.unwrap().is_none());
        repo.create("Alice", "hash2").await.unwrap();
    }
}
