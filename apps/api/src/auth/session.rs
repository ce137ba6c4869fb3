//! In-memory bearer-token sessions. Tokens are UUIDv4; entries expire after
//! the configured TTL and are pruned when an expired token is presented.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct SessionEntry {
    username: String,
    created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            ttl: Duration::hours(ttl_hours),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a fresh token for the given username.
    pub async fn create(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(
            token,
            SessionEntry {
                username: username.to_string(),
                created_at: Utc::now(),
            },
        );
        token
    }

    /// Resolves a token to the logged-in username. Expired tokens resolve to
    /// `None` and are removed.
    pub async fn resolve(&self, token: Uuid) -> Option<String> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get(&token) {
            Some(entry) if now - entry.created_at <= self.ttl => Some(entry.username.clone()),
            Some(_) => {
                sessions.remove(&token);
                None
            }
            None => None,
        }
    }

    pub async fn revoke(&self, token: Uuid) {
        self.sessions.write().await.remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_resolve() {
        let store = SessionStore::new(24);
        let token = store.create("alice").await;
        assert_eq!(store.resolve(token).await.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let store = SessionStore::new(24);
        assert!(store.resolve(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_revoked_token_resolves_to_none() {
        let store = SessionStore::new(24);
        let token = store.create("alice").await;
        store.revoke(token).await;
        assert!(store.resolve(token).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_token_is_pruned() {
        let store = SessionStore::new(0);
        let token = store.create("alice").await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(store.resolve(token).await.is_none());
        // A second resolve sees no entry at all
        assert!(store.resolve(token).await.is_none());
    }

    #[tokio::test]
    async fn test_tokens_are_distinct_per_login() {
        let store = SessionStore::new(24);
        let a = store.create("alice").await;
        let b = store.create("alice").await;
        assert_ne!(a, b);
    }
}
