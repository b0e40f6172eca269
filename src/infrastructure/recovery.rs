//! Password recovery tokens
//!
//! Single-use, expiring tokens handed out on recovery requests and
//! consumed by the reset form. In-memory; a real deployment would back
//! this with the same store as the repositories.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;
use uuid::Uuid;

const TOKEN_LENGTH: usize = 48;

#[derive(Debug, Clone)]
struct StoredToken {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// In-memory store of outstanding recovery tokens
#[derive(Debug)]
pub struct RecoveryTokenStore {
    tokens: Arc<RwLock<HashMap<String, StoredToken>>>,
    ttl: Duration,
}

impl RecoveryTokenStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a fresh token for a user
    pub async fn issue(&self, user_id: Uuid) -> String {
        let token = generate_token();
        let mut tokens = self.tokens.write().await;

        tokens.insert(
            token.clone(),
            StoredToken {
                user_id,
                expires_at: Utc::now() + self.ttl,
            },
        );

        token
    }

    /// Consume a token, returning its user when valid and unexpired.
    /// The token is removed either way; expired tokens cannot be retried.
    pub async fn consume(&self, token: &str) -> Option<Uuid> {
        let mut tokens = self.tokens.write().await;

        let stored = tokens.remove(token)?;

        if stored.expires_at < Utc::now() {
            return None;
        }

        Some(stored.user_id)
    }
}

impl Default for RecoveryTokenStore {
    fn default() -> Self {
        // One hour matches the usual reset-email validity window
        Self::new(60)
    }
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
