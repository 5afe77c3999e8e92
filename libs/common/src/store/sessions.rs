//! Session repository for bearer tokens

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rand::distributions::{Alphanumeric, DistString};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Session, SessionPolicy};

const TOKEN_LENGTH: usize = 48;

/// Generate an opaque session token
fn generate_token() -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), TOKEN_LENGTH)
}

/// In-memory session table keyed by token
#[derive(Debug, Clone, Default)]
pub struct SessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    policy: SessionPolicy,
}

impl SessionRepository {
    /// Create an empty session table with the given expiry policy
    pub fn new(policy: SessionPolicy) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            policy,
        }
    }

    /// Issue a new session for a user
    ///
    /// A user may hold any number of concurrent sessions.
    pub async fn create_session(&self, user_id: Uuid) -> Session {
        let issued_at = Utc::now();
        let session = Session {
            token: generate_token(),
            user_id,
            issued_at,
            expires_at: self.policy.expiry_for(issued_at),
        };

        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());

        info!(user_id = %user_id, "Created session");
        session
    }

    /// Resolve a token to its session
    ///
    /// Expired sessions are purged and reported as unknown.
    pub async fn validate_token(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(token)?;

        if session.is_expired_at(Utc::now()) {
            debug!(user_id = %session.user_id, "Session expired");
            sessions.remove(token);
            return None;
        }

        Some(session.clone())
    }

    /// Revoke a single token, returning whether it existed
    pub async fn revoke_session(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Revoke every session held by a user, returning how many were removed
    pub async fn revoke_sessions_for_user(&self, user_id: Uuid) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.user_id != user_id);
        let revoked = before - sessions.len();

        if revoked > 0 {
            info!(user_id = %user_id, revoked, "Revoked sessions");
        }
        revoked
    }
}
