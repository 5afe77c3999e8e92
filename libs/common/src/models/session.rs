//! Session model and expiry policy

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How long an issued session stays valid
///
/// Sessions are never refreshed. They end either through expiry under this
/// policy or through explicit revocation (logout, user deletion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPolicy {
    #[default]
    NeverExpires,
    ExpiresAfter(Duration),
}

impl SessionPolicy {
    /// Build a policy from an optional lifetime in seconds
    pub fn from_ttl_seconds(ttl_seconds: Option<u64>) -> Self {
        ttl_seconds
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(Duration::try_seconds)
            .map_or(SessionPolicy::NeverExpires, SessionPolicy::ExpiresAfter)
    }

    /// Expiry instant for a session issued at `issued_at`
    pub fn expiry_for(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            SessionPolicy::NeverExpires => None,
            SessionPolicy::ExpiresAfter(ttl) => issued_at.checked_add_signed(*ttl),
        }
    }
}

/// Session entity
///
/// Holds the user id rather than a copy of the user, so lookups through a
/// token always see the current record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
