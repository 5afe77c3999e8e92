//! In-memory record store
//!
//! `RecordStore` owns every collection and the session table. It is cheap to
//! clone: each repository shares its data behind an `Arc`, and each
//! collection is guarded by its own `tokio::sync::RwLock`. A mutation holds
//! the write lock for its whole read-modify-write, so concurrent updates to
//! one record are last-write-wins.

mod cars;
mod reports;
mod seed;
mod sessions;
mod table;
mod users;

pub use cars::CarRepository;
pub use reports::ReportRepository;
pub use seed::load_demo_data;
pub use sessions::SessionRepository;
pub use users::UserRepository;

use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::SessionPolicy;

/// Owner of all entity collections and sessions
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub users: UserRepository,
    pub cars: CarRepository,
    pub reports: ReportRepository,
    pub sessions: SessionRepository,
}

impl RecordStore {
    /// Create an empty store
    pub fn new(policy: SessionPolicy) -> Self {
        Self {
            users: UserRepository::new(),
            cars: CarRepository::new(),
            reports: ReportRepository::new(),
            sessions: SessionRepository::new(policy),
        }
    }

    /// Create a store pre-loaded with the demo data set
    pub async fn seeded(policy: SessionPolicy) -> StoreResult<Self> {
        let store = Self::new(policy);
        load_demo_data(&store).await?;
        Ok(store)
    }

    /// Delete a user and revoke their sessions
    ///
    /// Reports filed by the user are left in place.
    pub async fn delete_user(&self, id: Uuid) -> bool {
        let removed = self.users.delete(id).await;
        if removed {
            self.sessions.revoke_sessions_for_user(id).await;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let store = RecordStore::seeded(SessionPolicy::NeverExpires)
            .await
            .expect("Failed to seed store");

        assert_eq!(store.users.get_all().await.len(), 3);
        assert_eq!(store.cars.get_all().await.len(), 3);
        assert_eq!(store.reports.get_all().await.len(), 3);

        let admin = store
            .users
            .get_by_email("admin@example.com")
            .await
            .expect("admin is seeded");
        assert_eq!(admin.password, "admin123");
        assert!(store.users.get_by_username("jane.cooper").await.is_some());
        assert!(store.cars.get_by_license_plate("ABC-123").await.is_some());
    }

    #[tokio::test]
    async fn test_delete_user_revokes_sessions_but_keeps_reports() {
        let store = RecordStore::seeded(SessionPolicy::NeverExpires)
            .await
            .expect("Failed to seed store");
        let jane = store
            .users
            .get_by_username("jane.cooper")
            .await
            .expect("jane is seeded");
        let session = store.sessions.create_session(jane.id).await;

        assert!(store.delete_user(jane.id).await);
        assert!(!store.delete_user(jane.id).await);
        assert!(store.sessions.validate_token(&session.token).await.is_none());
        assert_eq!(store.reports.get_by_user(jane.id).await.len(), 2);
    }
}
