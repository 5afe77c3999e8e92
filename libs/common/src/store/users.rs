//! User repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::table::Table;
use crate::error::{EntityKind, StoreError, StoreResult, UniqueField};
use crate::models::{NewUser, User, UserPatch};

/// Users plus the username/email indices, guarded together
#[derive(Debug, Default)]
struct UserTable {
    records: Table<User>,
    by_username: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
}

impl UserTable {
    fn check_unique(&self, username: &str, email: &str, owner: Option<Uuid>) -> StoreResult<()> {
        let taken = |index: &HashMap<String, Uuid>, key: &str| {
            index.get(key).is_some_and(|id| Some(*id) != owner)
        };

        if taken(&self.by_username, username) {
            return Err(StoreError::conflict(UniqueField::Username, username));
        }
        if taken(&self.by_email, email) {
            return Err(StoreError::conflict(UniqueField::Email, email));
        }

        Ok(())
    }

    fn insert(&mut self, user: User) -> StoreResult<()> {
        self.check_unique(&user.username, &user.email, None)?;
        self.by_username.insert(user.username.clone(), user.id);
        self.by_email.insert(user.email.clone(), user.id);
        self.records.insert(user.id, user);
        Ok(())
    }

    fn replace(&mut self, previous: &User, updated: User) -> StoreResult<()> {
        self.check_unique(&updated.username, &updated.email, Some(updated.id))?;
        self.by_username.remove(&previous.username);
        self.by_email.remove(&previous.email);
        self.by_username.insert(updated.username.clone(), updated.id);
        self.by_email.insert(updated.email.clone(), updated.id);
        self.records.insert(updated.id, updated);
        Ok(())
    }

    fn remove(&mut self, id: &Uuid) -> Option<User> {
        let user = self.records.remove(id)?;
        self.by_username.remove(&user.username);
        self.by_email.remove(&user.email);
        Some(user)
    }
}

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    inner: Arc<RwLock<UserTable>>,
}

impl UserRepository {
    /// Create an empty user repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a user by ID
    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.records.get(&id).cloned()
    }

    /// Get all users in insertion order
    pub async fn get_all(&self) -> Vec<User> {
        self.inner.read().await.records.to_vec()
    }

    /// Find a user by username
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        let table = self.inner.read().await;
        let id = table.by_username.get(username)?;
        table.records.get(id).cloned()
    }

    /// Find a user by email
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let table = self.inner.read().await;
        let id = table.by_email.get(email)?;
        table.records.get(id).cloned()
    }

    /// Create a new user with a fresh ID
    pub async fn create(&self, new_user: NewUser) -> StoreResult<User> {
        let mut table = self.inner.write().await;
        let user = new_user.into_user(table.records.fresh_id(), Utc::now());
        table.insert(user.clone())?;

        info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    /// Store a fully-formed user record, keeping its ID and timestamps
    pub async fn insert(&self, user: User) -> StoreResult<User> {
        self.inner.write().await.insert(user.clone())?;
        Ok(user)
    }

    /// Apply a patch to an existing user
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> StoreResult<User> {
        let mut table = self.inner.write().await;
        let previous = table
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id))?;

        let mut updated = previous.clone();
        updated.apply(patch);
        table.replace(&previous, updated.clone())?;

        info!(user_id = %id, "Updated user");
        Ok(updated)
    }

    /// Refresh the last activity timestamp
    pub async fn touch_last_active(&self, id: Uuid) -> StoreResult<()> {
        let mut table = self.inner.write().await;
        let mut user = table
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id))?;

        user.last_active = Utc::now();
        table.records.insert(id, user);
        Ok(())
    }

    /// Delete a user, returning whether a record was removed
    pub async fn delete(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!(user_id = %id, "Deleted user");
        }
        removed
    }
}
