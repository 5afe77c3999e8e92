//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{merge, nullable};
use crate::error::ValidationError;
use crate::validation::{
    Validate, validate_email, validate_password, validate_required, validate_username,
};

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Driver,
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// User entity
///
/// The password is kept in plain text and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub language: String,
    pub timezone: String,
    pub avatar: Option<String>,
    pub last_active: DateTime<Utc>,
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Shallow-merge a patch over this record
    pub fn apply(&mut self, patch: UserPatch) {
        merge(&mut self.username, patch.username);
        merge(&mut self.email, patch.email);
        merge(&mut self.password, patch.password);
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.bio, patch.bio);
        merge(&mut self.role, patch.role);
        merge(&mut self.status, patch.status);
        merge(&mut self.language, patch.language);
        merge(&mut self.timezone, patch.timezone);
        merge(&mut self.avatar, patch.avatar);
    }
}

/// New user creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub avatar: Option<String>,
}

impl NewUser {
    /// Build the stored record, stamping activity and join timestamps
    pub fn into_user(self, id: Uuid, now: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            bio: self.bio,
            role: self.role,
            status: self.status,
            language: self.language,
            timezone: self.timezone,
            avatar: self.avatar,
            last_active: now,
            join_date: now,
        }
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_required("firstName", &self.first_name)?;
        validate_required("lastName", &self.last_name)?;
        Ok(())
    }
}

/// User update payload accepted on the admin routes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar: Option<Option<String>>,
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(username) = &self.username {
            validate_username(username)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        if let Some(first_name) = &self.first_name {
            validate_required("firstName", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            validate_required("lastName", last_name)?;
        }
        Ok(())
    }
}

/// Self-service profile update payload
///
/// Role, status and username are not part of the allow-list, so a session
/// holder cannot change them on their own record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar: Option<Option<String>>,
}

impl Validate for ProfilePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        UserPatch::from(self.clone()).validate()
    }
}

impl From<ProfilePatch> for UserPatch {
    fn from(patch: ProfilePatch) -> Self {
        UserPatch {
            email: patch.email,
            password: patch.password,
            first_name: patch.first_name,
            last_name: patch.last_name,
            phone: patch.phone,
            bio: patch.bio,
            language: patch.language,
            timezone: patch.timezone,
            avatar: patch.avatar,
            ..UserPatch::default()
        }
    }
}
