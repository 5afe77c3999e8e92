//! Domain models for the fleet admin console

pub mod car;
pub mod report;
pub mod session;
pub mod user;

pub use car::{Car, CarPatch, CarStatus, NewCar};
pub use report::{NewReport, Report, ReportPatch, ReportPriority, ReportStatus, ReportType};
pub use session::{Session, SessionPolicy};
pub use user::{NewUser, ProfilePatch, User, UserPatch, UserRole, UserStatus};

use serde::{Deserialize, Deserializer};

/// Deserialize a patch field that distinguishes "absent" from `null`
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, an explicit `null`
/// becomes `Some(None)` and clears the stored value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional string, treating blank input as absent
///
/// Forms submit `""` for fields the user left empty.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_blank)
}

/// Like [`nullable`], but a blank string clears the field the same way `null` does
pub(crate) fn nullable_blank<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Overwrite `target` when the patch carries a value
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
