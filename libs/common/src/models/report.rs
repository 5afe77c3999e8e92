//! Report model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{merge, nullable};
use crate::error::ValidationError;
use crate::validation::{Validate, validate_required};

/// Kind of incident being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Accident,
    Maintenance,
    Complaint,
    Feedback,
}

/// Review state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reviewed,
    Resolved,
}

/// Triage priority of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Report entity
///
/// `user_id` and `car_id` are not checked against their collections and may
/// outlive the records they point at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub car_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub message: String,
    pub status: ReportStatus,
    pub priority: ReportPriority,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Shallow-merge a patch over this record
    ///
    /// A status change into `resolved` stamps `resolved_at` with `now`, a
    /// change out of it clears the stamp. An explicit `resolvedAt` in the
    /// patch always wins.
    pub fn apply(&mut self, patch: ReportPatch, now: DateTime<Utc>) {
        merge(&mut self.car_id, patch.car_id);
        merge(&mut self.report_type, patch.report_type);
        merge(&mut self.message, patch.message);
        merge(&mut self.priority, patch.priority);

        if let Some(status) = patch.status {
            if status != self.status {
                self.resolved_at = (status == ReportStatus::Resolved).then_some(now);
            }
            self.status = status;
        }
        merge(&mut self.resolved_at, patch.resolved_at);
    }
}

/// New report creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewReport {
    pub user_id: Uuid,
    pub car_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub message: String,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub priority: ReportPriority,
}

impl NewReport {
    /// Build the stored record, stamping the creation time
    pub fn into_report(self, id: Uuid, now: DateTime<Utc>) -> Report {
        let resolved_at = (self.status == ReportStatus::Resolved).then_some(now);
        Report {
            id,
            user_id: self.user_id,
            car_id: self.car_id,
            report_type: self.report_type,
            message: self.message,
            status: self.status,
            priority: self.priority,
            created_at: now,
            resolved_at,
        }
    }
}

impl Validate for NewReport {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required("message", &self.message)
    }
}

/// Report update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReportPatch {
    #[serde(default, deserialize_with = "nullable")]
    pub car_id: Option<Option<Uuid>>,
    #[serde(rename = "type")]
    pub report_type: Option<ReportType>,
    pub message: Option<String>,
    pub status: Option<ReportStatus>,
    pub priority: Option<ReportPriority>,
    #[serde(default, deserialize_with = "nullable")]
    pub resolved_at: Option<Option<DateTime<Utc>>>,
}

impl Validate for ReportPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(message) = &self.message {
            validate_required("message", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    fn pending_report() -> Report {
        let new_report: NewReport = serde_json::from_value(json!({
            "userId": Uuid::new_v4(),
            "type": "complaint",
            "message": "App crashes when tracking a vehicle",
        }))
        .expect("deserialize report");
        new_report.into_report(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_new_report_defaults() {
        let report = pending_report();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.priority, ReportPriority::Medium);
        assert_eq!(report.car_id, None);
        assert_eq!(report.resolved_at, None);

        let value = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(value["type"], "complaint");
        assert!(value["resolvedAt"].is_null());
    }

    #[test]
    fn test_resolving_stamps_and_reopening_clears() {
        let mut report = pending_report();
        let now = Utc::now();

        report.apply(
            ReportPatch {
                status: Some(ReportStatus::Resolved),
                ..ReportPatch::default()
            },
            now,
        );
        assert_eq!(report.resolved_at, Some(now));

        report.apply(
            ReportPatch {
                status: Some(ReportStatus::Reviewed),
                ..ReportPatch::default()
            },
            now + Duration::minutes(5),
        );
        assert_eq!(report.resolved_at, None);
    }

    #[test]
    fn test_explicit_resolved_at_wins() {
        let mut report = pending_report();
        let stamped = Utc::now() - Duration::days(1);
        let patch: ReportPatch = serde_json::from_value(json!({
            "status": "resolved",
            "resolvedAt": stamped.to_rfc3339(),
        }))
        .expect("deserialize patch");

        report.apply(patch, Utc::now());

        assert_eq!(report.status, ReportStatus::Resolved);
        assert_eq!(report.resolved_at, Some(stamped));
    }

    #[test]
    fn test_unknown_report_type_is_rejected() {
        let result = serde_json::from_value::<NewReport>(json!({
            "userId": Uuid::new_v4(),
            "type": "praise",
            "message": "Great driver",
        }));
        assert!(result.is_err());
    }
}
