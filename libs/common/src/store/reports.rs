//! Report repository

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::table::Table;
use crate::error::{EntityKind, StoreError, StoreResult};
use crate::models::{NewReport, Report, ReportPatch};

/// In-memory report repository
#[derive(Debug, Clone, Default)]
pub struct ReportRepository {
    inner: Arc<RwLock<Table<Report>>>,
}

impl ReportRepository {
    /// Create an empty report repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a report by ID
    pub async fn get(&self, id: Uuid) -> Option<Report> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Get all reports in insertion order
    pub async fn get_all(&self) -> Vec<Report> {
        self.inner.read().await.to_vec()
    }

    /// Get the reports filed by a user
    pub async fn get_by_user(&self, user_id: Uuid) -> Vec<Report> {
        self.inner
            .read()
            .await
            .values()
            .filter(|report| report.user_id == user_id)
            .cloned()
            .collect()
    }

    /// File a new report with a fresh ID
    ///
    /// The user and car references are stored as given.
    pub async fn create(&self, new_report: NewReport) -> StoreResult<Report> {
        let mut table = self.inner.write().await;
        let report = new_report.into_report(table.fresh_id(), Utc::now());
        table.insert(report.id, report.clone());

        info!(report_id = %report.id, user_id = %report.user_id, "Filed report");
        Ok(report)
    }

    /// Store a fully-formed report, keeping its ID and timestamps
    pub async fn insert(&self, report: Report) -> Report {
        self.inner.write().await.insert(report.id, report.clone());
        report
    }

    /// Apply a patch to an existing report
    pub async fn update(&self, id: Uuid, patch: ReportPatch) -> StoreResult<Report> {
        let mut table = self.inner.write().await;
        let mut updated = table
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::Report, id))?;

        updated.apply(patch, Utc::now());
        table.insert(id, updated.clone());

        info!(report_id = %id, status = ?updated.status, "Updated report");
        Ok(updated)
    }

    /// Delete a report, returning whether a record was removed
    pub async fn delete(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!(report_id = %id, "Deleted report");
        }
        removed
    }
}
