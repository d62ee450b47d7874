use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use team_pulse::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, NotifyError, OwnerNotification,
    OwnerNotifier, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) contacts: ContactLog,
    pub(crate) notifier: Arc<InMemoryOwnerNotifier>,
}

/// Volatile store standing in for the real persistence layer. Insertion
/// order is preserved so `recent` can walk newest-first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|stored| stored.assessment_id == record.assessment_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.assessment_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

/// Captures owner notifications instead of dispatching them, so the demo and
/// tests can assert on what would have been sent.
#[derive(Default, Clone)]
pub(crate) struct InMemoryOwnerNotifier {
    events: Arc<Mutex<Vec<OwnerNotification>>>,
}

impl OwnerNotifier for InMemoryOwnerNotifier {
    fn notify(&self, notification: OwnerNotification) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryOwnerNotifier {
    pub(crate) fn events(&self) -> Vec<OwnerNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

/// Stored contact-form submission.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ContactRecord {
    pub(crate) id: String,
    pub(crate) received_at: DateTime<Utc>,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) organisation: Option<String>,
    pub(crate) role: Option<String>,
    pub(crate) service: Option<String>,
    pub(crate) team_size: Option<String>,
    pub(crate) budget: Option<String>,
    pub(crate) timeline: Option<String>,
    pub(crate) message: String,
    pub(crate) assessment_id: Option<String>,
}

/// Append-only contact log with sequential ids.
#[derive(Default, Clone)]
pub(crate) struct ContactLog {
    entries: Arc<Mutex<Vec<ContactRecord>>>,
    sequence: Arc<AtomicU64>,
}

impl ContactLog {
    pub(crate) fn next_id(&self) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("contact-{id:06}")
    }

    pub(crate) fn append(&self, record: ContactRecord) {
        let mut guard = self.entries.lock().expect("contact mutex poisoned");
        guard.push(record);
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<ContactRecord> {
        self.entries.lock().expect("contact mutex poisoned").clone()
    }
}
