use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answers, AssessmentId, LeadBand};
use super::engine::{DiagnosticResult, LeadScore, RecommendationResult};

/// Repository record: the business record of truth for one assessment.
///
/// The id and timestamp are assigned by the service layer, never by the
/// scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub submitted_at: DateTime<Utc>,
    pub answers: Answers,
    pub diagnostic: DiagnosticResult,
    pub recommendation: RecommendationResult,
    pub lead: LeadScore,
}

impl AssessmentRecord {
    /// Respondent-facing view. The lead score stays internal: only the band
    /// is exposed, and raw intent signals never leave the repository.
    pub fn result_view(&self) -> AssessmentResultView {
        AssessmentResultView {
            assessment_id: self.assessment_id.clone(),
            submitted_at: self.submitted_at,
            diagnostic: self.diagnostic.clone(),
            recommendation: self.recommendation.clone(),
            lead_band: self.lead.band,
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for the owner-facing "new assessment" summary. Delivery is
/// best-effort by contract: implementations may fail, the service logs and
/// moves on.
pub trait OwnerNotifier: Send + Sync {
    fn notify(&self, notification: OwnerNotification) -> Result<(), NotifyError>;
}

/// Title/content payload handed to the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerNotification {
    pub title: String,
    pub content: String,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation returned by the result endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResultView {
    pub assessment_id: AssessmentId,
    pub submitted_at: DateTime<Utc>,
    pub diagnostic: DiagnosticResult,
    pub recommendation: RecommendationResult,
    pub lead_band: LeadBand,
}
