use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{AssessmentId, AssessmentSubmission, LeadBand};
use super::engine::{
    calculate_diagnostic, calculate_lead_score, calculate_recommendation, DiagnosticResult,
    RecommendationResult,
};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    AssessmentRecord, AssessmentRepository, OwnerNotification, OwnerNotifier, RepositoryError,
};

/// Service composing the intake guard, scoring engine, repository, and
/// owner notifier.
pub struct AssessmentService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("tpd-{id:06}"))
}

/// Result bundle handed back to the submitting client. Mirrors what the
/// results page needs; the full lead score stays in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub assessment_id: AssessmentId,
    pub diagnostic: DiagnosticResult,
    pub recommendation: RecommendationResult,
    pub lead_band: LeadBand,
}

impl<R, N> AssessmentService<R, N>
where
    R: AssessmentRepository + 'static,
    N: OwnerNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Validate, score, persist, and notify for one submission.
    ///
    /// Persistence failure fails the request: the stored record is the
    /// business record of truth. Notification failure does not: it is logged
    /// and the computed results are returned regardless.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentOutcome, AssessmentServiceError> {
        let answers = IntakeGuard::answers_from_submission(submission)?;

        let diagnostic = calculate_diagnostic(&answers);
        let recommendation = calculate_recommendation(&answers, &diagnostic);
        let lead = calculate_lead_score(&answers);

        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            submitted_at: Utc::now(),
            answers,
            diagnostic,
            recommendation,
            lead,
        };
        let record = self.repository.insert(record)?;

        if let Err(error) = self.notifier.notify(owner_summary(&record)) {
            warn!(
                assessment_id = %record.assessment_id.0,
                %error,
                "owner notification failed, returning results anyway"
            );
        }

        Ok(AssessmentOutcome {
            assessment_id: record.assessment_id,
            diagnostic: record.diagnostic,
            recommendation: record.recommendation,
            lead_band: record.lead.band,
        })
    }

    /// Fetch a stored assessment for result retrieval.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently stored assessments, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

fn owner_summary(record: &AssessmentRecord) -> OwnerNotification {
    OwnerNotification {
        title: format!(
            "New Team Pulse assessment: {} risk (score {})",
            record.diagnostic.risk_level.label(),
            record.diagnostic.team_pulse_score
        ),
        content: format!(
            "Sector: {} | Team: {} | Recommendation: {} | Lead band: {}",
            record.answers.sector,
            record.answers.team_size,
            record.recommendation.kind.label(),
            record.lead.band.label()
        ),
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
