use std::sync::{Arc, Mutex};

use crate::assessment::domain::{Answers, AssessmentId, AssessmentSubmission};
use crate::assessment::intake::IntakeGuard;
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, NotifyError, OwnerNotification, OwnerNotifier,
    RepositoryError,
};
use crate::assessment::service::AssessmentService;

/// Midpoint profile: every rating at 2, moderate buying intent.
pub(super) fn base_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        sector: "CORPORATE".to_string(),
        team_size: 20,
        role_in_process: "HR_PEOPLE_CULTURE".to_string(),
        planning_stage: "COMPARING".to_string(),
        approval_process: "ONE_APPROVER".to_string(),
        morale: 2,
        trust: 2,
        communication: 2,
        respect: 2,
        conflict_severity: 2,
        gossip_indicator: 2,
        competition_indicator: 2,
        silos_indicator: 2,
        burnout_indicator: 2,
        change_stress: 2,
        leadership_buy_in: 2,
        leadership_participation: 2,
        urgency: 2,
        budget_range: "MID".to_string(),
        time_available: "HALF_DAY".to_string(),
        preferred_format: "IN_PERSON".to_string(),
        timeline: "1_MONTH".to_string(),
        notes: None,
    }
}

/// Everything bad: positive ratings floored, severity ratings maxed.
pub(super) fn high_risk_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        morale: 0,
        trust: 0,
        communication: 0,
        respect: 0,
        conflict_severity: 4,
        gossip_indicator: 4,
        competition_indicator: 4,
        silos_indicator: 4,
        burnout_indicator: 4,
        change_stress: 4,
        leadership_buy_in: 0,
        leadership_participation: 0,
        urgency: 4,
        ..base_submission()
    }
}

/// Everything good: positive ratings maxed, severity ratings floored.
pub(super) fn low_risk_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        morale: 4,
        trust: 4,
        communication: 4,
        respect: 4,
        conflict_severity: 0,
        gossip_indicator: 0,
        competition_indicator: 0,
        silos_indicator: 0,
        burnout_indicator: 0,
        change_stress: 0,
        leadership_buy_in: 4,
        leadership_participation: 4,
        urgency: 0,
        ..base_submission()
    }
}

/// Crisis team with one functioning channel, exploring buyer on a shoestring.
pub(super) fn crisis_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        communication: 3,
        planning_stage: "EXPLORING".to_string(),
        budget_range: "LOW".to_string(),
        time_available: "1_2_HOURS".to_string(),
        ..high_risk_submission()
    }
}

/// Entrenched problems with committed leadership and real budget.
pub(super) fn entrenched_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        morale: 3,
        trust: 3,
        communication: 3,
        respect: 3,
        conflict_severity: 4,
        gossip_indicator: 4,
        competition_indicator: 4,
        silos_indicator: 4,
        burnout_indicator: 4,
        change_stress: 4,
        leadership_buy_in: 3,
        leadership_participation: 3,
        budget_range: "HIGH".to_string(),
        time_available: "WEEKEND".to_string(),
        ..base_submission()
    }
}

pub(super) fn answers_for(submission: AssessmentSubmission) -> Answers {
    IntakeGuard::answers_from_submission(submission).expect("fixture passes intake")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Vec<AssessmentRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl AssessmentRepository for MemoryRepository {
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

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<OwnerNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<OwnerNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl OwnerNotifier for MemoryNotifier {
    fn notify(&self, notification: OwnerNotification) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

/// Notifier whose transport is always down.
pub(super) struct FailingNotifier;

impl OwnerNotifier for FailingNotifier {
    fn notify(&self, _notification: OwnerNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay unreachable".to_string()))
    }
}

/// Repository that rejects every insert as a duplicate.
pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository whose backing store is down.
pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<MemoryRepository, MemoryNotifier>>,
    MemoryRepository,
    MemoryNotifier,
) {
    let repository = MemoryRepository::default();
    let notifier = MemoryNotifier::default();
    let service = Arc::new(AssessmentService::new(
        Arc::new(repository.clone()),
        Arc::new(notifier.clone()),
    ));
    (service, repository, notifier)
}
