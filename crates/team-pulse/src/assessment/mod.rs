//! Team Pulse Diagnostic intake, scoring, and result delivery.
//!
//! The scoring engine itself ([`engine`]) is three pure functions over one
//! immutable answer set. Everything around it (intake validation, id
//! assignment, persistence, owner notification) lives in the service facade
//! and its collaborator traits so the engine never touches I/O.

pub mod batch;
pub mod domain;
pub mod engine;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchOutcome, BatchReport, BatchScoreError, BatchScorer, BatchSkip};
pub use domain::{
    Answers, AssessmentId, AssessmentSubmission, Dimension, LeadBand, RecommendationType,
    RiskLevel, ALGORITHM_VERSION,
};
pub use engine::{
    calculate_diagnostic, calculate_lead_score, calculate_recommendation, DiagnosticDimensions,
    DiagnosticResult, LeadScore, LeadSignals, RecommendationResult, RecommendationScores,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentResultView, NotifyError, OwnerNotification,
    OwnerNotifier, RepositoryError,
};
pub use router::assessment_router;
pub use service::{AssessmentOutcome, AssessmentService, AssessmentServiceError};
