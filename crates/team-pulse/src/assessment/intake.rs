use super::domain::{Answers, AssessmentSubmission, ALGORITHM_VERSION};

/// Upper bound on the ordinal rating scale.
pub const MAX_RATING: u8 = 4;
/// Largest team the public form accepts.
pub const MAX_TEAM_SIZE: u32 = 1000;

/// Rejection raised before a submission reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} must be an integer between 0 and 4, got {value}")]
    RatingOutOfRange { field: &'static str, value: u8 },
    #[error("team_size must be between 1 and {MAX_TEAM_SIZE}, got {value}")]
    TeamSizeOutOfRange { value: u32 },
}

/// Boundary validation for questionnaire payloads.
///
/// The calculators are total over well-formed input and do no checking of
/// their own, so every submission passes through here first. Categorical
/// fields are deliberately not constrained: the engine's lookup tables carry
/// explicit defaults for unrecognized option keys.
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn answers_from_submission(
        submission: AssessmentSubmission,
    ) -> Result<Answers, IntakeViolation> {
        let ratings: [(&'static str, u8); 13] = [
            ("morale", submission.morale),
            ("trust", submission.trust),
            ("communication", submission.communication),
            ("respect", submission.respect),
            ("conflict_severity", submission.conflict_severity),
            ("gossip_indicator", submission.gossip_indicator),
            ("competition_indicator", submission.competition_indicator),
            ("silos_indicator", submission.silos_indicator),
            ("burnout_indicator", submission.burnout_indicator),
            ("change_stress", submission.change_stress),
            ("leadership_buy_in", submission.leadership_buy_in),
            ("leadership_participation", submission.leadership_participation),
            ("urgency", submission.urgency),
        ];
        for (field, value) in ratings {
            if value > MAX_RATING {
                return Err(IntakeViolation::RatingOutOfRange { field, value });
            }
        }

        if submission.team_size == 0 || submission.team_size > MAX_TEAM_SIZE {
            return Err(IntakeViolation::TeamSizeOutOfRange {
                value: submission.team_size,
            });
        }

        Ok(Answers {
            version: ALGORITHM_VERSION.to_string(),
            sector: submission.sector,
            team_size: submission.team_size,
            role_in_process: submission.role_in_process,
            planning_stage: submission.planning_stage,
            approval_process: submission.approval_process,
            morale: submission.morale,
            trust: submission.trust,
            communication: submission.communication,
            respect: submission.respect,
            conflict_severity: submission.conflict_severity,
            gossip_indicator: submission.gossip_indicator,
            competition_indicator: submission.competition_indicator,
            silos_indicator: submission.silos_indicator,
            burnout_indicator: submission.burnout_indicator,
            change_stress: submission.change_stress,
            leadership_buy_in: submission.leadership_buy_in,
            leadership_participation: submission.leadership_participation,
            urgency: submission.urgency,
            budget_range: submission.budget_range,
            time_available: submission.time_available,
            preferred_format: submission.preferred_format,
            timeline: submission.timeline,
            notes: submission.notes,
        })
    }
}
