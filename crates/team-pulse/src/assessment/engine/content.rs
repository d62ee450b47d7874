//! Results-page copy keyed by recommendation type.
//!
//! These lists are fixed marketing copy, not computed values; only the
//! half-day rationale interpolates the respondent's team size.

use super::super::domain::RecommendationType;

pub(crate) fn rationale_bullets(kind: RecommendationType, team_size: u32) -> Vec<String> {
    match kind {
        RecommendationType::HalfDay => vec![
            format!("Team size of {team_size} is well-suited to a focused half-day format"),
            "Current team dynamics suggest a targeted reset rather than deep immersion"
                .to_string(),
            "Budget and time constraints align with the half-day offering".to_string(),
            "Communication and cohesion improvements are achievable in 3-4 hours".to_string(),
        ],
        RecommendationType::WeekendCamp => vec![
            "Elevated conflict and trust deficits require immersive intervention".to_string(),
            "The depth of team challenges warrants a two-day structured experience".to_string(),
            "Leadership buy-in is sufficient to support a full weekend programme".to_string(),
            "Complex team dynamics need sustained facilitation to achieve lasting change"
                .to_string(),
        ],
        RecommendationType::Workshop => vec![
            "Specific skill gaps and targeted challenges identified in the assessment".to_string(),
            "A bespoke workshop can address your unique organisational context".to_string(),
            "The assessment reveals focused areas that benefit from specialised facilitation"
                .to_string(),
            "Your team's needs go beyond standard formats, so a tailored approach is recommended"
                .to_string(),
        ],
        RecommendationType::DiscoveryCall => vec![
            "The assessment reveals complexity that warrants a deeper consultation first"
                .to_string(),
            "A discovery call will help clarify the most appropriate intervention".to_string(),
            "Some indicators suggest unique circumstances that need direct discussion".to_string(),
            "We want to ensure the right fit before recommending a specific programme".to_string(),
        ],
    }
}

pub(crate) fn expected_outcomes(kind: RecommendationType) -> Vec<String> {
    let outcomes: &[&str] = match kind {
        RecommendationType::HalfDay => &[
            "Improved team communication",
            "Renewed morale and energy",
            "Shared team values and norms",
            "Practical conflict tools",
        ],
        RecommendationType::WeekendCamp => &[
            "Deep trust rebuilding",
            "Culture reset and new norms",
            "Leadership alignment",
            "Lasting behavioural change",
        ],
        RecommendationType::Workshop => &[
            "Targeted skill development",
            "Specific challenge resolution",
            "Measurable behavioural outcomes",
            "Ongoing support framework",
        ],
        RecommendationType::DiscoveryCall => &[
            "Clarity on team needs",
            "Tailored programme recommendation",
            "Budget and timeline alignment",
            "Confidence in the right intervention",
        ],
    };
    outcomes.iter().map(|outcome| outcome.to_string()).collect()
}

pub(crate) fn suggested_modules(kind: RecommendationType) -> Vec<String> {
    let modules: &[&str] = match kind {
        RecommendationType::HalfDay => &[
            "Motivational facilitation",
            "Team dynamics activities",
            "Reflection and dialogue",
            "Commitment charter",
        ],
        RecommendationType::WeekendCamp => &[
            "Diagnostic deep-dive",
            "Trust and conflict work",
            "Leadership coaching",
            "Team charter creation",
        ],
        RecommendationType::Workshop => &[
            "Needs assessment",
            "Custom module design",
            "Skills practice",
            "Post-session report",
        ],
        RecommendationType::DiscoveryCall => &[
            "Team context review",
            "Challenge mapping",
            "Programme options",
            "Investment discussion",
        ],
    };
    modules.iter().map(|module| module.to_string()).collect()
}
