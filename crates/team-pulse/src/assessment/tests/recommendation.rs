use super::common::*;
use crate::assessment::domain::{AssessmentSubmission, RecommendationType};
use crate::assessment::engine::{calculate_diagnostic, calculate_recommendation};

#[test]
fn midpoint_team_gets_the_half_day_reset() {
    let answers = answers_for(base_submission());
    let diagnostic = calculate_diagnostic(&answers);
    let recommendation = calculate_recommendation(&answers, &diagnostic);

    assert_eq!(recommendation.kind, RecommendationType::HalfDay);
    assert_eq!(recommendation.scores.half_day, 67);
    assert_eq!(recommendation.scores.weekend_camp, 40);
    assert_eq!(recommendation.scores.workshop, 42);
    assert_eq!(recommendation.scores.discovery_call, 20);
    assert_eq!(recommendation.confidence, 88);
}

#[test]
fn high_risk_team_is_never_offered_the_light_touch_format() {
    let answers = answers_for(high_risk_submission());
    let diagnostic = calculate_diagnostic(&answers);
    let recommendation = calculate_recommendation(&answers, &diagnostic);

    assert!(matches!(
        recommendation.kind,
        RecommendationType::WeekendCamp
            | RecommendationType::Workshop
            | RecommendationType::DiscoveryCall
    ));
}

#[test]
fn crisis_team_is_routed_to_a_discovery_call() {
    let answers = answers_for(crisis_submission());
    let diagnostic = calculate_diagnostic(&answers);
    let recommendation = calculate_recommendation(&answers, &diagnostic);

    assert_eq!(recommendation.kind, RecommendationType::DiscoveryCall);
}

#[test]
fn entrenched_team_with_backing_gets_the_weekend_camp() {
    let answers = answers_for(entrenched_submission());
    let diagnostic = calculate_diagnostic(&answers);
    let recommendation = calculate_recommendation(&answers, &diagnostic);

    assert_eq!(recommendation.kind, RecommendationType::WeekendCamp);
}

#[test]
fn candidate_scores_and_confidence_stay_on_the_percent_scale() {
    for submission in [
        base_submission(),
        high_risk_submission(),
        low_risk_submission(),
        crisis_submission(),
        entrenched_submission(),
    ] {
        let answers = answers_for(submission);
        let diagnostic = calculate_diagnostic(&answers);
        let recommendation = calculate_recommendation(&answers, &diagnostic);

        assert!(recommendation.confidence <= 100);
        assert!(recommendation.scores.half_day <= 100);
        assert!(recommendation.scores.weekend_camp <= 100);
        assert!(recommendation.scores.workshop <= 100);
        assert!(recommendation.scores.discovery_call <= 100);
    }
}

#[test]
fn unknown_budget_and_time_options_fall_back_to_their_defaults() {
    let answers = answers_for(AssessmentSubmission {
        budget_range: "EUROS_AND_CENTS".to_string(),
        time_available: "FORTNIGHT".to_string(),
        ..base_submission()
    });
    let known_defaults = answers_for(AssessmentSubmission {
        budget_range: "NOT_SURE".to_string(),
        // NOT_SURE maps to the same 40 the fallback uses.
        time_available: "SOMETHING_ELSE".to_string(),
        ..base_submission()
    });

    let diagnostic = calculate_diagnostic(&answers);
    let unknown = calculate_recommendation(&answers, &diagnostic);
    let fallback = calculate_recommendation(&known_defaults, &diagnostic);

    assert_eq!(unknown.scores, fallback.scores);
}

#[test]
fn exploring_buyers_push_the_discovery_call_score_up() {
    let comparing = answers_for(base_submission());
    let exploring = answers_for(AssessmentSubmission {
        planning_stage: "EXPLORING".to_string(),
        ..base_submission()
    });

    let diagnostic = calculate_diagnostic(&comparing);
    let baseline = calculate_recommendation(&comparing, &diagnostic);
    let nudged = calculate_recommendation(&exploring, &diagnostic);

    assert!(nudged.scores.discovery_call > baseline.scores.discovery_call);
}

#[test]
fn every_selected_type_carries_its_own_copy() {
    let fixtures = [
        (base_submission(), RecommendationType::HalfDay),
        (entrenched_submission(), RecommendationType::WeekendCamp),
        (high_risk_submission(), RecommendationType::Workshop),
        (crisis_submission(), RecommendationType::DiscoveryCall),
    ];

    let mut seen_rationales = Vec::new();
    for (submission, expected) in fixtures {
        let answers = answers_for(submission);
        let diagnostic = calculate_diagnostic(&answers);
        let recommendation = calculate_recommendation(&answers, &diagnostic);

        assert_eq!(recommendation.kind, expected);
        assert!(!recommendation.rationale_bullets.is_empty());
        assert!(!recommendation.expected_outcomes.is_empty());
        assert!(!recommendation.suggested_modules.is_empty());
        assert!(
            !seen_rationales.contains(&recommendation.rationale_bullets),
            "rationale copy repeated across types"
        );
        seen_rationales.push(recommendation.rationale_bullets);
    }
}

#[test]
fn half_day_rationale_mentions_the_team_size() {
    let answers = answers_for(AssessmentSubmission {
        team_size: 37,
        ..base_submission()
    });
    let diagnostic = calculate_diagnostic(&answers);
    let recommendation = calculate_recommendation(&answers, &diagnostic);

    assert_eq!(recommendation.kind, RecommendationType::HalfDay);
    assert!(recommendation.rationale_bullets[0].contains("37"));
}

#[test]
fn repeated_calls_yield_identical_results() {
    let answers = answers_for(crisis_submission());
    let diagnostic = calculate_diagnostic(&answers);

    let first = calculate_recommendation(&answers, &diagnostic);
    let second = calculate_recommendation(&answers, &diagnostic);

    assert_eq!(first, second);
}
