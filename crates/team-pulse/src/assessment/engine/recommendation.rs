use serde::{Deserialize, Serialize};

use super::super::domain::{Answers, RecommendationType};
use super::content;
use super::diagnostic::{likert_score, DiagnosticDimensions, DiagnosticResult};

/// Candidate scores for the four offerings, each clamped to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationScores {
    pub half_day: u8,
    pub weekend_camp: u8,
    pub workshop: u8,
    pub discovery_call: u8,
}

/// Selected offering plus the supporting copy shown on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub confidence: u8,
    pub scores: RecommendationScores,
    pub rationale_bullets: Vec<String>,
    pub expected_outcomes: Vec<String>,
    pub suggested_modules: Vec<String>,
}

/// Intermediate indices feeding the candidate formulas, all on a 0-100 scale.
struct CandidateIndices {
    severity: f64,
    complexity: f64,
    recovery: f64,
    alignment: f64,
    readiness: f64,
    feasibility: f64,
}

/// Fixed lookup keyed by the budget option; unknown keys fall back to 40.
fn budget_score(budget_range: &str) -> f64 {
    match budget_range {
        "LOW" => 30.0,
        "MID" => 60.0,
        "HIGH" => 90.0,
        "NOT_SURE" => 40.0,
        _ => 40.0,
    }
}

/// Fixed lookup keyed by the time-available option; unknown keys fall back
/// to 40. The 1_2_HOURS key is not offered by the current form but stays
/// mapped so older payloads keep scoring the same way.
fn time_score(time_available: &str) -> f64 {
    match time_available {
        "1_2_HOURS" => 20.0,
        "HALF_DAY" => 50.0,
        "FULL_DAY" => 70.0,
        "WEEKEND" => 90.0,
        "NOT_SURE" => 40.0,
        _ => 40.0,
    }
}

fn derive_indices(answers: &Answers, diagnostic: &DiagnosticResult) -> CandidateIndices {
    let d = &diagnostic.dimensions;

    let severity = (d.conflict_pressure + d.toxic_indicators + d.burnout_strain) / 3.0;

    // Share of dimensions sitting above 60 on their stored value, regardless
    // of whether the dimension is inverted.
    let values = d.values();
    let high = values.iter().filter(|value| **value > 60.0).count();
    let complexity = high as f64 / values.len() as f64 * 100.0;

    let recovery = (likert_score(answers.morale)
        + likert_score(answers.trust)
        + likert_score(answers.respect))
        / 3.0;
    let alignment = (d.team_cohesion + d.communication_quality) / 2.0;
    let readiness = (d.leadership_support + likert_score(answers.leadership_buy_in)) / 2.0;
    let feasibility =
        (budget_score(&answers.budget_range) + time_score(&answers.time_available)) / 2.0;

    CandidateIndices {
        severity,
        complexity,
        recovery,
        alignment,
        readiness,
        feasibility,
    }
}

fn capped(score: f64) -> u8 {
    (score.round() as u8).min(100)
}

fn half_day_score(ix: &CandidateIndices) -> u8 {
    capped(ix.alignment * 0.3 + ix.feasibility * 0.4 + (100.0 - ix.complexity) * 0.3)
}

fn weekend_camp_score(ix: &CandidateIndices) -> u8 {
    capped(ix.severity * 0.35 + ix.recovery * 0.25 + ix.complexity * 0.2 + ix.readiness * 0.2)
}

/// Step thresholds are deliberate: the source rubric scores workshops on
/// coarse "is communication broken / is conflict hot" gates, not a gradient.
fn workshop_score(d: &DiagnosticDimensions, ix: &CandidateIndices) -> u8 {
    let communication_gap = if d.communication_quality < 50.0 { 70.0 } else { 40.0 };
    let conflict_push = if d.conflict_pressure > 60.0 { 70.0 } else { 30.0 };
    capped(communication_gap * 0.4 + conflict_push * 0.3 + ix.feasibility * 0.3)
}

fn discovery_call_score(
    answers: &Answers,
    diagnostic: &DiagnosticResult,
    ix: &CandidateIndices,
) -> u8 {
    let crisis = if diagnostic.team_pulse_score < 30 { 80.0 } else { 20.0 };
    let low_readiness = if ix.readiness < 30.0 { 70.0 } else { 20.0 };
    let still_exploring = if answers.planning_stage == "EXPLORING" { 60.0 } else { 20.0 };
    capped(crisis * 0.5 + low_readiness * 0.3 + still_exploring * 0.2)
}

/// Score the four offerings and pick a winner.
///
/// Pure function over the answers and an already-computed diagnostic. Ties
/// resolve by declaration priority (half-day, weekend camp, workshop,
/// discovery call) via the stable sort over the candidate list.
pub fn calculate_recommendation(
    answers: &Answers,
    diagnostic: &DiagnosticResult,
) -> RecommendationResult {
    let indices = derive_indices(answers, diagnostic);

    let scores = RecommendationScores {
        half_day: half_day_score(&indices),
        weekend_camp: weekend_camp_score(&indices),
        workshop: workshop_score(&diagnostic.dimensions, &indices),
        discovery_call: discovery_call_score(answers, diagnostic, &indices),
    };

    let mut candidates = [
        (RecommendationType::HalfDay, scores.half_day),
        (RecommendationType::WeekendCamp, scores.weekend_camp),
        (RecommendationType::Workshop, scores.workshop),
        (RecommendationType::DiscoveryCall, scores.discovery_call),
    ];
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let (kind, top_score) = candidates[0];
    let runner_up = candidates[1].1;
    let spread = f64::from(top_score) - f64::from(runner_up);
    let confidence = (spread * 1.5 + 50.0).round().clamp(0.0, 100.0) as u8;

    RecommendationResult {
        kind,
        confidence,
        scores,
        rationale_bullets: content::rationale_bullets(kind, answers.team_size),
        expected_outcomes: content::expected_outcomes(kind),
        suggested_modules: content::suggested_modules(kind),
    }
}
