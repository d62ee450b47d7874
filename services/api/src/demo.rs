use crate::infra::{InMemoryAssessmentRepository, InMemoryOwnerNotifier};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use team_pulse::assessment::{
    AssessmentOutcome, AssessmentService, AssessmentSubmission, BatchScorer, Dimension,
};
use team_pulse::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing one questionnaire submission
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Path to a CSV export of questionnaire submissions
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// List rows that were skipped at intake
    #[arg(long)]
    pub(crate) show_skipped: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the contact-style notification listing at the end
    #[arg(long)]
    pub(crate) skip_notifications: bool,
}

fn build_service() -> (
    Arc<AssessmentService<InMemoryAssessmentRepository, InMemoryOwnerNotifier>>,
    Arc<InMemoryOwnerNotifier>,
) {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifier = Arc::new(InMemoryOwnerNotifier::default());
    let service = Arc::new(AssessmentService::new(repository, notifier.clone()));
    (service, notifier)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)?;

    let (service, _) = build_service();
    let outcome = service.submit(submission)?;

    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let report = BatchScorer::from_path(&args.csv)?;

    println!(
        "Scored {} submission(s), skipped {}",
        report.outcomes.len(),
        report.skipped.len()
    );
    println!("{:<6} {:<24} {:>6} {:>7} {:<10} {:<15} {:<4}", "line", "sector", "team", "pulse", "risk", "recommendation", "band");
    for outcome in &report.outcomes {
        println!(
            "{:<6} {:<24} {:>6} {:>7} {:<10} {:<15} {:<4}",
            outcome.line,
            outcome.sector,
            outcome.team_size,
            outcome.team_pulse_score,
            outcome.risk_level.label(),
            outcome.recommendation.label(),
            outcome.lead_band.label()
        );
    }

    if args.show_skipped {
        for skip in &report.skipped {
            println!("line {}: skipped ({})", skip.line, skip.reason);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (service, notifier) = build_service();

    println!("Team Pulse Diagnostic demo");
    for (name, submission) in demo_submissions() {
        println!("\n=== {name} ===");
        let outcome = service.submit(submission)?;
        render_outcome(&outcome);
    }

    if !args.skip_notifications {
        println!("\nCaptured owner notifications");
        for event in notifier.events() {
            println!("- {}", event.title);
            println!("  {}", event.content);
        }
    }

    Ok(())
}

fn render_outcome(outcome: &AssessmentOutcome) {
    let diagnostic = &outcome.diagnostic;
    println!("Assessment {}", outcome.assessment_id.0);
    println!(
        "Team Pulse Score: {} ({} risk)",
        diagnostic.team_pulse_score,
        diagnostic.risk_level.label()
    );
    println!(
        "Health {} | Risk {} | Readiness {}",
        diagnostic.health_score, diagnostic.risk_score, diagnostic.readiness_score
    );

    println!("Dimensions:");
    for dimension in Dimension::ALL {
        println!(
            "  {:<24} {:>5.1}{}",
            dimension.label(),
            diagnostic.dimensions.get(dimension),
            if dimension.is_inverted() { "  (higher = worse)" } else { "" }
        );
    }

    println!("Focus areas: {}", diagnostic.top_focus_areas.join(", "));
    println!("Strengths:   {}", diagnostic.strengths.join(", "));

    let recommendation = &outcome.recommendation;
    println!(
        "Recommendation: {} (confidence {})",
        recommendation.kind.label(),
        recommendation.confidence
    );
    println!(
        "Candidate scores: half-day {} | weekend camp {} | workshop {} | discovery call {}",
        recommendation.scores.half_day,
        recommendation.scores.weekend_camp,
        recommendation.scores.workshop,
        recommendation.scores.discovery_call
    );
    for bullet in &recommendation.rationale_bullets {
        println!("  * {bullet}");
    }

    println!("Lead band: {}", outcome.lead_band.label());
}

fn demo_submissions() -> Vec<(&'static str, AssessmentSubmission)> {
    let midpoint = AssessmentSubmission {
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
    };

    let thriving = AssessmentSubmission {
        sector: "TECH".to_string(),
        team_size: 9,
        planning_stage: "READY_SOON".to_string(),
        approval_process: "I_CAN_APPROVE".to_string(),
        role_in_process: "FOUNDER_OWNER".to_string(),
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
        ..midpoint.clone()
    };

    let distressed = AssessmentSubmission {
        sector: "HEALTHCARE".to_string(),
        team_size: 45,
        planning_stage: "URGENT_ASAP".to_string(),
        role_in_process: "TEAM_LEADER_MANAGER".to_string(),
        morale: 0,
        trust: 0,
        communication: 1,
        respect: 1,
        conflict_severity: 4,
        gossip_indicator: 3,
        competition_indicator: 4,
        silos_indicator: 4,
        burnout_indicator: 4,
        change_stress: 4,
        leadership_buy_in: 1,
        leadership_participation: 0,
        urgency: 4,
        budget_range: "NOT_SURE".to_string(),
        time_available: "NOT_SURE".to_string(),
        ..midpoint.clone()
    };

    vec![
        ("Midpoint team", midpoint),
        ("Thriving team", thriving),
        ("Distressed team", distressed),
    ]
}
