use serde::{Deserialize, Serialize};

use super::super::domain::{Answers, LeadBand};

/// The three weighted sub-scores feeding the composite lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSignals {
    pub planning_stage_score: u8,
    pub approval_process_score: u8,
    pub buyer_role_score: u8,
}

/// Internal sales-qualification score. Never shown to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScore {
    pub cls_core: u8,
    pub cls_final: u8,
    pub band: LeadBand,
    pub signals: LeadSignals,
}

/// How far along the buyer is; unknown stages fall back to 30.
fn planning_stage_score(planning_stage: &str) -> u8 {
    match planning_stage {
        "EXPLORING" => 20,
        "COMPARING" => 50,
        "NEED_PROPOSAL" => 70,
        "READY_SOON" => 90,
        "URGENT_ASAP" => 95,
        _ => 30,
    }
}

/// How close the respondent is to sign-off; unknown answers fall back to 40.
fn approval_process_score(approval_process: &str) -> u8 {
    match approval_process {
        "I_CAN_APPROVE" => 100,
        "ONE_APPROVER" => 80,
        "MULTI_STAKEHOLDER" => 60,
        "NEED_INTERNAL_ALIGNMENT" => 40,
        "FUTURE_PLANNING" => 20,
        _ => 40,
    }
}

/// Buying power implied by the respondent's role; unknown roles fall back
/// to 40.
fn buyer_role_score(role_in_process: &str) -> u8 {
    match role_in_process {
        "FOUNDER_OWNER" => 95,
        "HR_PEOPLE_CULTURE" => 90,
        "TEAM_LEADER_MANAGER" => 75,
        "LND_OD_TRAINING" => 70,
        "PROGRAMME_PROJECT_MANAGER" => 65,
        "OPERATIONS_ADMIN" => 55,
        "CONSULTANT_ADVISOR" => 50,
        "TEAM_MEMBER" => 30,
        "STUDENT_RESEARCH" => 10,
        "OTHER" => 40,
        _ => 40,
    }
}

/// Score the commercial quality of a lead from three intent signals.
///
/// Independent of the diagnostic pipeline: only the planning stage, approval
/// process, and buyer role answers are read.
pub fn calculate_lead_score(answers: &Answers) -> LeadScore {
    let signals = LeadSignals {
        planning_stage_score: planning_stage_score(&answers.planning_stage),
        approval_process_score: approval_process_score(&answers.approval_process),
        buyer_role_score: buyer_role_score(&answers.role_in_process),
    };

    let weighted = f64::from(signals.planning_stage_score) * 0.45
        + f64::from(signals.approval_process_score) * 0.35
        + f64::from(signals.buyer_role_score) * 0.20;
    let cls_core = weighted.round() as u8;

    // Current tables cannot exceed 100, keep the clamp anyway.
    let cls_final = cls_core.min(100);
    let band = LeadBand::from_score(cls_final);

    LeadScore {
        cls_core,
        cls_final,
        band,
        signals,
    }
}
