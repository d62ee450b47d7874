use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for scored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Version tag stamped onto every answer set. Carried through to storage so
/// historical records can be re-read if the formulas ever change; the engine
/// itself never branches on it.
pub const ALGORITHM_VERSION: &str = "tpd_algo_v1.0.0";

/// Raw questionnaire payload as collected by the public form.
///
/// Ordinal ratings arrive as integers on a 0-4 scale; categorical fields are
/// free-form strings matched against known option keys downstream, with
/// documented defaults for anything unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub sector: String,
    pub team_size: u32,
    pub role_in_process: String,
    pub planning_stage: String,
    pub approval_process: String,
    pub morale: u8,
    pub trust: u8,
    pub communication: u8,
    pub respect: u8,
    pub conflict_severity: u8,
    pub gossip_indicator: u8,
    pub competition_indicator: u8,
    pub silos_indicator: u8,
    pub burnout_indicator: u8,
    pub change_stress: u8,
    pub leadership_buy_in: u8,
    pub leadership_participation: u8,
    pub urgency: u8,
    pub budget_range: String,
    pub time_available: String,
    pub preferred_format: String,
    pub timeline: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

/// Validated, version-stamped answer set consumed by the scoring engine.
///
/// Produced exclusively by the intake guard; the calculators assume the
/// ordinal fields are already within the 0-4 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub version: String,
    pub sector: String,
    pub team_size: u32,
    pub role_in_process: String,
    pub planning_stage: String,
    pub approval_process: String,
    pub morale: u8,
    pub trust: u8,
    pub communication: u8,
    pub respect: u8,
    pub conflict_severity: u8,
    pub gossip_indicator: u8,
    pub competition_indicator: u8,
    pub silos_indicator: u8,
    pub burnout_indicator: u8,
    pub change_stress: u8,
    pub leadership_buy_in: u8,
    pub leadership_participation: u8,
    pub urgency: u8,
    pub budget_range: String,
    pub time_available: String,
    pub preferred_format: String,
    pub timeline: String,
    pub notes: Option<String>,
}

/// One of the ten normalized measures of team health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    CommunicationQuality,
    TrustSafety,
    RespectCulture,
    TeamCohesion,
    ConflictPressure,
    ToxicIndicators,
    BurnoutStrain,
    LeadershipSupport,
    ChangeStress,
    CollaborationReadiness,
}

impl Dimension {
    /// Declaration order. Doubles as the tie-break key when ranking focus
    /// areas and strengths, so the order here is load-bearing.
    pub const ALL: [Dimension; 10] = [
        Dimension::CommunicationQuality,
        Dimension::TrustSafety,
        Dimension::RespectCulture,
        Dimension::TeamCohesion,
        Dimension::ConflictPressure,
        Dimension::ToxicIndicators,
        Dimension::BurnoutStrain,
        Dimension::LeadershipSupport,
        Dimension::ChangeStress,
        Dimension::CollaborationReadiness,
    ];

    /// Display label used on the results page and in focus-area rankings.
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::CommunicationQuality => "Communication Quality",
            Dimension::TrustSafety => "Trust & Safety",
            Dimension::RespectCulture => "Respect & Culture",
            Dimension::TeamCohesion => "Team Cohesion",
            Dimension::ConflictPressure => "Conflict Management",
            Dimension::ToxicIndicators => "Toxic Indicators",
            Dimension::BurnoutStrain => "Burnout & Wellness",
            Dimension::LeadershipSupport => "Leadership Support",
            Dimension::ChangeStress => "Change Readiness",
            Dimension::CollaborationReadiness => "Collaboration",
        }
    }

    /// Higher stored values represent a worse state for these dimensions.
    pub const fn is_inverted(self) -> bool {
        matches!(
            self,
            Dimension::ConflictPressure
                | Dimension::ToxicIndicators
                | Dimension::BurnoutStrain
                | Dimension::ChangeStress
        )
    }
}

/// Five-band classification of the Team Pulse Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
    Critical,
}

impl RiskLevel {
    /// Band thresholds are inclusive on the lower bound: exactly 75 is LOW,
    /// exactly 60 is MODERATE, and so on down to CRITICAL.
    pub fn from_pulse_score(score: u8) -> Self {
        if score >= 75 {
            RiskLevel::Low
        } else if score >= 60 {
            RiskLevel::Moderate
        } else if score >= 45 {
            RiskLevel::Elevated
        } else if score >= 30 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::Elevated => "ELEVATED",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// The four service offerings the recommendation engine chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    HalfDay,
    WeekendCamp,
    Workshop,
    DiscoveryCall,
}

impl RecommendationType {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationType::HalfDay => "HALF_DAY",
            RecommendationType::WeekendCamp => "WEEKEND_CAMP",
            RecommendationType::Workshop => "WORKSHOP",
            RecommendationType::DiscoveryCall => "DISCOVERY_CALL",
        }
    }
}

/// Internal sales-qualification tier derived from buying-intent signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadBand {
    A,
    B,
    C,
    D,
}

impl LeadBand {
    /// Inclusive lower bounds, same convention as [`RiskLevel`].
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            LeadBand::A
        } else if score >= 55 {
            LeadBand::B
        } else if score >= 35 {
            LeadBand::C
        } else {
            LeadBand::D
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadBand::A => "A",
            LeadBand::B => "B",
            LeadBand::C => "C",
            LeadBand::D => "D",
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
