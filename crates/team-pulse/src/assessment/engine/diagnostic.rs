use serde::{Deserialize, Serialize};

use super::super::domain::{Answers, Dimension, RiskLevel};

/// Normalise a positively framed 0-4 rating to the 0-100 scale.
pub(crate) fn likert_score(value: u8) -> f64 {
    f64::from(value) / 4.0 * 100.0
}

/// Normalise a 0-4 severity rating to the 0-100 scale. The transform is the
/// same as [`likert_score`]; the result is read as higher-is-worse at the
/// point of use.
pub(crate) fn severity_score(value: u8) -> f64 {
    f64::from(value) / 4.0 * 100.0
}

/// The ten derived dimension scores, each on the 0-100 scale.
///
/// Field order matches [`Dimension::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticDimensions {
    pub communication_quality: f64,
    pub trust_safety: f64,
    pub respect_culture: f64,
    pub team_cohesion: f64,
    pub conflict_pressure: f64,
    pub toxic_indicators: f64,
    pub burnout_strain: f64,
    pub leadership_support: f64,
    pub change_stress: f64,
    pub collaboration_readiness: f64,
}

impl DiagnosticDimensions {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::CommunicationQuality => self.communication_quality,
            Dimension::TrustSafety => self.trust_safety,
            Dimension::RespectCulture => self.respect_culture,
            Dimension::TeamCohesion => self.team_cohesion,
            Dimension::ConflictPressure => self.conflict_pressure,
            Dimension::ToxicIndicators => self.toxic_indicators,
            Dimension::BurnoutStrain => self.burnout_strain,
            Dimension::LeadershipSupport => self.leadership_support,
            Dimension::ChangeStress => self.change_stress,
            Dimension::CollaborationReadiness => self.collaboration_readiness,
        }
    }

    /// All ten values in declaration order.
    pub fn values(&self) -> [f64; 10] {
        Dimension::ALL.map(|dimension| self.get(dimension))
    }
}

/// Full diagnostic profile for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub team_pulse_score: u8,
    pub risk_level: RiskLevel,
    pub health_score: u8,
    pub risk_score: u8,
    pub readiness_score: u8,
    pub dimensions: DiagnosticDimensions,
    pub top_focus_areas: Vec<String>,
    pub strengths: Vec<String>,
}

fn derive_dimensions(answers: &Answers) -> DiagnosticDimensions {
    let communication_quality = likert_score(answers.communication);
    let trust_safety = likert_score(answers.trust);
    let respect_culture = likert_score(answers.respect);
    let team_cohesion = (likert_score(answers.morale) + likert_score(answers.trust)) / 2.0;
    let conflict_pressure = severity_score(answers.conflict_severity);
    let toxic_indicators = (severity_score(answers.gossip_indicator)
        + severity_score(answers.competition_indicator)
        + severity_score(answers.silos_indicator))
        / 3.0;
    let burnout_strain = severity_score(answers.burnout_indicator);
    let leadership_support = (likert_score(answers.leadership_buy_in)
        + likert_score(answers.leadership_participation))
        / 2.0;
    let change_stress = severity_score(answers.change_stress);
    // Derived from two dimensions rather than raw ratings.
    let collaboration_readiness = (communication_quality + team_cohesion) / 2.0;

    DiagnosticDimensions {
        communication_quality,
        trust_safety,
        respect_culture,
        team_cohesion,
        conflict_pressure,
        toxic_indicators,
        burnout_strain,
        leadership_support,
        change_stress,
        collaboration_readiness,
    }
}

/// Weighted composite in [0,100]. The four inverted dimensions contribute as
/// `100 - x` so that a higher pulse score always means a healthier team.
/// Weights sum to 1.00.
fn team_pulse_score(d: &DiagnosticDimensions) -> u8 {
    let weighted = d.communication_quality * 0.14
        + d.trust_safety * 0.14
        + d.respect_culture * 0.12
        + d.team_cohesion * 0.12
        + (100.0 - d.conflict_pressure) * 0.14
        + (100.0 - d.toxic_indicators) * 0.12
        + (100.0 - d.burnout_strain) * 0.10
        + d.leadership_support * 0.06
        + (100.0 - d.change_stress) * 0.04
        + d.collaboration_readiness * 0.02;
    weighted.round() as u8
}

/// Unweighted mean of the four relational dimensions.
fn health_score(d: &DiagnosticDimensions) -> u8 {
    let mean =
        (d.communication_quality + d.trust_safety + d.respect_culture + d.team_cohesion) / 4.0;
    mean.round() as u8
}

/// Mean of the three pressure dimensions, reported uninverted: a high risk
/// score means high risk, unlike the pulse score convention.
fn risk_score(d: &DiagnosticDimensions) -> u8 {
    let mean = (d.conflict_pressure + d.toxic_indicators + d.burnout_strain) / 3.0;
    mean.round() as u8
}

fn readiness_score(d: &DiagnosticDimensions) -> u8 {
    let mean =
        (d.leadership_support + d.collaboration_readiness + (100.0 - d.change_stress)) / 3.0;
    mean.round() as u8
}

/// Rank all ten dimensions by severity, worst first. Equal badness keeps the
/// [`Dimension::ALL`] declaration order because the sort is stable.
fn badness_ranking(d: &DiagnosticDimensions) -> Vec<(Dimension, f64)> {
    let mut ranked: Vec<(Dimension, f64)> = Dimension::ALL
        .iter()
        .map(|&dimension| {
            let score = d.get(dimension);
            let badness = if dimension.is_inverted() {
                score
            } else {
                100.0 - score
            };
            (dimension, badness)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Derive the full diagnostic profile from a validated answer set.
///
/// Pure and total: ratings outside the 0-4 scale produce out-of-range output
/// rather than an error. Range enforcement happens at intake before this is
/// called.
pub fn calculate_diagnostic(answers: &Answers) -> DiagnosticResult {
    let dimensions = derive_dimensions(answers);

    let team_pulse_score = team_pulse_score(&dimensions);
    let risk_level = RiskLevel::from_pulse_score(team_pulse_score);

    let ranked = badness_ranking(&dimensions);
    let top_focus_areas = ranked
        .iter()
        .take(3)
        .map(|(dimension, _)| dimension.label().to_string())
        .collect();
    // Best-first: walk the descending ranking from the tail.
    let strengths = ranked
        .iter()
        .rev()
        .take(3)
        .map(|(dimension, _)| dimension.label().to_string())
        .collect();

    DiagnosticResult {
        team_pulse_score,
        risk_level,
        health_score: health_score(&dimensions),
        risk_score: risk_score(&dimensions),
        readiness_score: readiness_score(&dimensions),
        dimensions,
        top_focus_areas,
        strengths,
    }
}
