//! Bulk scoring of questionnaire exports.
//!
//! Reads a CSV export whose columns match the [`AssessmentSubmission`]
//! field names, runs every row through intake and the three scoring stages,
//! and reports per-row outcomes. Rows that fail intake are skipped and
//! reported rather than aborting the run; structural CSV errors abort.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::domain::{AssessmentSubmission, LeadBand, RecommendationType, RiskLevel};
use super::engine::{calculate_diagnostic, calculate_lead_score, calculate_recommendation};
use super::intake::IntakeGuard;

#[derive(Debug)]
pub enum BatchScoreError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchScoreError::Io(err) => write!(f, "failed to read questionnaire export: {}", err),
            BatchScoreError::Csv(err) => write!(f, "invalid questionnaire CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchScoreError::Io(err) => Some(err),
            BatchScoreError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchScoreError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Headline numbers for one successfully scored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// 1-based line number in the source file, header included.
    pub line: usize,
    pub sector: String,
    pub team_size: u32,
    pub team_pulse_score: u8,
    pub risk_level: RiskLevel,
    pub recommendation: RecommendationType,
    pub lead_band: LeadBand,
}

/// Row rejected at intake, with the violation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSkip {
    pub line: usize,
    pub reason: String,
}

/// Outcome of a batch run over one export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub skipped: Vec<BatchSkip>,
}

pub struct BatchScorer;

impl BatchScorer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BatchReport, BatchScoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BatchReport, BatchScoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut outcomes = Vec::new();
        let mut skipped = Vec::new();

        for (index, row) in csv_reader.deserialize::<AssessmentSubmission>().enumerate() {
            let submission = row?;
            // The header occupies line 1.
            let line = index + 2;

            let sector = submission.sector.clone();
            let team_size = submission.team_size;
            match IntakeGuard::answers_from_submission(submission) {
                Ok(answers) => {
                    let diagnostic = calculate_diagnostic(&answers);
                    let recommendation = calculate_recommendation(&answers, &diagnostic);
                    let lead = calculate_lead_score(&answers);
                    outcomes.push(BatchOutcome {
                        line,
                        sector,
                        team_size,
                        team_pulse_score: diagnostic.team_pulse_score,
                        risk_level: diagnostic.risk_level,
                        recommendation: recommendation.kind,
                        lead_band: lead.band,
                    });
                }
                Err(violation) => skipped.push(BatchSkip {
                    line,
                    reason: violation.to_string(),
                }),
            }
        }

        Ok(BatchReport { outcomes, skipped })
    }
}
