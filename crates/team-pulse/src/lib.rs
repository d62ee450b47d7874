//! Team Pulse Diagnostic: questionnaire scoring engine and service facade.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
