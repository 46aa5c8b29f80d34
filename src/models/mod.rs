//! The drug-risk report data model.
//!
//! One `DrugRiskReport` per analyzed drug per patient, exactly as the
//! analysis service returns it. This module owns the wire format and the
//! structural invariants; it performs no analysis of its own.

pub mod enums;
pub mod report;

pub use enums::{
    AdjustmentDirection, EvidenceLevel, Impact, Phenotype, RiskLabel, Severity,
};
pub use report::{
    ClinicalRecommendation, ConfidenceExplanation, ConfidenceInterval, DosageAdjustment,
    DrugRiskReport, GeneCall, LlmExplanation, PharmacogenomicProfile, QualityMetrics,
    RiskAssessment, Variant,
};

/// Errors from model parsing and structural validation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: '{value}'")]
    InvalidEnum {
        field: &'static str,
        value: String,
    },
    #[error("Field '{field}': {problem}")]
    InvalidField { field: String, problem: String },
}

impl ModelError {
    pub(crate) fn field(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            problem: problem.into(),
        }
    }
}
