//! Report entities as returned by the analysis service.
//!
//! `DrugRiskReport::validate` is the schema gate at the transport boundary:
//! an external payload that deserializes but violates an invariant (fraction
//! out of range, inverted confidence interval, empty mandatory text) is
//! rejected there with a message naming the offending field, so nothing
//! structurally broken ever reaches the rendering layer.

use serde::{Deserialize, Serialize};

use super::enums::{
    AdjustmentDirection, EvidenceLevel, Impact, Phenotype, RiskLabel, Severity,
};
use super::ModelError;

// ═══════════════════════════════════════════════════════════
// Entities
// ═══════════════════════════════════════════════════════════

/// One drug-risk report: a single drug analyzed for a single patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRiskReport {
    /// Opaque patient identifier; echoed, never validated locally.
    pub patient_id: String,
    /// Echoes the requested drug name.
    pub drug: String,
    /// ISO-8601 instant of analysis.
    pub timestamp: String,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: LlmExplanation,
    pub quality_metrics: QualityMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_label: RiskLabel,
    /// Fraction in [0, 1] at rest; rendering multiplies by 100.
    pub confidence_score: f64,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PharmacogenomicProfile {
    pub primary_gene: String,
    /// Free-text allele pair notation, e.g. `*2/*3`.
    pub diplotype: String,
    pub phenotype: Phenotype,
    /// Order-preserving; may be empty.
    pub detected_variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_genes: Option<Vec<GeneCall>>,
}

/// A secondary gene call alongside the primary gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneCall {
    pub gene: String,
    pub diplotype: String,
    pub phenotype: Phenotype,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub rsid: String,
    pub gene: String,
    /// `chromosome:coordinate` string, e.g. `chr10:94942290`.
    pub position: String,
    pub ref_allele: String,
    pub alt_allele: String,
    pub genotype: String,
    pub consequence: String,
    pub impact: Impact,
    pub evidence_level: EvidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_annotation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecommendation {
    pub action: String,
    /// Narrow legacy payloads carry a single free-text `details` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_adjustment: Option<DosageAdjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_drugs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contraindications: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageAdjustment {
    /// Multiplier on the standard dose; must be positive.
    pub factor: f64,
    pub direction: AdjustmentDirection,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmExplanation {
    pub summary: String,
    pub genetic_factors: Vec<String>,
    pub clinical_implications: String,
    pub patient_friendly_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_reasoning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_interaction_mechanism: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_explanation: Option<ConfidenceExplanation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceExplanation {
    /// Fraction in [0, 1].
    pub confidence_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub vcf_parsing_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene_match_confidence: Option<f64>,
    /// Percentage in [0, 100], unlike the fraction-valued confidences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_call_quality: Option<f64>,
    /// Integer "x" multiplier, e.g. 52 for 52x coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

// ═══════════════════════════════════════════════════════════
// Structural validation
// ═══════════════════════════════════════════════════════════

impl DrugRiskReport {
    /// Check the structural invariants the wire format cannot express.
    ///
    /// Returns the first violation found, naming the offending field.
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("patient_id", &self.patient_id)?;
        require_text("drug", &self.drug)?;
        require_text("timestamp", &self.timestamp)?;

        require_fraction(
            "risk_assessment.confidence_score",
            self.risk_assessment.confidence_score,
        )?;

        self.pharmacogenomic_profile.validate()?;
        self.clinical_recommendation.validate()?;
        self.llm_generated_explanation.validate()?;
        self.quality_metrics.validate()?;
        Ok(())
    }
}

impl PharmacogenomicProfile {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("pharmacogenomic_profile.primary_gene", &self.primary_gene)?;
        require_text("pharmacogenomic_profile.diplotype", &self.diplotype)?;
        for (i, variant) in self.detected_variants.iter().enumerate() {
            require_text(format!("detected_variants[{i}].rsid"), &variant.rsid)?;
            require_text(format!("detected_variants[{i}].gene"), &variant.gene)?;
        }
        if let Some(genes) = &self.additional_genes {
            for (i, call) in genes.iter().enumerate() {
                require_text(format!("additional_genes[{i}].gene"), &call.gene)?;
            }
        }
        Ok(())
    }
}

impl ClinicalRecommendation {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("clinical_recommendation.action", &self.action)?;
        if let Some(adjustment) = &self.dosage_adjustment {
            if !(adjustment.factor > 0.0) {
                return Err(ModelError::field(
                    "dosage_adjustment.factor",
                    format!("must be positive, got {}", adjustment.factor),
                ));
            }
        }
        Ok(())
    }
}

impl LlmExplanation {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("llm_generated_explanation.summary", &self.summary)?;
        require_text(
            "llm_generated_explanation.clinical_implications",
            &self.clinical_implications,
        )?;
        require_text(
            "llm_generated_explanation.patient_friendly_explanation",
            &self.patient_friendly_explanation,
        )?;
        if let Some(confidence) = &self.confidence_explanation {
            require_fraction(
                "confidence_explanation.confidence_score",
                confidence.confidence_score,
            )?;
        }
        Ok(())
    }
}

impl QualityMetrics {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(confidence) = self.gene_match_confidence {
            require_fraction("quality_metrics.gene_match_confidence", confidence)?;
        }
        if let Some(quality) = self.variant_call_quality {
            if !(0.0..=100.0).contains(&quality) {
                return Err(ModelError::field(
                    "quality_metrics.variant_call_quality",
                    format!("must be a percentage in [0, 100], got {quality}"),
                ));
            }
        }
        if let Some(interval) = &self.confidence_interval {
            require_fraction("confidence_interval.lower", interval.lower)?;
            require_fraction("confidence_interval.upper", interval.upper)?;
            if interval.lower > interval.upper {
                return Err(ModelError::field(
                    "quality_metrics.confidence_interval",
                    format!("lower {} exceeds upper {}", interval.lower, interval.upper),
                ));
            }
        }
        Ok(())
    }
}

fn require_text(field: impl Into<String>, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::field(field, "must not be empty"));
    }
    Ok(())
}

fn require_fraction(field: &str, value: f64) -> Result<(), ModelError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ModelError::field(
            field,
            format!("must be a fraction in [0, 1], got {value}"),
        ));
    }
    Ok(())
}
