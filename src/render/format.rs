//! Display-level transforms.
//!
//! Fixed mapping tables and formatting helpers; the data model keeps
//! fractions and short codes, this module turns them into what the user
//! sees. No business logic.

use crate::models::{
    AdjustmentDirection, DosageAdjustment, Impact, Phenotype, RiskLabel, Severity,
};

/// Fixed color buckets used by the badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Green,
    Amber,
    Red,
    Neutral,
}

impl ColorCategory {
    /// CSS class for a badge in this bucket.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Green => "badge badge-green",
            Self::Amber => "badge badge-amber",
            Self::Red => "badge badge-red",
            Self::Neutral => "badge badge-neutral",
        }
    }
}

/// Phenotype code → human label.
pub fn phenotype_label(phenotype: Phenotype) -> &'static str {
    match phenotype {
        Phenotype::Pm => "Poor Metabolizer",
        Phenotype::Im => "Intermediate Metabolizer",
        Phenotype::Nm => "Normal Metabolizer",
        Phenotype::Rm => "Rapid Metabolizer",
        Phenotype::Urm => "Ultra-Rapid Metabolizer",
        Phenotype::Unknown => "Unknown",
    }
}

pub fn risk_color(label: RiskLabel) -> ColorCategory {
    match label {
        RiskLabel::Safe => ColorCategory::Green,
        RiskLabel::AdjustDosage => ColorCategory::Amber,
        RiskLabel::Toxic | RiskLabel::Ineffective => ColorCategory::Red,
    }
}

pub fn severity_color(severity: Severity) -> ColorCategory {
    match severity {
        Severity::None | Severity::Low => ColorCategory::Neutral,
        Severity::Moderate => ColorCategory::Amber,
        Severity::High | Severity::Critical => ColorCategory::Red,
    }
}

pub fn impact_color(impact: Impact) -> ColorCategory {
    match impact {
        Impact::High => ColorCategory::Red,
        Impact::Moderate => ColorCategory::Amber,
        Impact::Low => ColorCategory::Neutral,
    }
}

pub fn phenotype_color(phenotype: Phenotype) -> ColorCategory {
    match phenotype {
        Phenotype::Pm => ColorCategory::Red,
        Phenotype::Im => ColorCategory::Amber,
        Phenotype::Nm => ColorCategory::Green,
        Phenotype::Rm | Phenotype::Urm | Phenotype::Unknown => ColorCategory::Neutral,
    }
}

/// Fraction → percent string with one-decimal rounding: 0.97 → "97.0%".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Fraction → whole percent string: 0.914 → "91%".
pub fn format_percent_whole(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Capitalize the first character: "critical" → "Critical".
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Dosage adjustment → phrase: factor 0.25 decrease → "Reduce by 75%".
pub fn dosage_phrase(adjustment: &DosageAdjustment) -> String {
    let verb = match adjustment.direction {
        AdjustmentDirection::Decrease => "Reduce",
        AdjustmentDirection::Increase => "Increase",
    };
    let percent = ((1.0 - adjustment.factor).abs() * 100.0).round();
    format!("{verb} by {percent:.0}%")
}

/// ISO-8601 instant → compact display form; unparseable input passes
/// through verbatim rather than failing the page.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phenotype_labels_match_mapping_table() {
        assert_eq!(phenotype_label(Phenotype::Pm), "Poor Metabolizer");
        assert_eq!(phenotype_label(Phenotype::Im), "Intermediate Metabolizer");
        assert_eq!(phenotype_label(Phenotype::Nm), "Normal Metabolizer");
        assert_eq!(phenotype_label(Phenotype::Rm), "Rapid Metabolizer");
        assert_eq!(phenotype_label(Phenotype::Urm), "Ultra-Rapid Metabolizer");
        assert_eq!(phenotype_label(Phenotype::Unknown), "Unknown");
    }

    #[test]
    fn confidence_renders_with_one_decimal() {
        assert_eq!(format_percent(0.97), "97.0%");
        assert_eq!(format_percent(0.945), "94.5%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn whole_percent_rounds() {
        assert_eq!(format_percent_whole(0.914), "91%");
        assert_eq!(format_percent_whole(0.97), "97%");
    }

    #[test]
    fn risk_label_color_buckets() {
        assert_eq!(risk_color(RiskLabel::Safe), ColorCategory::Green);
        assert_eq!(risk_color(RiskLabel::AdjustDosage), ColorCategory::Amber);
        assert_eq!(risk_color(RiskLabel::Toxic), ColorCategory::Red);
        assert_eq!(risk_color(RiskLabel::Ineffective), ColorCategory::Red);
    }

    #[test]
    fn phenotype_color_buckets() {
        assert_eq!(phenotype_color(Phenotype::Pm), ColorCategory::Red);
        assert_eq!(phenotype_color(Phenotype::Nm), ColorCategory::Green);
        assert_eq!(phenotype_color(Phenotype::Im), ColorCategory::Amber);
        assert_eq!(phenotype_color(Phenotype::Urm), ColorCategory::Neutral);
    }

    #[test]
    fn severity_and_impact_color_buckets() {
        assert_eq!(severity_color(Severity::None), ColorCategory::Neutral);
        assert_eq!(severity_color(Severity::Moderate), ColorCategory::Amber);
        assert_eq!(severity_color(Severity::Critical), ColorCategory::Red);
        assert_eq!(impact_color(Impact::High), ColorCategory::Red);
        assert_eq!(impact_color(Impact::Low), ColorCategory::Neutral);
    }

    #[test]
    fn capitalizes_severity_strings() {
        assert_eq!(capitalize("critical"), "Critical");
        assert_eq!(capitalize("none"), "None");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn dosage_phrases() {
        let decrease = DosageAdjustment {
            factor: 0.25,
            direction: AdjustmentDirection::Decrease,
            rationale: String::new(),
        };
        assert_eq!(dosage_phrase(&decrease), "Reduce by 75%");

        let increase = DosageAdjustment {
            factor: 1.5,
            direction: AdjustmentDirection::Increase,
            rationale: String::new(),
        };
        assert_eq!(dosage_phrase(&increase), "Increase by 50%");
    }

    #[test]
    fn timestamps_render_compactly() {
        assert_eq!(
            format_timestamp("2026-02-19T14:32:00.000Z"),
            "2026-02-19 14:32 UTC"
        );
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
