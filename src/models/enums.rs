use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with exact wire spelling + as_str + FromStr pattern
macro_rules! str_enum {
    ($name:ident / $field:literal { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: $field,
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(RiskLabel / "risk_label" {
    Safe => "Safe",
    AdjustDosage => "Adjust Dosage",
    Toxic => "Toxic",
    Ineffective => "Ineffective",
});

str_enum!(Severity / "severity" {
    None => "none",
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Critical => "critical",
});

/// Metabolizer status codes; the wire carries the short CPIC-style code.
str_enum!(Phenotype / "phenotype" {
    Pm => "PM",
    Im => "IM",
    Nm => "NM",
    Rm => "RM",
    Urm => "URM",
    Unknown => "Unknown",
});

str_enum!(Impact / "impact" {
    High => "high",
    Moderate => "moderate",
    Low => "low",
});

str_enum!(EvidenceLevel / "evidence_level" {
    OneA => "1A",
    OneB => "1B",
    TwoA => "2A",
    TwoB => "2B",
    Three => "3",
    Four => "4",
});

str_enum!(AdjustmentDirection / "direction" {
    Increase => "increase",
    Decrease => "decrease",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn risk_label_round_trip() {
        for (variant, s) in [
            (RiskLabel::Safe, "Safe"),
            (RiskLabel::AdjustDosage, "Adjust Dosage"),
            (RiskLabel::Toxic, "Toxic"),
            (RiskLabel::Ineffective, "Ineffective"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RiskLabel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn severity_round_trip() {
        for (variant, s) in [
            (Severity::None, "none"),
            (Severity::Low, "low"),
            (Severity::Moderate, "moderate"),
            (Severity::High, "high"),
            (Severity::Critical, "critical"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Severity::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn phenotype_round_trip() {
        for (variant, s) in [
            (Phenotype::Pm, "PM"),
            (Phenotype::Im, "IM"),
            (Phenotype::Nm, "NM"),
            (Phenotype::Rm, "RM"),
            (Phenotype::Urm, "URM"),
            (Phenotype::Unknown, "Unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Phenotype::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn evidence_level_round_trip() {
        for (variant, s) in [
            (EvidenceLevel::OneA, "1A"),
            (EvidenceLevel::OneB, "1B"),
            (EvidenceLevel::TwoA, "2A"),
            (EvidenceLevel::TwoB, "2B"),
            (EvidenceLevel::Three, "3"),
            (EvidenceLevel::Four, "4"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EvidenceLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::AdjustDosage).unwrap(),
            "\"Adjust Dosage\""
        );
        assert_eq!(serde_json::to_string(&Severity::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Phenotype::Urm).unwrap(), "\"URM\"");
        assert_eq!(
            serde_json::to_string(&EvidenceLevel::OneA).unwrap(),
            "\"1A\""
        );

        let label: RiskLabel = serde_json::from_str("\"Adjust Dosage\"").unwrap();
        assert_eq!(label, RiskLabel::AdjustDosage);
    }

    #[test]
    fn unknown_wire_value_is_a_deser_error() {
        assert!(serde_json::from_str::<RiskLabel>("\"Risky\"").is_err());
        assert!(serde_json::from_str::<Severity>("\"extreme\"").is_err());
        assert!(serde_json::from_str::<Phenotype>("\"XM\"").is_err());
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = RiskLabel::from_str("Risky").unwrap_err();
        assert!(err.to_string().contains("risk_label"));
        assert!(Severity::from_str("").is_err());
        assert!(AdjustmentDirection::from_str("up").is_err());
    }
}
