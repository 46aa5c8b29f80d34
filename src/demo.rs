//! Embedded sample report set.
//!
//! A fixed collection of five example reports for one illustrative patient,
//! shown whenever a session has no stored reports or the stored value fails
//! to parse. This is a fallback data source, not a network dependency; the
//! clinical text mirrors published CPIC guideline language and is
//! illustrative only.

use crate::models::{
    AdjustmentDirection, ClinicalRecommendation, ConfidenceInterval, DosageAdjustment,
    DrugRiskReport, EvidenceLevel, GeneCall, Impact, LlmExplanation, PharmacogenomicProfile,
    Phenotype, QualityMetrics, RiskAssessment, RiskLabel, Severity, Variant,
};

/// Patient id shared by every sample report.
pub const DEMO_PATIENT_ID: &str = "PT-2026-DEMO-12847";

/// Analysis model version stamped on the sample reports.
pub const DEMO_MODEL_VERSION: &str = "PharmaGuard-v2.1.0";

/// The fixed sample report set: five drugs for one illustrative patient.
pub fn demo_reports() -> Vec<DrugRiskReport> {
    vec![
        warfarin(),
        codeine(),
        simvastatin(),
        metoprolol(),
        clopidogrel(),
    ]
}

fn warfarin() -> DrugRiskReport {
    DrugRiskReport {
        patient_id: DEMO_PATIENT_ID.into(),
        drug: "Warfarin".into(),
        timestamp: "2026-02-19T14:32:00.000Z".into(),
        risk_assessment: RiskAssessment {
            risk_label: RiskLabel::AdjustDosage,
            confidence_score: 0.94,
            severity: Severity::High,
            reasoning: Some(
                "Patient carries CYP2C9*2/*3 compound heterozygous genotype and VKORC1 \
                 -1639G>A variant, both significantly affecting warfarin metabolism and \
                 sensitivity. This combination results in dramatically reduced warfarin \
                 clearance and increased bleeding risk at standard doses."
                    .into(),
            ),
        },
        pharmacogenomic_profile: PharmacogenomicProfile {
            primary_gene: "CYP2C9".into(),
            diplotype: "*2/*3".into(),
            phenotype: Phenotype::Pm,
            detected_variants: vec![
                Variant {
                    rsid: "rs1799853".into(),
                    gene: "CYP2C9".into(),
                    position: "chr10:94942290".into(),
                    ref_allele: "C".into(),
                    alt_allele: "T".into(),
                    genotype: "C/T".into(),
                    consequence: "missense_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some(
                        "CYP2C9*2 allele - reduced enzyme activity (~40%)".into(),
                    ),
                },
                Variant {
                    rsid: "rs1057910".into(),
                    gene: "CYP2C9".into(),
                    position: "chr10:94981296".into(),
                    ref_allele: "A".into(),
                    alt_allele: "C".into(),
                    genotype: "A/C".into(),
                    consequence: "missense_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some(
                        "CYP2C9*3 allele - reduced enzyme activity (~20%)".into(),
                    ),
                },
                Variant {
                    rsid: "rs9923231".into(),
                    gene: "VKORC1".into(),
                    position: "chr16:31107689".into(),
                    ref_allele: "A".into(),
                    alt_allele: "G".into(),
                    genotype: "A/G".into(),
                    consequence: "regulatory_variant".into(),
                    impact: Impact::Moderate,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some(
                        "-1639G>A variant - increased warfarin sensitivity".into(),
                    ),
                },
                Variant {
                    rsid: "rs2108622".into(),
                    gene: "CYP4F2".into(),
                    position: "chr19:15990431".into(),
                    ref_allele: "C".into(),
                    alt_allele: "T".into(),
                    genotype: "C/T".into(),
                    consequence: "missense_variant".into(),
                    impact: Impact::Moderate,
                    evidence_level: EvidenceLevel::TwoA,
                    clinical_annotation: Some(
                        "V433M variant - may affect vitamin K metabolism".into(),
                    ),
                },
            ],
            additional_genes: Some(vec![GeneCall {
                gene: "VKORC1".into(),
                diplotype: "-1639G>A (het)".into(),
                phenotype: Phenotype::Im,
            }]),
        },
        clinical_recommendation: ClinicalRecommendation {
            action: "Reduce initial dose by 75% and implement intensive monitoring".into(),
            details: None,
            dosage_adjustment: Some(DosageAdjustment {
                factor: 0.25,
                direction: AdjustmentDirection::Decrease,
                rationale: "Poor metabolizer phenotype combined with increased warfarin \
                            sensitivity requires substantial dose reduction. CPIC guidelines \
                            recommend 0.5-2mg initial dose vs standard 5-10mg."
                    .into(),
            }),
            alternative_drugs: Some(vec![
                "Apixaban".into(),
                "Rivaroxaban".into(),
                "Dabigatran".into(),
                "Edoxaban".into(),
            ]),
            monitoring_recommendations: Some(vec![
                "INR monitoring every 2-3 days initially, then weekly for first month".into(),
                "Target INR 2.0-3.0 with strict monitoring".into(),
                "Educate patient on bleeding precautions and drug/food interactions".into(),
                "Consider direct oral anticoagulants (DOACs) as safer alternative".into(),
                "Pharmacist consultation for dose titration strategy".into(),
            ]),
            contraindications: Some(vec![
                "Avoid concomitant use with CYP2C9 inhibitors (fluconazole, amiodarone)".into(),
                "Extreme caution with NSAIDs due to increased bleeding risk".into(),
            ]),
        },
        llm_generated_explanation: LlmExplanation {
            summary: "This patient has high-risk genetic variants that dramatically reduce \
                      warfarin metabolism and increase drug sensitivity."
                .into(),
            genetic_factors: vec![
                "CYP2C9*2 allele reduces enzyme activity to ~40% of normal".into(),
                "CYP2C9*3 allele reduces enzyme activity to ~20% of normal".into(),
                "Compound heterozygous (*2/*3) results in ~12% residual activity".into(),
                "VKORC1 -1639G>A variant increases warfarin sensitivity 3-5 fold".into(),
                "CYP4F2 variant may slightly increase vitamin K metabolism".into(),
            ],
            clinical_implications: "Warfarin requires CRITICAL DOSAGE ADJUSTMENT for this \
                 patient. The combination of CYP2C9 poor metabolizer status and VKORC1 \
                 sensitivity variant creates extremely high bleeding risk with standard \
                 dosing. Initial dose should be 75% lower than standard (0.5-2mg vs 5-10mg). \
                 This is a CPIC Level 1A recommendation requiring immediate action."
                .into(),
            patient_friendly_explanation: "Your genetic test shows that your body breaks \
                 down Warfarin very slowly and you are more sensitive to its effects than \
                 most people. This means you need a much lower dose than typical - about \
                 one-quarter of the standard amount. If you take too much, you could be at \
                 serious risk for bleeding problems. Your doctor will start you on a very \
                 low dose and monitor your blood closely with frequent tests."
                .into(),
            clinical_reasoning: None,
            drug_interaction_mechanism: None,
            safety_notes: None,
            references: Some(vec![
                "CPIC Guideline for Pharmacogenetics-Guided Warfarin Dosing (2017)".into(),
                "PharmGKB Clinical Annotation for warfarin and CYP2C9".into(),
            ]),
            confidence_explanation: None,
        },
        quality_metrics: QualityMetrics {
            vcf_parsing_success: true,
            gene_match_confidence: None,
            variant_call_quality: Some(99.2),
            coverage_depth: Some(52),
            confidence_interval: Some(ConfidenceInterval {
                lower: 0.91,
                upper: 0.97,
            }),
            model_version: Some(DEMO_MODEL_VERSION.into()),
            analysis_timestamp: Some("2026-02-19T14:32:15.000Z".into()),
        },
    }
}

fn codeine() -> DrugRiskReport {
    DrugRiskReport {
        patient_id: DEMO_PATIENT_ID.into(),
        drug: "Codeine".into(),
        timestamp: "2026-02-19T14:33:00.000Z".into(),
        risk_assessment: RiskAssessment {
            risk_label: RiskLabel::Ineffective,
            confidence_score: 0.97,
            severity: Severity::Critical,
            reasoning: Some(
                "Patient is a CYP2D6 poor metabolizer (*4/*4 genotype) with near-zero enzyme \
                 activity. Codeine is a prodrug requiring CYP2D6 conversion to morphine for \
                 analgesic effect. This patient will receive minimal to no pain relief from \
                 codeine."
                    .into(),
            ),
        },
        pharmacogenomic_profile: PharmacogenomicProfile {
            primary_gene: "CYP2D6".into(),
            diplotype: "*4/*4".into(),
            phenotype: Phenotype::Pm,
            detected_variants: vec![
                Variant {
                    rsid: "rs35742686".into(),
                    gene: "CYP2D6".into(),
                    position: "chr22:42127803".into(),
                    ref_allele: "G".into(),
                    alt_allele: "A".into(),
                    genotype: "A/A".into(),
                    consequence: "splice_site_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some("CYP2D6*4 homozygous - no enzyme activity".into()),
                },
                Variant {
                    rsid: "rs5030655".into(),
                    gene: "CYP2D6".into(),
                    position: "chr22:42130692".into(),
                    ref_allele: "G".into(),
                    alt_allele: "G".into(),
                    genotype: "G/G".into(),
                    consequence: "structural_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some("Confirms CYP2D6 loss of function".into()),
                },
            ],
            additional_genes: None,
        },
        clinical_recommendation: ClinicalRecommendation {
            action: "AVOID codeine - use alternative analgesics".into(),
            details: None,
            dosage_adjustment: None,
            alternative_drugs: Some(vec![
                "Morphine".into(),
                "Hydromorphone".into(),
                "Oxycodone".into(),
                "Tramadol (with caution)".into(),
                "Acetaminophen".into(),
                "Ibuprofen".into(),
            ]),
            monitoring_recommendations: Some(vec![
                "Do not prescribe codeine or codeine-containing combinations".into(),
                "Use direct-acting opioids if strong analgesia needed".into(),
                "Document CYP2D6 poor metabolizer status in medical record".into(),
                "Consider multimodal analgesia with non-opioid agents".into(),
                "Update medication allergy list to flag codeine as ineffective".into(),
            ]),
            contraindications: Some(vec![
                "Absolute contraindication to codeine therapy".into(),
                "Also avoid tramadol (partially dependent on CYP2D6)".into(),
            ]),
        },
        llm_generated_explanation: LlmExplanation {
            summary: "This patient cannot convert codeine to its active form due to complete \
                      CYP2D6 enzyme deficiency."
                .into(),
            genetic_factors: vec![
                "CYP2D6*4 alleles result in non-functional enzyme".into(),
                "Homozygous *4/*4 genotype = 0% enzyme activity".into(),
                "Affects ~7-10% of Caucasian population".into(),
                "Codeine requires CYP2D6 to convert to active morphine metabolite".into(),
            ],
            clinical_implications: "Codeine is INEFFECTIVE for this patient. As a prodrug, \
                 codeine must be metabolized by CYP2D6 to morphine to provide pain relief. \
                 This patient has zero CYP2D6 activity and will experience no analgesic \
                 benefit from codeine. Prescribing codeine would result in inadequate pain \
                 control and potential patient harm from untreated pain."
                .into(),
            patient_friendly_explanation: "Your genetic test shows that your body cannot \
                 activate Codeine. Codeine is an inactive drug that only works after your \
                 body converts it to morphine - but you lack the enzyme needed for this \
                 conversion. Taking Codeine would not relieve your pain at all. Your doctor \
                 should prescribe a different pain medication that works directly without \
                 needing to be converted first, such as morphine, oxycodone, or \
                 hydromorphone."
                .into(),
            clinical_reasoning: None,
            drug_interaction_mechanism: None,
            safety_notes: None,
            references: Some(vec![
                "CPIC Guideline for Codeine and CYP2D6 (2014)".into(),
                "FDA Safety Communication on Codeine in Poor Metabolizers".into(),
            ]),
            confidence_explanation: None,
        },
        quality_metrics: QualityMetrics {
            vcf_parsing_success: true,
            gene_match_confidence: None,
            variant_call_quality: Some(98.8),
            coverage_depth: Some(48),
            confidence_interval: Some(ConfidenceInterval {
                lower: 0.94,
                upper: 0.99,
            }),
            model_version: Some(DEMO_MODEL_VERSION.into()),
            analysis_timestamp: Some("2026-02-19T14:33:12.000Z".into()),
        },
    }
}

fn simvastatin() -> DrugRiskReport {
    DrugRiskReport {
        patient_id: DEMO_PATIENT_ID.into(),
        drug: "Simvastatin".into(),
        timestamp: "2026-02-19T14:34:00.000Z".into(),
        risk_assessment: RiskAssessment {
            risk_label: RiskLabel::Toxic,
            confidence_score: 0.91,
            severity: Severity::Critical,
            reasoning: Some(
                "Patient carries homozygous SLCO1B1*5/*5 genotype (rs4149056 C/C), \
                 dramatically impairing hepatic uptake of simvastatin. This results in 3-4 \
                 fold higher plasma concentrations and significantly increased risk of \
                 myopathy and rhabdomyolysis, particularly at doses >20mg."
                    .into(),
            ),
        },
        pharmacogenomic_profile: PharmacogenomicProfile {
            primary_gene: "SLCO1B1".into(),
            diplotype: "*5/*5".into(),
            phenotype: Phenotype::Pm,
            detected_variants: vec![
                Variant {
                    rsid: "rs4149056".into(),
                    gene: "SLCO1B1".into(),
                    position: "chr12:21331549".into(),
                    ref_allele: "T".into(),
                    alt_allele: "C".into(),
                    genotype: "C/C".into(),
                    consequence: "missense_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some(
                        "SLCO1B1*5 homozygous - 17x increased myopathy risk".into(),
                    ),
                },
                Variant {
                    rsid: "rs2231142".into(),
                    gene: "ABCG2".into(),
                    position: "chr4:89052323".into(),
                    ref_allele: "G".into(),
                    alt_allele: "T".into(),
                    genotype: "G/T".into(),
                    consequence: "missense_variant".into(),
                    impact: Impact::Moderate,
                    evidence_level: EvidenceLevel::TwoA,
                    clinical_annotation: Some("Q141K variant - impaired statin efflux".into()),
                },
            ],
            additional_genes: Some(vec![GeneCall {
                gene: "ABCG2".into(),
                diplotype: "Q141K (het)".into(),
                phenotype: Phenotype::Im,
            }]),
        },
        clinical_recommendation: ClinicalRecommendation {
            action: "AVOID simvastatin or use lowest dose (10mg max) with intensive monitoring"
                .into(),
            details: None,
            dosage_adjustment: Some(DosageAdjustment {
                factor: 0.2,
                direction: AdjustmentDirection::Decrease,
                rationale: "If simvastatin must be used, limit to 10mg maximum daily dose due \
                            to 17-fold increased myopathy risk at higher doses in homozygous \
                            SLCO1B1*5 carriers."
                    .into(),
            }),
            alternative_drugs: Some(vec![
                "Pravastatin".into(),
                "Rosuvastatin (low dose)".into(),
                "Fluvastatin".into(),
                "Pitavastatin".into(),
                "Atorvastatin (preferred)".into(),
            ]),
            monitoring_recommendations: Some(vec![
                "If simvastatin used: maximum 10mg daily dose, never exceed 20mg".into(),
                "Monitor CK levels at baseline and if muscle symptoms develop".into(),
                "Educate patient on myopathy symptoms (muscle pain, weakness, dark urine)"
                    .into(),
                "Consider alternative statin not affected by SLCO1B1 (pravastatin, \
                 rosuvastatin)"
                    .into(),
                "Review drug interactions - avoid CYP3A4 inhibitors completely".into(),
                "Obtain baseline renal function and monitor periodically".into(),
            ]),
            contraindications: Some(vec![
                "Do not use simvastatin >40mg (FDA restriction for all patients)".into(),
                "Avoid concomitant CYP3A4 inhibitors (grapefruit, clarithromycin, \
                 itraconazole)"
                    .into(),
                "Contraindicated with gemfibrozil in this patient".into(),
            ]),
        },
        llm_generated_explanation: LlmExplanation {
            summary: "This patient has genetic variants that dramatically increase \
                      simvastatin blood levels and risk of severe muscle toxicity."
                .into(),
            genetic_factors: vec![
                "SLCO1B1*5/*5 homozygous genotype reduces transporter function by ~80%".into(),
                "Impairs hepatic uptake of simvastatin and active metabolite".into(),
                "Results in 3-4x higher plasma concentrations at standard doses".into(),
                "ABCG2 variant further impairs drug elimination".into(),
                "Combined effect creates high-risk scenario for myopathy".into(),
            ],
            clinical_implications: "Simvastatin poses HIGH TOXICITY RISK for this patient. \
                 The SLCO1B1*5/*5 genotype is the strongest genetic predictor of \
                 statin-induced myopathy. At doses above 40mg, this patient has a 17-fold \
                 increased risk of myopathy compared to normal genotype. Even at lower \
                 doses, risk remains elevated. FDA black box warning specifically addresses \
                 this genetic risk. Strong recommendation to use alternative statin or \
                 maximum 10mg dose with careful monitoring."
                .into(),
            patient_friendly_explanation: "Your genetic test shows you have a high risk of \
                 developing serious muscle problems if you take Simvastatin, especially at \
                 higher doses. You have two copies of a gene variant that causes Simvastatin \
                 to build up in your blood to much higher levels than normal. This can lead \
                 to muscle pain, weakness, and in rare cases, severe muscle breakdown \
                 (rhabdomyolysis) that can damage your kidneys. Your doctor should either \
                 prescribe a different cholesterol medication (like Pravastatin or \
                 Atorvastatin) or, if Simvastatin is necessary, use only the lowest possible \
                 dose and monitor you carefully."
                .into(),
            clinical_reasoning: None,
            drug_interaction_mechanism: None,
            safety_notes: None,
            references: Some(vec![
                "CPIC Guideline for Simvastatin and SLCO1B1 (2012, updated 2014)".into(),
                "FDA Drug Safety Communication: SLCO1B1 and Simvastatin".into(),
            ]),
            confidence_explanation: None,
        },
        quality_metrics: QualityMetrics {
            vcf_parsing_success: true,
            gene_match_confidence: None,
            variant_call_quality: Some(99.5),
            coverage_depth: Some(58),
            confidence_interval: Some(ConfidenceInterval {
                lower: 0.88,
                upper: 0.94,
            }),
            model_version: Some(DEMO_MODEL_VERSION.into()),
            analysis_timestamp: Some("2026-02-19T14:34:18.000Z".into()),
        },
    }
}

fn metoprolol() -> DrugRiskReport {
    DrugRiskReport {
        patient_id: DEMO_PATIENT_ID.into(),
        drug: "Metoprolol".into(),
        timestamp: "2026-02-19T14:35:00.000Z".into(),
        risk_assessment: RiskAssessment {
            risk_label: RiskLabel::Safe,
            confidence_score: 0.96,
            severity: Severity::None,
            reasoning: Some(
                "Patient has normal CYP2D6 activity (*1/*1 wild-type genotype). Metoprolol \
                 will be metabolized at expected rates with standard pharmacokinetics. No \
                 dose adjustment necessary."
                    .into(),
            ),
        },
        pharmacogenomic_profile: PharmacogenomicProfile {
            primary_gene: "CYP2D6".into(),
            diplotype: "*1/*1".into(),
            phenotype: Phenotype::Nm,
            detected_variants: vec![Variant {
                rsid: "rs1065852".into(),
                gene: "CYP2D6".into(),
                position: "chr22:42126611".into(),
                ref_allele: "G".into(),
                alt_allele: "G".into(),
                genotype: "G/G".into(),
                consequence: "wild_type".into(),
                impact: Impact::Low,
                evidence_level: EvidenceLevel::OneA,
                clinical_annotation: Some("Wild-type CYP2D6 - normal enzyme activity".into()),
            }],
            additional_genes: None,
        },
        clinical_recommendation: ClinicalRecommendation {
            action: "Proceed with standard dosing per clinical indication".into(),
            details: None,
            dosage_adjustment: None,
            alternative_drugs: Some(vec![]),
            monitoring_recommendations: Some(vec![
                "Standard blood pressure and heart rate monitoring per protocol".into(),
                "Assess therapeutic response at 2-4 weeks".into(),
                "Monitor for typical beta-blocker side effects (fatigue, bradycardia)".into(),
                "No additional pharmacogenomic monitoring required".into(),
            ]),
            contraindications: None,
        },
        llm_generated_explanation: LlmExplanation {
            summary: "This patient has normal genetics for metoprolol metabolism and can use \
                      standard dosing."
                .into(),
            genetic_factors: vec![
                "CYP2D6*1/*1 wild-type genotype indicates normal enzyme function".into(),
                "100% enzyme activity - normal metabolizer phenotype".into(),
                "No rare variants detected in relevant pharmacogenes".into(),
                "Standard metoprolol pharmacokinetics expected".into(),
            ],
            clinical_implications: "Metoprolol can be used SAFELY with standard dosing for \
                 this patient. Normal CYP2D6 activity means the drug will be metabolized at \
                 typical rates. Follow standard clinical protocols for blood pressure or \
                 heart rate management. Dose adjustments should be based on clinical \
                 response rather than pharmacogenomic factors."
                .into(),
            patient_friendly_explanation: "Good news - your genetic test shows that your \
                 body processes Metoprolol normally. You can take this medication at \
                 standard doses as prescribed by your doctor. Your genes for breaking down \
                 this drug work the same way as most people, so you should respond to the \
                 medication as expected."
                .into(),
            clinical_reasoning: None,
            drug_interaction_mechanism: None,
            safety_notes: None,
            references: Some(vec![
                "PharmGKB Clinical Annotation for metoprolol and CYP2D6".into(),
            ]),
            confidence_explanation: None,
        },
        quality_metrics: QualityMetrics {
            vcf_parsing_success: true,
            gene_match_confidence: None,
            variant_call_quality: Some(98.1),
            coverage_depth: Some(44),
            confidence_interval: Some(ConfidenceInterval {
                lower: 0.93,
                upper: 0.98,
            }),
            model_version: Some(DEMO_MODEL_VERSION.into()),
            analysis_timestamp: Some("2026-02-19T14:35:09.000Z".into()),
        },
    }
}

fn clopidogrel() -> DrugRiskReport {
    DrugRiskReport {
        patient_id: DEMO_PATIENT_ID.into(),
        drug: "Clopidogrel".into(),
        timestamp: "2026-02-19T14:36:00.000Z".into(),
        risk_assessment: RiskAssessment {
            risk_label: RiskLabel::AdjustDosage,
            confidence_score: 0.89,
            severity: Severity::Moderate,
            reasoning: Some(
                "Patient carries CYP2C19*2 loss-of-function allele (heterozygous), resulting \
                 in intermediate metabolizer phenotype. Clopidogrel is a prodrug requiring \
                 CYP2C19 activation. Reduced enzyme activity leads to decreased active \
                 metabolite formation and potentially reduced antiplatelet effect."
                    .into(),
            ),
        },
        pharmacogenomic_profile: PharmacogenomicProfile {
            primary_gene: "CYP2C19".into(),
            diplotype: "*1/*2".into(),
            phenotype: Phenotype::Im,
            detected_variants: vec![
                Variant {
                    rsid: "rs4244285".into(),
                    gene: "CYP2C19".into(),
                    position: "chr10:94781859".into(),
                    ref_allele: "G".into(),
                    alt_allele: "A".into(),
                    genotype: "G/A".into(),
                    consequence: "splice_site_variant".into(),
                    impact: Impact::High,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some("CYP2C19*2 - loss of function allele".into()),
                },
                Variant {
                    rsid: "rs4986893".into(),
                    gene: "CYP2C19".into(),
                    position: "chr10:94781858".into(),
                    ref_allele: "G".into(),
                    alt_allele: "G".into(),
                    genotype: "G/G".into(),
                    consequence: "wild_type".into(),
                    impact: Impact::Low,
                    evidence_level: EvidenceLevel::OneA,
                    clinical_annotation: Some("Wild-type allele on second chromosome".into()),
                },
            ],
            additional_genes: None,
        },
        clinical_recommendation: ClinicalRecommendation {
            action: "Consider alternative P2Y12 inhibitor or higher clopidogrel dose".into(),
            details: None,
            dosage_adjustment: Some(DosageAdjustment {
                factor: 1.5,
                direction: AdjustmentDirection::Increase,
                rationale: "Some evidence supports higher clopidogrel doses (150mg) in \
                            CYP2C19 intermediate metabolizers, though alternative P2Y12 \
                            inhibitors are preferred"
                    .into(),
            }),
            alternative_drugs: Some(vec![
                "Prasugrel (if no prior stroke/TIA)".into(),
                "Ticagrelor".into(),
            ]),
            monitoring_recommendations: Some(vec![
                "Strongly consider prasugrel or ticagrelor instead of clopidogrel".into(),
                "If clopidogrel used, consider platelet function testing".into(),
                "Monitor for cardiovascular events more closely".into(),
                "Higher loading dose (600mg) may be considered in PCI setting".into(),
                "Document CYP2C19 intermediate metabolizer status".into(),
            ]),
            contraindications: Some(vec![
                "If prasugrel chosen: avoid in patients with prior stroke/TIA or age >75 \
                 years"
                    .into(),
            ]),
        },
        llm_generated_explanation: LlmExplanation {
            summary: "This patient has reduced ability to activate clopidogrel, potentially \
                      decreasing its protective effects."
                .into(),
            genetic_factors: vec![
                "CYP2C19*2 allele creates non-functional enzyme".into(),
                "Heterozygous genotype (*1/*2) = ~55% enzyme activity".into(),
                "Intermediate metabolizer phenotype".into(),
                "Clopidogrel requires CYP2C19 for conversion to active metabolite".into(),
                "Reduced activation may compromise antiplatelet effect".into(),
            ],
            clinical_implications: "Clopidogrel requires DOSAGE ADJUSTMENT or preferably \
                 ALTERNATIVE medication for this patient. As an intermediate CYP2C19 \
                 metabolizer, this patient produces less active drug metabolite, potentially \
                 reducing protection against cardiovascular events. Clinical studies show \
                 intermediate metabolizers have 1.5-2x higher risk of major adverse \
                 cardiovascular events. FDA boxed warning addresses this genetic risk. \
                 Prasugrel or ticagrelor are superior alternatives unaffected by CYP2C19 \
                 genetics."
                .into(),
            patient_friendly_explanation: "Your genetic test shows that your body does not \
                 fully activate Clopidogrel, which is used to prevent blood clots and heart \
                 attacks. You have one normal and one slow version of the gene that \
                 activates this drug, so you get only about half the benefit. This could \
                 mean less protection for your heart. Your doctor should consider \
                 prescribing a different blood thinner like Prasugrel or Ticagrelor that \
                 works better for people with your genetics, or possibly use a higher dose \
                 of Clopidogrel with careful monitoring."
                .into(),
            clinical_reasoning: None,
            drug_interaction_mechanism: None,
            safety_notes: None,
            references: Some(vec![
                "CPIC Guideline for Clopidogrel and CYP2C19 (2013, updated 2019)".into(),
                "FDA Boxed Warning for Clopidogrel and CYP2C19".into(),
            ]),
            confidence_explanation: None,
        },
        quality_metrics: QualityMetrics {
            vcf_parsing_success: true,
            gene_match_confidence: None,
            variant_call_quality: Some(97.9),
            coverage_depth: Some(47),
            confidence_interval: Some(ConfidenceInterval {
                lower: 0.85,
                upper: 0.93,
            }),
            model_version: Some(DEMO_MODEL_VERSION.into()),
            analysis_timestamp: Some("2026-02-19T14:36:22.000Z".into()),
        },
    }
}
