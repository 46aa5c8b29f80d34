//! Per-report card markup.
//!
//! One card per `DrugRiskReport`: actions bar, risk assessment, gene
//! profile, variant table, clinical recommendation, AI explanation and
//! quality metrics. Sections backed by absent optional fields are omitted
//! entirely.

use crate::models::{
    ClinicalRecommendation, DrugRiskReport, LlmExplanation, PharmacogenomicProfile,
    QualityMetrics, RiskAssessment, Variant,
};
use crate::render::format::{
    capitalize, dosage_phrase, format_percent, format_percent_whole, format_timestamp,
    impact_color, phenotype_color, phenotype_label, risk_color, severity_color,
};
use crate::render::escape_html;

/// Render one full report card. `index` feeds the copy/download wiring.
pub fn report_card(report: &DrugRiskReport, index: usize) -> String {
    format!(
        r#"<section class="card report-card" id="report-{index}">
{actions}
{risk}
{profile}
{variants}
{recommendation}
{explanation}
{quality}
</section>"#,
        actions = actions_bar(report, index),
        risk = risk_section(&report.drug, &report.risk_assessment),
        profile = gene_profile_section(&report.patient_id, &report.pharmacogenomic_profile),
        variants = variant_section(&report.pharmacogenomic_profile.detected_variants),
        recommendation = recommendation_section(&report.clinical_recommendation),
        explanation = explanation_section(&report.llm_generated_explanation),
        quality = quality_section(&report.quality_metrics),
    )
}

fn actions_bar(report: &DrugRiskReport, index: usize) -> String {
    // The pretty JSON is embedded next to the card for the clipboard
    // action; '<' is escaped so report text can never close the tag.
    let json = serde_json::to_string_pretty(report)
        .unwrap_or_default()
        .replace('<', "\\u003c");

    format!(
        r#"<div class="actions">
  <div>
    <div class="label">Analysis Timestamp</div>
    <div class="mono">{timestamp}</div>
  </div>
  <div class="buttons">
    <button type="button" class="btn btn-outline" onclick="copyReport({index}, this)">Copy JSON</button>
    <a class="btn btn-outline" href="/reports/{index}/download">Download</a>
  </div>
</div>
<script type="application/json" id="report-json-{index}">{json}</script>"#,
        timestamp = escape_html(&format_timestamp(&report.timestamp)),
    )
}

fn risk_section(drug: &str, assessment: &RiskAssessment) -> String {
    let reasoning = match &assessment.reasoning {
        Some(text) => format!(
            r#"<div class="field">
    <div class="label">Clinical Reasoning</div>
    <div class="panel">{}</div>
  </div>"#,
            escape_html(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="subcard">
  <div class="subcard-head">
    <h3>{drug}</h3>
    <span class="{risk_class}">{risk_label}</span>
    <span class="{severity_class}">{severity}</span>
  </div>
  <div class="field">
    <div class="label">Confidence Score</div>
    <div class="meter"><div class="meter-fill" style="width:{percent}"></div></div>
    <div class="meter-value">{percent}</div>
  </div>
  {reasoning}
</div>"#,
        drug = escape_html(drug),
        risk_class = risk_color(assessment.risk_label).badge_class(),
        risk_label = escape_html(assessment.risk_label.as_str()),
        severity_class = severity_color(assessment.severity).badge_class(),
        severity = capitalize(assessment.severity.as_str()),
        percent = format_percent(assessment.confidence_score),
    )
}

fn gene_profile_section(patient_id: &str, profile: &PharmacogenomicProfile) -> String {
    let additional = match &profile.additional_genes {
        Some(genes) if !genes.is_empty() => {
            let rows: String = genes
                .iter()
                .map(|call| {
                    format!(
                        r#"<div class="gene-row"><span class="mono">{gene}</span><span>{diplotype}</span><span class="{class}">{phenotype}</span></div>"#,
                        gene = escape_html(&call.gene),
                        diplotype = escape_html(&call.diplotype),
                        class = phenotype_color(call.phenotype).badge_class(),
                        phenotype = call.phenotype.as_str(),
                    )
                })
                .collect();
            format!(
                r#"<div class="field bordered">
    <div class="label">Additional Genes</div>
    {rows}
  </div>"#
            )
        }
        _ => String::new(),
    };

    format!(
        r#"<div class="subcard">
  <h3>Pharmacogenomic Profile</h3>
  <div class="grid-2">
    <div class="field"><div class="label">Primary Gene</div><div class="mono">{gene}</div></div>
    <div class="field"><div class="label">Diplotype</div><div class="mono">{diplotype}</div></div>
  </div>
  <div class="field">
    <div class="label">Phenotype</div>
    <span class="{phenotype_class}">{phenotype_code}</span>
    <span class="phenotype-name">{phenotype_name}</span>
  </div>
  {additional}
  <div class="field bordered"><div class="label">Patient ID</div><div class="mono">{patient_id}</div></div>
</div>"#,
        gene = escape_html(&profile.primary_gene),
        diplotype = escape_html(&profile.diplotype),
        phenotype_class = phenotype_color(profile.phenotype).badge_class(),
        phenotype_code = profile.phenotype.as_str(),
        phenotype_name = phenotype_label(profile.phenotype),
        patient_id = escape_html(patient_id),
    )
}

fn variant_section(variants: &[Variant]) -> String {
    let body = if variants.is_empty() {
        r#"<tr><td colspan="7" class="empty">No pharmacogenomic variants detected</td></tr>"#
            .to_string()
    } else {
        variants
            .iter()
            .map(|variant| {
                format!(
                    r#"<tr>
      <td class="mono">{gene}</td>
      <td class="mono">{rsid}</td>
      <td class="mono muted">{position}</td>
      <td class="mono">{genotype}<div class="muted">{ref_allele}/{alt_allele}</div></td>
      <td class="muted">{consequence}</td>
      <td><span class="{impact_class}">{impact}</span></td>
      <td>{evidence}</td>
    </tr>"#,
                    gene = escape_html(&variant.gene),
                    rsid = escape_html(&variant.rsid),
                    position = escape_html(&variant.position),
                    genotype = escape_html(&variant.genotype),
                    ref_allele = escape_html(&variant.ref_allele),
                    alt_allele = escape_html(&variant.alt_allele),
                    consequence = escape_html(&variant.consequence),
                    impact_class = impact_color(variant.impact).badge_class(),
                    impact = variant.impact.as_str(),
                    evidence = variant.evidence_level.as_str(),
                )
            })
            .collect()
    };

    format!(
        r#"<div class="subcard">
  <h3>Detected Variants ({count})</h3>
  <table class="variants">
    <thead><tr><th>Gene</th><th>rsID</th><th>Position</th><th>Genotype</th><th>Consequence</th><th>Impact</th><th>Evidence</th></tr></thead>
    <tbody>{body}</tbody>
  </table>
</div>"#,
        count = variants.len(),
    )
}

fn recommendation_section(recommendation: &ClinicalRecommendation) -> String {
    let details = optional_text_field("Details", recommendation.details.as_deref());

    let dosage = match &recommendation.dosage_adjustment {
        Some(adjustment) => format!(
            r#"<div class="field">
    <div class="label">Dosage Adjustment</div>
    <div class="emphasis">{phrase}</div>
    <div class="muted">{rationale}</div>
  </div>"#,
            phrase = dosage_phrase(adjustment),
            rationale = escape_html(&adjustment.rationale),
        ),
        None => String::new(),
    };

    let alternatives = match &recommendation.alternative_drugs {
        Some(drugs) if !drugs.is_empty() => {
            let pills: String = drugs
                .iter()
                .map(|drug| format!(r#"<span class="pill">{}</span>"#, escape_html(drug)))
                .collect();
            format!(
                r#"<div class="field">
    <div class="label">Alternative Medications</div>
    <div class="pills">{pills}</div>
  </div>"#
            )
        }
        _ => String::new(),
    };

    let monitoring = optional_list_field(
        "Monitoring Recommendations",
        recommendation.monitoring_recommendations.as_deref(),
    );
    let contraindications = optional_list_field(
        "Contraindications",
        recommendation.contraindications.as_deref(),
    );

    format!(
        r#"<div class="subcard">
  <h3>Clinical Recommendation</h3>
  <div class="field">
    <div class="label">Recommended Action</div>
    <div class="panel emphasis">{action}</div>
  </div>
  {details}{dosage}{alternatives}{monitoring}{contraindications}
</div>"#,
        action = escape_html(&recommendation.action),
    )
}

fn explanation_section(explanation: &LlmExplanation) -> String {
    let confidence = match &explanation.confidence_explanation {
        Some(conf) => format!(
            r#"<span class="ai-confidence">AI Confidence: {}</span>"#,
            format_percent_whole(conf.confidence_score)
        ),
        None => String::new(),
    };

    let factors: String = explanation
        .genetic_factors
        .iter()
        .map(|factor| format!("<li>{}</li>", escape_html(factor)))
        .collect();

    let reasoning =
        optional_text_field("Clinical Reasoning", explanation.clinical_reasoning.as_deref());
    let mechanism = optional_text_field(
        "Drug Activation Mechanism",
        explanation.drug_interaction_mechanism.as_deref(),
    );

    let safety = match &explanation.safety_notes {
        Some(notes) if !notes.is_empty() => {
            let items: String = notes
                .iter()
                .map(|note| format!("<li>{}</li>", escape_html(note)))
                .collect();
            format!(
                r#"<div class="field warn-panel">
    <div class="label">Safety Considerations</div>
    <ul>{items}</ul>
  </div>"#
            )
        }
        _ => String::new(),
    };

    let references = match &explanation.references {
        Some(refs) if !refs.is_empty() => {
            let items: String = refs
                .iter()
                .map(|reference| format!("<li>{}</li>", escape_html(reference)))
                .collect();
            format!(
                r#"<div class="field">
    <div class="label">References</div>
    <ol class="references">{items}</ol>
  </div>"#
            )
        }
        _ => String::new(),
    };

    format!(
        r#"<div class="subcard">
  <div class="subcard-head"><h3>Clinical AI Analysis</h3>{confidence}</div>
  <div class="field"><div class="label">Summary</div><div>{summary}</div></div>
  {reasoning}
  <div class="field"><div class="label">Genetic Factors</div><ul>{factors}</ul></div>
  {mechanism}
  <div class="field"><div class="label">Clinical Implications</div><div>{implications}</div></div>
  <div class="field info-panel">
    <div class="label">Patient-Friendly Explanation</div>
    <div>{patient_friendly}</div>
  </div>
  {safety}{references}
  <div class="trust-note">AI-generated explanation (CPIC-aligned)</div>
</div>"#,
        summary = escape_html(&explanation.summary),
        implications = escape_html(&explanation.clinical_implications),
        patient_friendly = escape_html(&explanation.patient_friendly_explanation),
    )
}

fn quality_section(metrics: &QualityMetrics) -> String {
    let parsing = if metrics.vcf_parsing_success {
        r#"<span class="badge badge-green">Success</span>"#
    } else {
        r#"<span class="badge badge-red">Failed</span>"#
    };

    let mut cells = vec![format!(
        r#"<div class="field"><div class="label">VCF Parsing</div>{parsing}</div>"#
    )];

    if let Some(confidence) = metrics.gene_match_confidence {
        cells.push(format!(
            r#"<div class="field"><div class="label">Gene Match Confidence</div><div>{}</div></div>"#,
            format_percent(confidence)
        ));
    }
    if let Some(quality) = metrics.variant_call_quality {
        cells.push(format!(
            r#"<div class="field"><div class="label">Variant Call Quality</div><div>{quality:.1}%</div></div>"#
        ));
    }
    if let Some(depth) = metrics.coverage_depth {
        cells.push(format!(
            r#"<div class="field"><div class="label">Coverage Depth</div><div>{depth}x</div></div>"#
        ));
    }
    if let Some(interval) = &metrics.confidence_interval {
        cells.push(format!(
            r#"<div class="field"><div class="label">Confidence Interval</div><div>{lower} - {upper}</div></div>"#,
            lower = format_percent_whole(interval.lower),
            upper = format_percent_whole(interval.upper),
        ));
    }
    if let Some(version) = &metrics.model_version {
        cells.push(format!(
            r#"<div class="field"><div class="label">Model Version</div><div class="mono">{}</div></div>"#,
            escape_html(version)
        ));
    }
    if let Some(instant) = &metrics.analysis_timestamp {
        cells.push(format!(
            r#"<div class="field"><div class="label">Analysis Timestamp</div><div class="mono muted">{}</div></div>"#,
            escape_html(&format_timestamp(instant))
        ));
    }

    format!(
        r#"<div class="subcard">
  <h3>Quality Metrics</h3>
  <div class="grid-2">{}</div>
</div>"#,
        cells.join("\n    ")
    )
}

fn optional_text_field(label: &str, value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => format!(
            r#"<div class="field"><div class="label">{label}</div><div>{}</div></div>"#,
            escape_html(text)
        ),
        _ => String::new(),
    }
}

fn optional_list_field(label: &str, items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => {
            let rendered: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!(
                r#"<div class="field"><div class="label">{label}</div><ul>{rendered}</ul></div>"#
            )
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_reports;

    fn by_drug(drug: &str) -> DrugRiskReport {
        demo_reports()
            .into_iter()
            .find(|r| r.drug == drug)
            .unwrap()
    }

    #[test]
    fn codeine_confidence_renders_as_97_percent() {
        let card = report_card(&by_drug("Codeine"), 1);
        assert!(card.contains("97.0%"));
        assert!(card.contains("Ineffective"));
        assert!(card.contains("badge-red"));
    }

    #[test]
    fn phenotype_label_and_color_render() {
        let card = report_card(&by_drug("Codeine"), 1);
        assert!(card.contains("Poor Metabolizer"));

        let safe = report_card(&by_drug("Metoprolol"), 3);
        assert!(safe.contains("Normal Metabolizer"));
        assert!(safe.contains("badge-green"));
    }

    #[test]
    fn absent_additional_genes_section_is_omitted() {
        let card = report_card(&by_drug("Codeine"), 1);
        assert!(!card.contains("Additional Genes"));

        let with_genes = report_card(&by_drug("Warfarin"), 0);
        assert!(with_genes.contains("Additional Genes"));
        assert!(with_genes.contains("VKORC1"));
    }

    #[test]
    fn absent_dosage_adjustment_is_omitted() {
        let card = report_card(&by_drug("Metoprolol"), 3);
        assert!(!card.contains("Dosage Adjustment"));
    }

    #[test]
    fn dosage_phrase_renders_for_warfarin() {
        let card = report_card(&by_drug("Warfarin"), 0);
        assert!(card.contains("Reduce by 75%"));
    }

    #[test]
    fn empty_alternative_drugs_are_omitted() {
        // Metoprolol carries an empty alternatives list.
        let card = report_card(&by_drug("Metoprolol"), 3);
        assert!(!card.contains("Alternative Medications"));
    }

    #[test]
    fn empty_variant_list_renders_placeholder_row() {
        let mut report = by_drug("Metoprolol");
        report.pharmacogenomic_profile.detected_variants.clear();
        let card = report_card(&report, 0);
        assert!(card.contains("Detected Variants (0)"));
        assert!(card.contains("No pharmacogenomic variants detected"));
    }

    #[test]
    fn severity_is_capitalized() {
        let card = report_card(&by_drug("Simvastatin"), 2);
        assert!(card.contains("Critical"));
    }

    #[test]
    fn report_text_is_escaped() {
        let mut report = by_drug("Codeine");
        report.drug = "<script>alert(1)</script>".into();
        let card = report_card(&report, 0);
        assert!(!card.contains("<script>alert"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn embedded_json_cannot_close_its_script_tag() {
        let mut report = by_drug("Codeine");
        report.risk_assessment.reasoning = Some("</script><b>x</b>".into());
        let card = report_card(&report, 0);
        let json_block = card
            .split("<script type=\"application/json\"")
            .nth(1)
            .unwrap();
        let embedded = json_block.split("</script>").next().unwrap();
        assert!(!embedded.contains("</script"));
        assert!(embedded.contains("\\u003c/script"));
    }

    #[test]
    fn quality_metrics_render_present_fields_only() {
        let card = report_card(&by_drug("Warfarin"), 0);
        assert!(card.contains("99.2%"));
        assert!(card.contains("52x"));
        assert!(card.contains("91% - 97%"));
        assert!(card.contains("PharmaGuard-v2.1.0"));
        assert!(!card.contains("Gene Match Confidence"));

        let mut report = by_drug("Warfarin");
        report.quality_metrics.coverage_depth = None;
        report.quality_metrics.confidence_interval = None;
        let card = report_card(&report, 0);
        assert!(!card.contains("Coverage Depth"));
        assert!(!card.contains("Confidence Interval"));
    }

    #[test]
    fn failed_vcf_parsing_renders_red_badge() {
        let mut report = by_drug("Warfarin");
        report.quality_metrics.vcf_parsing_success = false;
        let card = report_card(&report, 0);
        assert!(card.contains("Failed"));
    }
}
