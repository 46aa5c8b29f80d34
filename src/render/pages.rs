//! The three views, rendered as complete self-contained HTML documents
//! (inline CSS, no external assets).

use crate::config::{APP_NAME, APP_VERSION};
use crate::models::DrugRiskReport;
use crate::render::cards::report_card;
use crate::render::escape_html;

/// State of the upload form when (re-)rendered.
#[derive(Debug, Default)]
pub struct UploadForm<'a> {
    /// Previously entered drug text, preserved across a failed submit.
    pub drugs_value: &'a str,
    pub file_error: Option<&'a str>,
    pub drug_error: Option<&'a str>,
}

/// Landing view: product hero plus the two entry points.
pub fn landing_page() -> String {
    let body = format!(
        r#"<div class="hero">
  <h1>{APP_NAME} Clinical Intelligence</h1>
  <p class="lead">Pharmacogenomics dashboard that displays drug-gene risk reports
  with explainable clinical insights.</p>
</div>
<div class="grid-2 entry-cards">
  <div class="card">
    <h3>Upload Analysis</h3>
    <p class="muted">Upload VCF files and receive pharmacogenomic risk insights
    with evidence-based dosing recommendations.</p>
    <a class="btn btn-primary" href="/upload">Start Analysis</a>
  </div>
  <div class="card">
    <h3>View Dashboard</h3>
    <p class="muted">Explore detailed pharmacogenomic reports, variant analysis,
    and clinical recommendations.</p>
    <a class="btn btn-outline" href="/dashboard">View Reports</a>
  </div>
</div>
<p class="footnote">For research and clinical decision support. Not a substitute
for professional medical judgment.</p>"#
    );
    page_shell("PharmaGuard", &body)
}

/// Upload view: file picker + drug field, field-scoped error slots, the
/// requirements card and the demo-data card.
pub fn upload_page(form: &UploadForm<'_>) -> String {
    let body = format!(
        r#"<div class="page-head">
  <h1>Upload Patient Data</h1>
  <p class="muted">Upload a VCF file and specify medications to receive pharmacogenomic analysis</p>
</div>
<div class="card">
  <h3>Patient Genomic Data</h3>
  <form method="post" action="/analyze" enctype="multipart/form-data" onsubmit="return lockSubmit(this)">
    <div class="field">
      <label for="file-input">VCF File</label>
      <div class="dropzone">
        <input id="file-input" type="file" name="file" accept=".vcf">
        <div class="muted">Maximum file size: 5MB</div>
      </div>
      {file_error}
    </div>
    <div class="field">
      <label for="drug-input">Drug Name(s)</label>
      <input id="drug-input" type="text" name="drugs" value="{drugs_value}" placeholder="e.g., Warfarin, Clopidogrel">
      <div class="muted">Enter one or more drug names separated by commas</div>
      {drug_error}
    </div>
    <button type="submit" class="btn btn-primary btn-wide">Analyze</button>
  </form>
</div>
<div class="card subtle">
  <div class="label">File Requirements</div>
  <ul class="muted">
    <li>VCF format only (.vcf extension)</li>
    <li>Maximum file size: 5MB</li>
    <li>Must include pharmacogenomic variants (CYP450, SLCO, TPMT, DPYD)</li>
  </ul>
</div>
<div class="card subtle">
  <div class="label">Demo Data Available</div>
  <p class="muted">View demo pharmacogenomic reports showcasing different risk levels.</p>
  <form method="post" action="/demo">
    <button type="submit" class="btn btn-outline btn-wide">Load Demo Reports</button>
  </form>
</div>"#,
        file_error = error_slot(form.file_error),
        drug_error = error_slot(form.drug_error),
        drugs_value = escape_html(form.drugs_value),
    );
    page_shell("Upload — PharmaGuard", &body)
}

/// Dashboard view: one card per report, or the empty state.
pub fn dashboard_page(reports: &[DrugRiskReport], is_demo: bool) -> String {
    if reports.is_empty() {
        let body = r#"<div class="card empty-state">
  <p>No reports available</p>
  <p class="muted">Upload a VCF file and specify medications to generate reports</p>
</div>"#;
        return page_shell("Dashboard — PharmaGuard", body);
    }

    let demo_badge = if is_demo {
        r#"<span class="badge badge-neutral">Demo Data</span>"#
    } else {
        ""
    };
    let noun = if reports.len() == 1 { "report" } else { "reports" };

    let cards: String = reports
        .iter()
        .enumerate()
        .map(|(index, report)| report_card(report, index))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<div class="page-head">
  <div class="head-row"><h1>Pharmacogenomic Reports</h1>{demo_badge}</div>
  <p class="muted">Patient ID: {patient_id} &bull; {count} {noun}</p>
</div>
{cards}"#,
        patient_id = escape_html(&reports[0].patient_id),
        count = reports.len(),
    );
    page_shell("Dashboard — PharmaGuard", &body)
}

fn error_slot(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<div class="error">{}</div>"#, escape_html(message)),
        None => String::new(),
    }
}

/// Shared document shell: header nav, inline stylesheet, card scripts.
fn page_shell(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
*,*::before,*::after{{box-sizing:border-box}}
body{{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#fafafa;color:#18181b}}
header{{background:#fff;border-bottom:1px solid #e4e4e7}}
.nav{{max-width:1100px;margin:0 auto;padding:14px 24px;display:flex;align-items:center;gap:24px}}
.brand{{display:flex;align-items:center;gap:8px;text-decoration:none;color:#18181b;font-size:1.05rem}}
.brand-mark{{width:30px;height:30px;background:#18181b;color:#fff;border-radius:6px;display:flex;align-items:center;justify-content:center;font-size:.8rem;font-weight:600}}
.nav a.nav-link{{font-size:.9rem;color:#52525b;text-decoration:none;padding:6px 10px;border-radius:6px}}
.nav a.nav-link:hover{{color:#18181b;background:#f4f4f5}}
main{{max-width:1100px;margin:0 auto;padding:32px 24px}}
h1{{font-size:1.5rem;margin:0}}
h3{{font-size:1rem;margin:0 0 12px}}
.hero{{text-align:center;margin:32px 0 40px}}
.hero h1{{font-size:2.2rem}}
.lead{{color:#71717a;max-width:620px;margin:12px auto 0}}
.page-head{{margin-bottom:24px}}
.head-row{{display:flex;align-items:center;justify-content:space-between}}
.card{{background:#fff;border:1px solid #e4e4e7;border-radius:12px;padding:24px;margin-bottom:24px}}
.card.subtle{{background:#fafafa}}
.subcard{{border:1px solid #e4e4e7;border-radius:10px;padding:16px;margin-top:16px}}
.subcard-head{{display:flex;align-items:center;gap:8px;justify-content:space-between}}
.entry-cards .card{{margin-bottom:0}}
.grid-2{{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:16px}}
.field{{margin-top:12px}}
.field.bordered{{border-top:1px solid #e4e4e7;padding-top:12px}}
.label{{font-size:.75rem;color:#71717a;margin-bottom:4px}}
.mono{{font-family:ui-monospace,SFMono-Regular,Menlo,monospace;font-size:.85rem}}
.muted{{color:#71717a;font-size:.85rem}}
.emphasis{{font-weight:600}}
.panel{{background:#fafafa;border:1px solid #e4e4e7;border-radius:8px;padding:10px;font-size:.9rem;line-height:1.5}}
.info-panel{{background:#eff6ff;border:1px solid #bfdbfe;border-radius:8px;padding:12px}}
.warn-panel{{background:#fffbeb;border:1px solid #fde68a;border-radius:8px;padding:12px}}
.badge{{display:inline-block;padding:3px 10px;border-radius:999px;font-size:.75rem;font-weight:500}}
.badge-green{{background:#f0fdf4;color:#15803d;border:1px solid #bbf7d0}}
.badge-amber{{background:#fffbeb;color:#b45309;border:1px solid #fde68a}}
.badge-red{{background:#fef2f2;color:#b91c1c;border:1px solid #fecaca}}
.badge-neutral{{background:#f4f4f5;color:#3f3f46;border:1px solid #e4e4e7}}
.pill{{display:inline-block;padding:4px 10px;background:#eff6ff;border:1px solid #bfdbfe;border-radius:999px;font-size:.75rem;color:#1d4ed8;margin:2px}}
.pills{{display:flex;flex-wrap:wrap;gap:4px}}
.meter{{height:8px;background:#f4f4f5;border-radius:999px;overflow:hidden;margin:4px 0}}
.meter-fill{{height:100%;background:#3b82f6;border-radius:999px}}
.meter-value{{font-size:.9rem;font-weight:500}}
.actions{{display:flex;align-items:flex-start;justify-content:space-between;gap:12px}}
.buttons{{display:flex;gap:8px}}
.btn{{display:inline-block;padding:9px 16px;border-radius:8px;font-size:.9rem;border:none;cursor:pointer;text-decoration:none;text-align:center}}
.btn-primary{{background:#18181b;color:#fff}}
.btn-primary:hover{{background:#27272a}}
.btn-primary:disabled{{background:#71717a;cursor:default}}
.btn-outline{{background:#fff;color:#3f3f46;border:1px solid #d4d4d8}}
.btn-outline:hover{{background:#fafafa}}
.btn-wide{{width:100%;margin-top:16px}}
.dropzone{{border:2px dashed #d4d4d8;border-radius:10px;padding:24px;text-align:center;background:#fff}}
.error{{color:#dc2626;font-size:.85rem;margin-top:6px}}
.empty-state{{text-align:center;padding:40px}}
table.variants{{width:100%;border-collapse:collapse;font-size:.85rem;margin-top:8px}}
table.variants th{{text-align:left;font-size:.75rem;color:#3f3f46;background:#fafafa;padding:8px;border-bottom:1px solid #e4e4e7}}
table.variants td{{padding:8px;border-bottom:1px solid #f4f4f5;vertical-align:top}}
table.variants td.empty{{text-align:center;color:#71717a;padding:32px}}
.gene-row{{display:flex;align-items:center;justify-content:space-between;font-size:.8rem;padding:6px;border-radius:6px}}
.gene-row:hover{{background:#fafafa}}
ul,ol{{margin:4px 0;padding-left:20px;font-size:.9rem;line-height:1.5}}
ol.references{{font-size:.8rem;color:#52525b}}
.ai-confidence{{font-size:.75rem;background:#ecfdf5;color:#047857;border:1px solid #a7f3d0;padding:3px 8px;border-radius:6px}}
.trust-note{{font-size:.65rem;color:#a1a1aa;text-align:right;margin-top:12px}}
.phenotype-name{{font-size:.9rem;margin-left:6px}}
.footnote{{text-align:center;font-size:.75rem;color:#a1a1aa;margin-top:40px}}
</style>
</head>
<body>
<header>
  <div class="nav">
    <a class="brand" href="/"><span class="brand-mark">PG</span>{APP_NAME}</a>
    <a class="nav-link" href="/upload">Upload</a>
    <a class="nav-link" href="/dashboard">Dashboard</a>
    <span class="muted" style="margin-left:auto">v{APP_VERSION}</span>
  </div>
</header>
<main>
{body}
</main>
<script>
function copyReport(index,button){{
  var source=document.getElementById('report-json-'+index);
  if(!source||!navigator.clipboard)return;
  navigator.clipboard.writeText(source.textContent).then(function(){{
    var previous=button.textContent;
    button.textContent='Copied!';
    setTimeout(function(){{button.textContent=previous;}},2000);
  }});
}}
function lockSubmit(form){{
  var button=form.querySelector('button[type=submit]');
  if(button){{button.disabled=true;button.textContent='Analyzing...';}}
  return true;
}}
</script>
</body>
</html>"##
    )
}
